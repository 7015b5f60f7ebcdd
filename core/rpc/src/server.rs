use std::net::SocketAddr;
use std::ops::DerefMut;
use std::sync::Arc;

use jsonrpsee::server::{ServerBuilder, ServerHandle};
use jsonrpsee::RpcModule;
use seele_interfaces::Backend;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::get_apis;

/// The node's RPC server: mounts the registry's services and serves them
/// over HTTP and WebSocket on one listener.
pub struct Rpc {
    config: Config,

    /// The final module containing the mounted services' methods.
    module: RpcModule<()>,

    // need interior mutability to support restarts
    handle: Mutex<Option<ServerHandle>>,
}

impl Rpc {
    /// Builds the server for a backend. Private namespaces are left out
    /// unless the config opts in; a merge failure here aborts node startup.
    pub fn new<B: Backend + 'static>(config: Config, backend: Arc<B>) -> anyhow::Result<Self> {
        let mut module = RpcModule::new(());
        for service in get_apis(backend)? {
            if service.public || config.expose_private {
                module.merge(service.methods)?;
            }
        }

        Ok(Self {
            config,
            module,
            handle: Mutex::new(None),
        })
    }

    /// Binds the listener and starts serving. Returns the bound address,
    /// which differs from the configured one when port 0 was requested.
    pub async fn start(&self) -> anyhow::Result<SocketAddr> {
        let server = ServerBuilder::default()
            .build((self.config.addr.as_str(), self.config.port))
            .await?;
        let addr = server.local_addr()?;
        let handle = server.start(self.module.clone());
        *self.handle.lock().await = Some(handle);

        tracing::info!(target: "rpc", %addr, "RPC server listening");
        Ok(addr)
    }

    pub async fn shutdown(&self) {
        if let Some(handle) = std::mem::take(self.handle.lock().await.deref_mut()) {
            if handle.stop().is_ok() {
                handle.stopped().await;
            }
        }
    }
}
