use std::sync::Arc;

use jsonrpsee::Methods;
use seele_interfaces::Backend;

pub use crate::api::{
    DebugApiServer,
    NetworkApiServer,
    SeeleApiServer,
    SubchainApiServer,
    TransactionPoolApiServer,
};
pub use crate::config::Config;
pub use crate::logic::{DebugApi, NetworkApi, SeeleApi, SubchainApi, TransactionPoolApi};
pub use crate::server::Rpc;

pub mod api;
pub mod api_types;
pub mod config;
pub mod error;
pub mod logic;
pub mod server;


/// One namespaced RPC service as registered with the dispatcher: the
/// namespace/version pair identifies it, `methods` is the opaque handler,
/// and `public` marks whether it may be mounted on untrusted listeners.
#[derive(Clone, Debug)]
pub struct ApiService {
    pub namespace: &'static str,
    pub version: &'static str,
    pub methods: Methods,
    pub public: bool,
}

/// Builds the node's RPC surface from a backend: exactly five services, in a
/// fixed order, each constructed from the same shared backend. Calling this
/// twice yields independent but behaviorally equivalent service sets; any
/// construction failure is fatal for node startup.
pub fn get_apis<B: Backend + 'static>(backend: Arc<B>) -> anyhow::Result<Vec<ApiService>> {
    Ok(vec![
        ApiService {
            namespace: "seele",
            version: "1.0",
            methods: SeeleApi::new(backend.clone()).into_rpc().into(),
            public: true,
        },
        ApiService {
            namespace: "txpool",
            version: "1.0",
            methods: TransactionPoolApi::new(backend.clone()).into_rpc().into(),
            public: true,
        },
        ApiService {
            namespace: "network",
            version: "1.0",
            methods: NetworkApi::new(backend.clone()).into_rpc().into(),
            public: false,
        },
        ApiService {
            namespace: "debug",
            version: "1.0",
            methods: DebugApi::new(backend.clone()).into_rpc().into(),
            public: false,
        },
        ApiService {
            namespace: "subchain",
            version: "1.0",
            methods: SubchainApi::new(backend).into_rpc().into(),
            public: true,
        },
    ])
}
