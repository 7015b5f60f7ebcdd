use std::sync::Arc;

use jsonrpsee::core::RpcResult;
use seele_interfaces::{Backend, P2p, Protocol};
use seele_types::PeerInfo;
use tracing::trace;

use crate::api::NetworkApiServer;
use crate::error::RPCError;

pub struct NetworkApi<B: Backend> {
    backend: Arc<B>,
}

impl<B: Backend> NetworkApi<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl<B: Backend + 'static> NetworkApiServer for NetworkApi<B> {
    async fn get_peer_count(&self) -> RpcResult<usize> {
        trace!(target: "rpc::network", "Serving network_getPeerCount");
        Ok(self.backend.p2p_server().peer_count())
    }

    async fn get_peers_info(&self) -> RpcResult<Vec<PeerInfo>> {
        trace!(target: "rpc::network", "Serving network_getPeersInfo");
        Ok(self.backend.p2p_server().peers())
    }

    async fn get_network_version(&self) -> RpcResult<String> {
        trace!(target: "rpc::network", "Serving network_getNetworkVersion");
        Ok(self.backend.net_version().to_string())
    }

    async fn get_network_id(&self) -> RpcResult<String> {
        trace!(target: "rpc::network", "Serving network_getNetworkId");
        Ok(self.backend.network_id().to_string())
    }

    async fn get_protocol_version(&self) -> RpcResult<u32> {
        trace!(target: "rpc::network", "Serving network_getProtocolVersion");
        Ok(self
            .backend
            .protocol_backend()
            .protocol_version()
            .map_err(RPCError::from)?)
    }
}
