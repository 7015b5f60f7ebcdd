use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use seele_types::PeerInfo;

#[rpc(client, server, namespace = "network")]
pub trait NetworkApi {
    #[method(name = "getPeerCount")]
    async fn get_peer_count(&self) -> RpcResult<usize>;

    #[method(name = "getPeersInfo")]
    async fn get_peers_info(&self) -> RpcResult<Vec<PeerInfo>>;

    #[method(name = "getNetworkVersion")]
    async fn get_network_version(&self) -> RpcResult<String>;

    #[method(name = "getNetworkId")]
    async fn get_network_id(&self) -> RpcResult<String>;

    /// Fails with a retryable error while the protocol layer is not ready.
    #[method(name = "getProtocolVersion")]
    async fn get_protocol_version(&self) -> RpcResult<u32>;
}
