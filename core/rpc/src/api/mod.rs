mod debug;
mod network;
mod seele;
mod subchain;
mod txpool;

use anyhow::Context;
use jsonrpsee::http_client::transport::HttpBackend;
use jsonrpsee::http_client::HttpClient;

pub use debug::{DebugApiClient, DebugApiServer};
pub use network::{NetworkApiClient, NetworkApiServer};
pub use seele::{SeeleApiClient, SeeleApiServer};
pub use subchain::{SubchainApiClient, SubchainApiServer};
pub use txpool::{TransactionPoolApiClient, TransactionPoolApiServer};

/// Builds a JSON-RPC client against a running node.
pub fn rpc_client(address: &str) -> anyhow::Result<HttpClient<HttpBackend>> {
    HttpClient::<HttpBackend>::builder()
        .build(address)
        .context(format!("Trying to build rpc client for {address}"))
}
