use std::sync::Arc;

use jsonrpsee::core::RpcResult;
use seele_interfaces::{Backend, BlockId, Pool};
use seele_types::Block;
use tracing::trace;

use crate::api::DebugApiServer;
use crate::api_types::TxPoolContent;
use crate::error::RPCError;

pub struct DebugApi<B: Backend> {
    backend: Arc<B>,
}

impl<B: Backend> DebugApi<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl<B: Backend + 'static> DebugApiServer for DebugApi<B> {
    async fn print_block(&self, height: Option<u64>) -> RpcResult<Block> {
        trace!(target: "rpc::debug", ?height, "Serving debug_printBlock");

        let id = height.map(BlockId::Height).unwrap_or(BlockId::Latest);
        let block = self.backend.get_block(id).map_err(RPCError::from)?;
        self.backend.log().debug(format!(
            "dumped block {} at height {}",
            block.hash(),
            block.header.height
        ));
        Ok(block)
    }

    async fn is_syncing(&self) -> RpcResult<bool> {
        trace!(target: "rpc::debug", "Serving debug_isSyncing");
        Ok(self.backend.is_syncing())
    }

    async fn get_tx_pool_content(&self) -> RpcResult<TxPoolContent> {
        trace!(target: "rpc::debug", "Serving debug_getTxPoolContent");

        let pool = self.backend.tx_pool_backend();
        Ok(TxPoolContent {
            processing: pool.get_transactions(true, false),
            pending: pool.get_transactions(false, true),
        })
    }
}
