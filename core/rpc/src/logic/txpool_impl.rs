use std::sync::Arc;

use jsonrpsee::core::RpcResult;
use seele_interfaces::{Backend, Chain, Pool, PoolCore};
use seele_types::{Hash, Receipt, Transaction};
use tracing::trace;

use crate::api::TransactionPoolApiServer;
use crate::api_types::TransactionLookup;
use crate::error::RPCError;

pub struct TransactionPoolApi<B: Backend> {
    backend: Arc<B>,
}

impl<B: Backend> TransactionPoolApi<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl<B: Backend + 'static> TransactionPoolApiServer for TransactionPoolApi<B> {
    async fn add_transaction(&self, tx: Transaction) -> RpcResult<Hash> {
        trace!(target: "rpc::txpool", hash = %tx.hash, "Serving txpool_addTransaction");

        let hash = tx.hash;
        self.backend
            .tx_pool_backend()
            .add_transaction(tx)
            .map_err(RPCError::from)?;
        Ok(hash)
    }

    async fn get_transaction_by_hash(&self, hash: Hash) -> RpcResult<Option<TransactionLookup>> {
        trace!(target: "rpc::txpool", %hash, "Serving txpool_getTransactionByHash");

        let pool: &dyn PoolCore = self.backend.tx_pool_backend();
        let store = self.backend.chain_backend().get_store();
        let found = self
            .backend
            .get_transaction(pool, &*store, hash)
            .map_err(RPCError::from)?;
        Ok(found.map(|(transaction, block_index)| TransactionLookup {
            status: if block_index.is_some() { "block" } else { "pool" }.to_string(),
            transaction,
            block_index,
        }))
    }

    async fn get_receipt_by_tx_hash(&self, hash: Hash) -> RpcResult<Option<Receipt>> {
        trace!(target: "rpc::txpool", %hash, "Serving txpool_getReceiptByTxHash");
        Ok(self
            .backend
            .get_receipt_by_tx_hash(hash)
            .map_err(RPCError::from)?)
    }

    async fn get_transactions(
        &self,
        processing: bool,
        pending: bool,
    ) -> RpcResult<Vec<Transaction>> {
        trace!(target: "rpc::txpool", processing, pending, "Serving txpool_getTransactions");
        Ok(self
            .backend
            .tx_pool_backend()
            .get_transactions(processing, pending))
    }

    async fn get_tx_count(&self) -> RpcResult<usize> {
        trace!(target: "rpc::txpool", "Serving txpool_getTxCount");
        Ok(self.backend.tx_pool_backend().get_tx_count())
    }
}
