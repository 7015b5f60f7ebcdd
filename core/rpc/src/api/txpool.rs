use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use seele_types::{Hash, Receipt, Transaction};

use crate::api_types::TransactionLookup;

#[rpc(client, server, namespace = "txpool")]
pub trait TransactionPoolApi {
    /// Submits a transaction to the pool, returning its hash. Admission
    /// errors surface synchronously.
    #[method(name = "addTransaction")]
    async fn add_transaction(&self, tx: Transaction) -> RpcResult<Hash>;

    /// Looks the transaction up in the pool first, then in the chain store.
    #[method(name = "getTransactionByHash")]
    async fn get_transaction_by_hash(&self, hash: Hash) -> RpcResult<Option<TransactionLookup>>;

    #[method(name = "getReceiptByTxHash")]
    async fn get_receipt_by_tx_hash(&self, hash: Hash) -> RpcResult<Option<Receipt>>;

    #[method(name = "getTransactions")]
    async fn get_transactions(
        &self,
        processing: bool,
        pending: bool,
    ) -> RpcResult<Vec<Transaction>>;

    #[method(name = "getTxCount")]
    async fn get_tx_count(&self) -> RpcResult<usize>;
}
