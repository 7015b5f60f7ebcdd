use seele_types::{Hash, PoolError, Transaction};

/// The minimal transaction-pool capability: submit and look up by identity.
/// Handlers that only need these two operations should depend on this trait
/// rather than on [`Pool`].
pub trait PoolCore: Send + Sync {
    /// Submits a transaction to the pool. Malformed, duplicate, or
    /// policy-violating transactions are rejected with an admission error;
    /// the admission policy itself lives in the pool implementation.
    fn add_transaction(&self, tx: Transaction) -> Result<(), PoolError>;

    /// Looks a transaction up by hash. Absence is a valid outcome, distinct
    /// from a lookup fault.
    fn get_transaction(&self, tx_hash: Hash) -> Option<Transaction>;
}

/// The full transaction-pool capability: everything in [`PoolCore`] plus bulk
/// enumeration and counting.
pub trait Pool: PoolCore {
    /// Returns transactions from the selected partitions, in pool order.
    /// `processing` selects transactions currently being packaged into a
    /// block, `pending` selects transactions waiting for admission. Both
    /// false yields an empty sequence.
    fn get_transactions(&self, processing: bool, pending: bool) -> Vec<Transaction>;

    /// Total number of transactions across the tracked partitions.
    fn get_tx_count(&self) -> usize;
}
