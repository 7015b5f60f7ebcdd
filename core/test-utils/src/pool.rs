use parking_lot::RwLock;
use seele_interfaces::{Pool, PoolCore};
use seele_types::{Hash, PoolError, Transaction};

pub const TEST_POOL_CAPACITY: usize = 1024;

#[derive(Default)]
struct PoolInner {
    processing: Vec<Transaction>,
    pending: Vec<Transaction>,
}

impl PoolInner {
    fn contains(&self, tx_hash: Hash) -> bool {
        self.processing
            .iter()
            .chain(self.pending.iter())
            .any(|tx| tx.hash == tx_hash)
    }

    fn len(&self) -> usize {
        self.processing.len() + self.pending.len()
    }
}

/// An in-memory transaction pool. New transactions land in the pending
/// partition; [`TestPool::promote`] moves them into processing the way the
/// real pool does when packaging a block.
pub struct TestPool {
    inner: RwLock<PoolInner>,
    capacity: usize,
}

impl TestPool {
    pub fn new() -> Self {
        Self::with_capacity(TEST_POOL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(PoolInner::default()),
            capacity,
        }
    }

    /// Moves a pending transaction into the processing partition. Returns
    /// false if the hash is not pending.
    pub fn promote(&self, tx_hash: Hash) -> bool {
        let mut inner = self.inner.write();
        match inner.pending.iter().position(|tx| tx.hash == tx_hash) {
            Some(position) => {
                let tx = inner.pending.remove(position);
                inner.processing.push(tx);
                true
            },
            None => false,
        }
    }

    /// Drops a transaction from whichever partition holds it, e.g. once it
    /// has been mined.
    pub fn remove(&self, tx_hash: Hash) -> bool {
        let mut inner = self.inner.write();
        let before = inner.len();
        inner.processing.retain(|tx| tx.hash != tx_hash);
        inner.pending.retain(|tx| tx.hash != tx_hash);
        inner.len() != before
    }
}

impl Default for TestPool {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolCore for TestPool {
    fn add_transaction(&self, tx: Transaction) -> Result<(), PoolError> {
        tx.validate()?;
        let mut inner = self.inner.write();
        if inner.contains(tx.hash) {
            return Err(PoolError::Duplicate);
        }
        if inner.len() >= self.capacity {
            return Err(PoolError::Full);
        }
        inner.pending.push(tx);
        Ok(())
    }

    fn get_transaction(&self, tx_hash: Hash) -> Option<Transaction> {
        let inner = self.inner.read();
        inner
            .processing
            .iter()
            .chain(inner.pending.iter())
            .find(|tx| tx.hash == tx_hash)
            .cloned()
    }
}

impl Pool for TestPool {
    fn get_transactions(&self, processing: bool, pending: bool) -> Vec<Transaction> {
        let inner = self.inner.read();
        let mut out = Vec::new();
        if processing {
            out.extend(inner.processing.iter().cloned());
        }
        if pending {
            out.extend(inner.pending.iter().cloned());
        }
        out
    }

    fn get_tx_count(&self) -> usize {
        self.inner.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::random_tx;

    #[test]
    fn accepted_transactions_are_retrievable() {
        let pool = TestPool::new();
        let tx = random_tx(0);
        let before = pool.get_tx_count();
        pool.add_transaction(tx.clone()).unwrap();
        assert_eq!(pool.get_transaction(tx.hash), Some(tx));
        assert_eq!(pool.get_tx_count(), before + 1);
    }

    #[test]
    fn duplicates_are_rejected() {
        let pool = TestPool::new();
        let tx = random_tx(0);
        pool.add_transaction(tx.clone()).unwrap();
        assert_eq!(pool.add_transaction(tx), Err(PoolError::Duplicate));
    }

    #[test]
    fn capacity_is_enforced() {
        let pool = TestPool::with_capacity(1);
        pool.add_transaction(random_tx(0)).unwrap();
        assert_eq!(pool.add_transaction(random_tx(1)), Err(PoolError::Full));
    }

    #[test]
    fn selectors_pick_the_requested_partitions() {
        let pool = TestPool::new();
        let first = random_tx(0);
        let second = random_tx(1);
        pool.add_transaction(first.clone()).unwrap();
        pool.add_transaction(second.clone()).unwrap();
        assert!(pool.promote(first.hash));

        assert!(pool.get_transactions(false, false).is_empty());
        assert_eq!(pool.get_transactions(true, false), vec![first.clone()]);
        assert_eq!(pool.get_transactions(false, true), vec![second.clone()]);

        let both = pool.get_transactions(true, true);
        assert_eq!(both.len(), pool.get_tx_count());
        assert_eq!(both, vec![first, second]);
    }

    #[test]
    fn malformed_transactions_are_rejected() {
        let pool = TestPool::new();
        let mut tx = random_tx(0);
        tx.signature.clear();
        assert!(matches!(
            pool.add_transaction(tx),
            Err(PoolError::Invalid(_))
        ));
    }
}
