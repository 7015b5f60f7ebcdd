use std::sync::atomic::{AtomicBool, Ordering};

use seele_interfaces::{Backend, Chain, Database, P2p, Pool, Protocol};
use seele_types::{Address, Block, Hash, Logger, Receipt, Transaction};

use crate::chain::{MemoryState, TestChain};
use crate::database::MemoryDb;
use crate::p2p::TestP2p;
use crate::pool::TestPool;
use crate::protocol::TestProtocol;

pub const TEST_NET_VERSION: &str = "1.0";
pub const TEST_NETWORK_ID: &str = "seele-testnet";

/// A fully in-memory [`Backend`]: the shape a full node presents to the API
/// layer, minus everything below the capability contracts.
pub struct TestBackend {
    pool: TestPool,
    chain: TestChain,
    protocol: TestProtocol,
    p2p: TestP2p,
    account_index: MemoryDb,
    index_account: MemoryDb,
    net_version: String,
    network_id: String,
    syncing: AtomicBool,
    logger: Logger,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            pool: TestPool::new(),
            chain: TestChain::new(),
            protocol: TestProtocol::new(),
            p2p: TestP2p::default(),
            account_index: MemoryDb::default(),
            index_account: MemoryDb::default(),
            net_version: TEST_NET_VERSION.to_string(),
            network_id: TEST_NETWORK_ID.to_string(),
            syncing: AtomicBool::new(false),
            logger: Logger::new("test-backend"),
        }
    }

    pub fn with_net_version(mut self, net_version: &str) -> Self {
        self.net_version = net_version.to_string();
        self
    }

    pub fn pool(&self) -> &TestPool {
        &self.pool
    }

    pub fn chain(&self) -> &TestChain {
        &self.chain
    }

    pub fn protocol(&self) -> &TestProtocol {
        &self.protocol
    }

    pub fn p2p(&self) -> &TestP2p {
        &self.p2p
    }

    pub fn set_syncing(&self, syncing: bool) {
        self.syncing.store(syncing, Ordering::SeqCst);
    }

    /// Commits a block on the chain tip, dropping its transactions from the
    /// pool and maintaining the account indices the way a real node's
    /// indexer task would.
    pub fn commit_block(
        &self,
        creator: Address,
        transactions: Vec<Transaction>,
        receipts: Vec<Receipt>,
        state: MemoryState,
    ) -> Block {
        for tx in &transactions {
            self.pool.remove(tx.hash);
            self.append_account_index(&tx.data.from, tx.hash);
            self.append_account_index(&tx.data.to, tx.hash);
            self.index_account
                .put(tx.hash.as_bytes(), tx.data.from.as_bytes())
                .expect("memory database cannot fail");
        }
        self.chain.commit_block(creator, transactions, receipts, state)
    }

    fn append_account_index(&self, account: &Address, tx_hash: Hash) {
        let mut hashes: Vec<Hash> = self
            .account_index
            .get(account.as_bytes())
            .expect("memory database cannot fail")
            .map(|raw| serde_json::from_slice(&raw).expect("index entries are well formed"))
            .unwrap_or_default();
        hashes.push(tx_hash);
        let encoded = serde_json::to_vec(&hashes).expect("hash lists always encode");
        self.account_index
            .put(account.as_bytes(), &encoded)
            .expect("memory database cannot fail");
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TestBackend {
    fn p2p_server(&self) -> &dyn P2p {
        &self.p2p
    }

    fn net_version(&self) -> &str {
        &self.net_version
    }

    fn network_id(&self) -> &str {
        &self.network_id
    }

    fn tx_pool_backend(&self) -> &dyn Pool {
        &self.pool
    }

    fn chain_backend(&self) -> &dyn Chain {
        &self.chain
    }

    fn protocol_backend(&self) -> &dyn Protocol {
        &self.protocol
    }

    fn log(&self) -> &Logger {
        &self.logger
    }

    fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst)
    }

    fn account_index_db(&self) -> &dyn Database {
        &self.account_index
    }

    fn index_account_db(&self) -> &dyn Database {
        &self.index_account
    }
}

#[cfg(test)]
mod tests {
    use seele_interfaces::{BlockId, PoolCore};
    use seele_types::StoreError;

    use super::*;
    use crate::transaction::{random_address, random_tx, receipt_for};

    #[test]
    fn get_block_resolves_hash_height_and_latest() {
        let backend = TestBackend::new();
        let block = backend.commit_block(
            random_address(),
            vec![],
            vec![],
            MemoryState::default(),
        );

        let by_hash = backend.get_block(BlockId::Hash(block.hash())).unwrap();
        let by_height = backend.get_block(BlockId::Height(1)).unwrap();
        let latest = backend.get_block(BlockId::Latest).unwrap();
        assert_eq!(by_hash, by_height);
        assert_eq!(by_hash, latest);

        let missing = Hash::digest(b"missing block");
        assert_eq!(
            backend.get_block(BlockId::Hash(missing)).err(),
            Some(StoreError::NotFound)
        );
    }

    #[test]
    fn get_transaction_prefers_the_pool() {
        let backend = TestBackend::new();
        let tx = random_tx(0);
        backend.pool().add_transaction(tx.clone()).unwrap();

        let store = backend.chain_backend().get_store();
        let (found, index) = backend
            .get_transaction(backend.pool(), &*store, tx.hash)
            .unwrap()
            .unwrap();
        assert_eq!(found, tx);
        assert!(index.is_none());
    }

    #[test]
    fn get_transaction_falls_back_to_the_store() {
        let backend = TestBackend::new();
        let tx = random_tx(0);
        backend.pool().add_transaction(tx.clone()).unwrap();
        let receipts = vec![receipt_for(&tx, vec![])];
        let block = backend.commit_block(
            random_address(),
            vec![tx.clone()],
            receipts,
            MemoryState::default(),
        );

        let store = backend.chain_backend().get_store();
        let (found, index) = backend
            .get_transaction(backend.pool(), &*store, tx.hash)
            .unwrap()
            .unwrap();
        assert_eq!(found, tx);
        let index = index.unwrap();
        assert_eq!(index.block_hash, block.hash());

        let missing = Hash::digest(b"missing tx");
        assert!(backend
            .get_transaction(backend.pool(), &*store, missing)
            .unwrap()
            .is_none());
    }

    #[test]
    fn committing_maintains_the_account_indices() {
        let backend = TestBackend::new();
        let tx = random_tx(0);
        backend.commit_block(
            random_address(),
            vec![tx.clone()],
            vec![receipt_for(&tx, vec![])],
            MemoryState::default(),
        );

        let raw = backend
            .account_index_db()
            .get(tx.data.from.as_bytes())
            .unwrap()
            .unwrap();
        let hashes: Vec<Hash> = serde_json::from_slice(&raw).unwrap();
        assert_eq!(hashes, vec![tx.hash]);

        let sender = backend
            .index_account_db()
            .get(tx.hash.as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(sender, tx.data.from.as_bytes());
    }
}
