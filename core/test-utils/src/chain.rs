use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use num_bigint::BigUint;
use parking_lot::RwLock;
use seele_interfaces::{BlockIndex, BlockchainStore, Chain, StateDb};
use seele_types::{Address, Block, BlockHeader, Hash, Receipt, StoreError, Transaction};

/// Per-block difficulty used by every block the test chain commits.
pub const TEST_BLOCK_DIFFICULTY: u32 = 2;

/// An immutable in-memory state snapshot. Built once, then shared behind an
/// `Arc` like a real state view.
#[derive(Default)]
pub struct MemoryState {
    balances: HashMap<Address, BigUint>,
    nonces: HashMap<Address, u64>,
}

impl MemoryState {
    pub fn with_account(mut self, account: Address, balance: BigUint, nonce: u64) -> Self {
        self.balances.insert(account, balance);
        self.nonces.insert(account, nonce);
        self
    }
}

impl StateDb for MemoryState {
    fn balance(&self, account: &Address) -> BigUint {
        self.balances.get(account).cloned().unwrap_or_default()
    }

    fn nonce(&self, account: &Address) -> u64 {
        self.nonces.get(account).copied().unwrap_or_default()
    }
}

#[derive(Default)]
struct StoreInner {
    blocks: HashMap<Hash, Block>,
    height_index: HashMap<u64, Hash>,
    total_difficulties: HashMap<Hash, BigUint>,
    block_receipts: HashMap<Hash, Vec<Receipt>>,
    receipts_by_tx: HashMap<Hash, Receipt>,
    tx_index: HashMap<Hash, BlockIndex>,
    head: Option<Hash>,
}

/// An in-memory chain store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    /// Appends a block as the new head, indexing its transactions and
    /// receipts and accumulating total difficulty on top of the parent's.
    pub fn insert_block(&self, block: Block, receipts: Vec<Receipt>) {
        let hash = block.hash();
        let mut inner = self.inner.write();

        let parent_difficulty = inner
            .total_difficulties
            .get(&block.header.previous_block_hash)
            .cloned()
            .unwrap_or_default();
        inner
            .total_difficulties
            .insert(hash, parent_difficulty + &block.header.difficulty);

        for (position, tx) in block.transactions.iter().enumerate() {
            inner.tx_index.insert(
                tx.hash,
                BlockIndex {
                    block_hash: hash,
                    block_height: block.header.height,
                    index: position as u32,
                },
            );
        }
        for receipt in &receipts {
            inner.receipts_by_tx.insert(receipt.tx_hash, receipt.clone());
        }
        inner.block_receipts.insert(hash, receipts);
        inner.height_index.insert(block.header.height, hash);
        inner.blocks.insert(hash, block);
        inner.head = Some(hash);
    }
}

impl BlockchainStore for MemoryStore {
    fn get_head_block_hash(&self) -> Result<Hash, StoreError> {
        self.inner.read().head.ok_or(StoreError::NotFound)
    }

    fn get_block_by_hash(&self, hash: &Hash) -> Result<Block, StoreError> {
        self.inner
            .read()
            .blocks
            .get(hash)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_block_by_height(&self, height: u64) -> Result<Block, StoreError> {
        let inner = self.inner.read();
        let hash = inner.height_index.get(&height).ok_or(StoreError::NotFound)?;
        inner
            .blocks
            .get(hash)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_block_total_difficulty(&self, hash: &Hash) -> Result<BigUint, StoreError> {
        self.inner
            .read()
            .total_difficulties
            .get(hash)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_receipts_by_block_hash(&self, hash: &Hash) -> Result<Vec<Receipt>, StoreError> {
        self.inner
            .read()
            .block_receipts
            .get(hash)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_receipt_by_tx_hash(&self, tx_hash: &Hash) -> Result<Option<Receipt>, StoreError> {
        Ok(self.inner.read().receipts_by_tx.get(tx_hash).cloned())
    }

    fn get_tx_index(&self, tx_hash: &Hash) -> Result<Option<BlockIndex>, StoreError> {
        Ok(self.inner.read().tx_index.get(tx_hash).cloned())
    }
}

/// An in-memory canonical chain seeded with a genesis block.
pub struct TestChain {
    store: Arc<MemoryStore>,
    states: RwLock<HashMap<Hash, Arc<MemoryState>>>,
}

impl TestChain {
    pub fn new() -> Self {
        let chain = Self {
            store: Arc::new(MemoryStore::default()),
            states: RwLock::new(HashMap::new()),
        };
        let genesis = Block {
            header: BlockHeader {
                difficulty: BigUint::from(1u32),
                ..Default::default()
            },
            transactions: vec![],
        };
        chain
            .states
            .write()
            .insert(genesis.hash(), Arc::new(MemoryState::default()));
        chain.store.insert_block(genesis, vec![]);
        chain
    }

    pub fn memory_store(&self) -> Arc<MemoryStore> {
        self.store.clone()
    }

    /// Builds and commits a block on the current tip, registering the given
    /// post-state under the new block's hash.
    pub fn commit_block(
        &self,
        creator: Address,
        transactions: Vec<Transaction>,
        receipts: Vec<Receipt>,
        state: MemoryState,
    ) -> Block {
        let parent = self.current_header();
        let height = parent.height + 1;
        let header = BlockHeader {
            previous_block_hash: parent.hash(),
            creator,
            state_hash: Hash::digest(&height.to_be_bytes()),
            tx_hash: Block::tx_root(&transactions),
            difficulty: BigUint::from(TEST_BLOCK_DIFFICULTY),
            height,
            create_timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default(),
            nonce: 0,
            extra_data: vec![],
        };
        let block = Block {
            header,
            transactions,
        };
        self.states
            .write()
            .insert(block.hash(), Arc::new(state));
        self.store.insert_block(block.clone(), receipts);
        block
    }
}

impl Default for TestChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain for TestChain {
    fn current_header(&self) -> BlockHeader {
        let head = self
            .store
            .get_head_block_hash()
            .expect("test chain is seeded with a genesis block");
        self.store
            .get_block_by_hash(&head)
            .expect("head block is always stored")
            .header
    }

    fn get_current_state(&self) -> Result<Arc<dyn StateDb>, StoreError> {
        let head = self.store.get_head_block_hash()?;
        self.get_state(head)
    }

    fn get_state(&self, block_hash: Hash) -> Result<Arc<dyn StateDb>, StoreError> {
        self.states
            .read()
            .get(&block_hash)
            .cloned()
            .map(|state| state as Arc<dyn StateDb>)
            .ok_or(StoreError::NotFound)
    }

    fn get_store(&self) -> Arc<dyn BlockchainStore> {
        self.store.clone()
    }
}
