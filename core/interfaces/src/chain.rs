use std::sync::Arc;

use seele_types::{BlockHeader, Hash, StoreError};

use crate::state::StateDb;
use crate::store::BlockchainStore;

/// Capability of the canonical chain needed by the API services.
pub trait Chain: Send + Sync {
    /// Header of the canonical tip as currently known. Must reflect the
    /// latest committed block, never a stale cache.
    fn current_header(&self) -> BlockHeader;

    /// Read-only state at the canonical tip.
    fn get_current_state(&self) -> Result<Arc<dyn StateDb>, StoreError>;

    /// Read-only state at an arbitrary historical block. Unknown or pruned
    /// hashes fail with [`StoreError::NotFound`], never a zero-valued state.
    fn get_state(&self, block_hash: Hash) -> Result<Arc<dyn StateDb>, StoreError>;

    /// Handle to the persistent chain store, for handlers that need raw
    /// lookups beyond the backend's convenience methods.
    fn get_store(&self) -> Arc<dyn BlockchainStore>;
}
