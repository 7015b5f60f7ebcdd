use num_bigint::BigUint;
use seele_types::Address;

/// A read-only view of the world state at one block. Snapshots are immutable;
/// accounts that do not exist read as zero balance and zero nonce.
pub trait StateDb: Send + Sync {
    fn balance(&self, account: &Address) -> BigUint;

    fn nonce(&self, account: &Address) -> u64;
}
