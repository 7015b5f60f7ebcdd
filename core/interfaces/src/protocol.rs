use seele_types::{ProtocolError, ShardNumber, Transaction};

/// Capability of the peer protocol layer needed by the API services.
pub trait Protocol: Send + Sync {
    /// Relays a transaction toward the peer set of another shard. This is a
    /// best-effort, fire-and-forget dispatch; failures are not surfaced to
    /// the caller.
    fn send_different_shard_tx(&self, tx: Transaction, shard: ShardNumber);

    /// The protocol version currently spoken with peers. Fails while the
    /// protocol layer is not yet initialized; callers may retry.
    fn protocol_version(&self) -> Result<u32, ProtocolError>;
}
