use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use seele_interfaces::Protocol;
use seele_types::{ProtocolError, ShardNumber, Transaction};

pub const TEST_PROTOCOL_VERSION: u32 = 1;

/// A protocol stub that records cross-shard relays instead of sending them.
pub struct TestProtocol {
    ready: AtomicBool,
    relayed: Mutex<Vec<(Transaction, ShardNumber)>>,
}

impl TestProtocol {
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(true),
            relayed: Mutex::new(Vec::new()),
        }
    }

    /// Toggles whether [`Protocol::protocol_version`] reports readiness.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Every cross-shard relay observed so far, in order.
    pub fn relayed(&self) -> Vec<(Transaction, ShardNumber)> {
        self.relayed.lock().clone()
    }
}

impl Default for TestProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl Protocol for TestProtocol {
    fn send_different_shard_tx(&self, tx: Transaction, shard: ShardNumber) {
        self.relayed.lock().push((tx, shard));
    }

    fn protocol_version(&self) -> Result<u32, ProtocolError> {
        if self.ready.load(Ordering::SeqCst) {
            Ok(TEST_PROTOCOL_VERSION)
        } else {
            Err(ProtocolError::NotReady)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::random_tx;

    #[test]
    fn relays_are_recorded_in_order() {
        let protocol = TestProtocol::new();
        let tx = random_tx(0);
        protocol.send_different_shard_tx(tx.clone(), 2);
        assert_eq!(protocol.relayed(), vec![(tx, 2)]);
    }

    #[test]
    fn version_reports_readiness() {
        let protocol = TestProtocol::new();
        assert_eq!(protocol.protocol_version(), Ok(TEST_PROTOCOL_VERSION));
        protocol.set_ready(false);
        assert_eq!(protocol.protocol_version(), Err(ProtocolError::NotReady));
    }
}
