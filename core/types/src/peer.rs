use serde::{Deserialize, Serialize};

use crate::account::ShardNumber;

/// Diagnostic snapshot of one connected peer, as reported by the network
/// layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfo {
    /// Hex-encoded node identifier.
    pub id: String,
    /// Protocol capabilities advertised during the handshake.
    pub caps: Vec<String>,
    pub local_address: String,
    pub remote_address: String,
    pub shard: ShardNumber,
}
