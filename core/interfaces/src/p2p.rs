use seele_types::PeerInfo;

/// Peer/network status as exposed by the p2p server.
pub trait P2p: Send + Sync {
    fn peer_count(&self) -> usize;

    /// Diagnostic snapshot of every connected peer.
    fn peers(&self) -> Vec<PeerInfo>;
}
