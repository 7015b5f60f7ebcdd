use parking_lot::RwLock;
use seele_interfaces::P2p;
use seele_types::PeerInfo;

/// A p2p stub over a fixed, mutable peer list.
#[derive(Default)]
pub struct TestP2p {
    peers: RwLock<Vec<PeerInfo>>,
}

impl TestP2p {
    pub fn add_peer(&self, peer: PeerInfo) {
        self.peers.write().push(peer);
    }
}

impl P2p for TestP2p {
    fn peer_count(&self) -> usize {
        self.peers.read().len()
    }

    fn peers(&self) -> Vec<PeerInfo> {
        self.peers.read().clone()
    }
}
