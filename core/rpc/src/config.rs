use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Address to bind to
    pub addr: String,
    /// Port to listen on
    pub port: u16,
    /// Also mount the private namespaces (network, debug) on this listener.
    /// Leave off unless the listener is local or otherwise trusted.
    pub expose_private: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1".to_owned(),
            port: 8037,
            expose_private: false,
        }
    }
}
