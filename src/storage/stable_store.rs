//! Core model in Raft: StableStore Definition, persistent state: e.g. current_term
//!
use crate::convert::parse_u64;
use crate::convert::u64_to_text;
use crate::Error;
use crate::Result;
use crate::PEERS_KEY;

pub trait StableStore: Send + Sync + 'static {
    fn set(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()>;

    /// Returns [`Error::KeyNotFound`] when `key` was never set.
    fn get(
        &self,
        key: &[u8],
    ) -> Result<Vec<u8>>;

    /// Stores `value` as decimal text
    fn set_u64(
        &self,
        key: &[u8],
        value: u64,
    ) -> Result<()> {
        self.set(key, &u64_to_text(value))
    }

    fn get_u64(
        &self,
        key: &[u8],
    ) -> Result<u64> {
        parse_u64(self.get(key)?)
    }

    /// Peer identifiers, empty when never set
    fn peers(&self) -> Result<Vec<String>> {
        match self.get(PEERS_KEY) {
            Ok(raw) => Ok(serde_json::from_slice(&raw)?),
            Err(Error::KeyNotFound) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn set_peers(
        &self,
        peers: &[String],
    ) -> Result<()> {
        let raw = serde_json::to_vec(peers)?;
        self.set(PEERS_KEY, &raw)
    }
}
