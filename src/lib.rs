//! Durable Raft log storage on the sled embedded database.
//!
//! [`SledStore`] implements both capability sets a Raft library asks of its
//! storage: [`LogStore`] (ordered, index-addressed log entries) and
//! [`StableStore`] (small durable key/value state such as term, vote and
//! peers).
//!
//! ```no_run
//! use raft_sled_store::{Durability, LogEntry, LogStore, SledStore, StableStore};
//!
//! # fn main() -> raft_sled_store::Result<()> {
//! let store = SledStore::open("/tmp/raft-store", Durability::High)?;
//! store.store_log(&LogEntry::command(1, 1, &b"log1"[..]))?;
//! store.set_u64(b"CurrentTerm", 1)?;
//! assert_eq!(store.last_index()?, 1);
//! store.close()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod errors;
mod storage;
pub mod utils;

pub use self::config::*;
pub use constants::ENTRY_HEADER_LEN;
pub use constants::PEERS_KEY;
pub use errors::*;
pub use storage::*;
pub use utils::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
//-----------------------------------------------------------
// Autometrics
/// autometrics: https://docs.autometrics.dev/rust/adding-alerts-and-slos
use autometrics::objectives::Objective;
use autometrics::objectives::ObjectiveLatency;
use autometrics::objectives::ObjectivePercentile;
const API_SLO: Objective = Objective::new("api")
    .success_rate(ObjectivePercentile::P99_9)
    .latency(ObjectiveLatency::Ms10, ObjectivePercentile::P99);
