//! Core model in Raft: LogStore Definition

use super::LogEntry;
use crate::Result;

/// Ordered, index-addressed access to the replicated log.
///
/// Implementations must keep entries sorted by index and make
/// [`LogStore::store_logs`] all-or-nothing.
pub trait LogStore: Send + Sync + 'static {
    /// Smallest stored index, or 0 when the log is empty
    fn first_index(&self) -> Result<u64>;

    /// Largest stored index, or 0 when the log is empty
    fn last_index(&self) -> Result<u64>;

    /// Returns [`crate::Error::LogNotFound`] when `index` is absent.
    fn get_log(
        &self,
        index: u64,
    ) -> Result<LogEntry>;

    fn store_log(
        &self,
        entry: &LogEntry,
    ) -> Result<()> {
        self.store_logs(std::slice::from_ref(entry))
    }

    /// Persists every entry in one atomic write.
    fn store_logs(
        &self,
        entries: &[LogEntry],
    ) -> Result<()>;

    /// Removes entries in `[min, max]`. Missing indices are not an error.
    fn delete_range(
        &self,
        min: u64,
        max: u64,
    ) -> Result<()>;
}
