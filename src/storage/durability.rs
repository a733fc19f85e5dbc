use serde::Deserialize;
use serde::Serialize;

/// How hard a committed write is pushed to disk before the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// Never force a sync. A crash may lose recent writes.
    Low,
    /// Background sync every `flush_interval_ms`.
    #[default]
    Medium,
    /// Sync before every mutating call returns.
    High,
}

impl Durability {
    /// Value handed to `sled::Config::flush_every_ms`
    pub(crate) fn flush_every_ms(
        self,
        flush_interval_ms: u64,
    ) -> Option<u64> {
        match self {
            Durability::Medium => Some(flush_interval_ms),
            Durability::Low | Durability::High => None,
        }
    }

    pub(crate) fn sync_on_commit(self) -> bool {
        matches!(self, Durability::High)
    }
}
