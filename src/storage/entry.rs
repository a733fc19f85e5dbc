use std::fmt;

use bytes::Bytes;

/// One-byte tag describing what a log entry carries.
///
/// Any byte value is a valid tag: unknown values survive a store/load cycle
/// unchanged and it is up to the consensus engine to reject them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntryType(pub u8);

impl EntryType {
    pub const COMMAND: EntryType = EntryType(0);
    pub const NOOP: EntryType = EntryType(1);
    pub const ADD_PEER: EntryType = EntryType(2);
    pub const REMOVE_PEER: EntryType = EntryType(3);
    pub const BARRIER: EntryType = EntryType(4);
    pub const CONFIGURATION: EntryType = EntryType(5);

    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("command"),
            1 => Some("noop"),
            2 => Some("add_peer"),
            3 => Some("remove_peer"),
            4 => Some("barrier"),
            5 => Some("configuration"),
            _ => None,
        }
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<u8> for EntryType {
    fn from(tag: u8) -> Self {
        EntryType(tag)
    }
}

impl From<EntryType> for u8 {
    fn from(entry_type: EntryType) -> Self {
        entry_type.0
    }
}

impl fmt::Debug for EntryType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single record of the replicated log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEntry {
    /// Position in the log
    pub index: u64,
    /// Term in which the entry was appended
    pub term: u64,
    pub entry_type: EntryType,
    /// Opaque payload
    pub data: Bytes,
}

impl LogEntry {
    pub fn new(
        index: u64,
        term: u64,
        entry_type: EntryType,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            index,
            term,
            entry_type,
            data: data.into(),
        }
    }

    /// Shorthand for a command entry
    pub fn command(
        index: u64,
        term: u64,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(index, term, EntryType::COMMAND, data)
    }

    /// Length of the entry once encoded
    pub fn encoded_len(&self) -> usize {
        crate::ENTRY_HEADER_LEN + self.data.len()
    }
}
