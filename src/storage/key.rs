//! Key layout inside the data tree.
//!
//! sled compares keys as raw bytes, so the index suffix of a log key must be
//! fixed-width and most-significant-first for range scans to come back in
//! index order.

use serde::Deserialize;
use serde::Serialize;

use crate::convert::padded_decimal;
use crate::convert::parse_padded_decimal;
use crate::convert::safe_kv;
use crate::convert::safe_vk;
use crate::ConvertError;
use crate::Error;
use crate::Result;

/// How a log index is turned into a key suffix.
///
/// Part of the on-disk format: it is recorded when a database is created and
/// cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyEncoding {
    /// 20 zero-padded ASCII digits, human readable
    Decimal,
    /// 8 bytes, big-endian
    #[default]
    BigEndian,
}

impl KeyEncoding {
    pub fn encode(
        self,
        index: u64,
    ) -> Vec<u8> {
        match self {
            KeyEncoding::Decimal => padded_decimal(index),
            KeyEncoding::BigEndian => safe_kv(index).to_vec(),
        }
    }

    pub fn decode(
        self,
        suffix: &[u8],
    ) -> Result<u64> {
        match self {
            KeyEncoding::Decimal => parse_padded_decimal(suffix),
            KeyEncoding::BigEndian => safe_vk(suffix),
        }
    }

    /// Marker byte persisted in the default tree
    pub(crate) fn marker(self) -> u8 {
        match self {
            KeyEncoding::Decimal => 0,
            KeyEncoding::BigEndian => 1,
        }
    }

    pub(crate) fn from_marker(marker: &[u8]) -> Result<Self> {
        match marker {
            [0] => Ok(KeyEncoding::Decimal),
            [1] => Ok(KeyEncoding::BigEndian),
            other => Err(ConvertError::ConversionFailure(format!(
                "unknown key encoding marker: {other:?}"
            ))
            .into()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyEncoding::Decimal => "decimal",
            KeyEncoding::BigEndian => "big_endian",
        }
    }
}

/// The two disjoint key namespaces of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    log_prefix: Vec<u8>,
    meta_prefix: Vec<u8>,
    encoding: KeyEncoding,
}

impl KeySpace {
    /// Fails when a prefix is empty or one prefix starts with the other,
    /// since a scan over one namespace would then see keys of the other.
    pub fn new(
        log_prefix: impl Into<Vec<u8>>,
        meta_prefix: impl Into<Vec<u8>>,
        encoding: KeyEncoding,
    ) -> Result<Self> {
        let log_prefix = log_prefix.into();
        let meta_prefix = meta_prefix.into();

        if log_prefix.is_empty() || meta_prefix.is_empty() {
            return Err(Error::InvalidConfig("key prefixes cannot be empty".to_string()));
        }
        if log_prefix.starts_with(&meta_prefix) || meta_prefix.starts_with(&log_prefix) {
            return Err(Error::InvalidConfig(format!(
                "log prefix {:?} and meta prefix {:?} overlap",
                String::from_utf8_lossy(&log_prefix),
                String::from_utf8_lossy(&meta_prefix)
            )));
        }

        Ok(Self {
            log_prefix,
            meta_prefix,
            encoding,
        })
    }

    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    pub fn log_prefix(&self) -> &[u8] {
        &self.log_prefix
    }

    pub fn meta_prefix(&self) -> &[u8] {
        &self.meta_prefix
    }

    pub fn log_key(
        &self,
        index: u64,
    ) -> Vec<u8> {
        let mut key = self.log_prefix.clone();
        key.extend_from_slice(&self.encoding.encode(index));
        key
    }

    pub fn meta_key(
        &self,
        key: &[u8],
    ) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.meta_prefix.len() + key.len());
        full.extend_from_slice(&self.meta_prefix);
        full.extend_from_slice(key);
        full
    }

    pub fn index_from_log_key(
        &self,
        key: &[u8],
    ) -> Result<u64> {
        match key.strip_prefix(self.log_prefix.as_slice()) {
            Some(suffix) => self.encoding.decode(suffix),
            None => Err(ConvertError::ConversionFailure(format!(
                "key {:?} is outside the log namespace",
                String::from_utf8_lossy(key)
            ))
            .into()),
        }
    }
}
