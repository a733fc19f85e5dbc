//! Binary layout of a stored log entry.
//!
//! ```text
//! +-------------+-------------+--------+------------------+
//! | index (u64) | term (u64)  | type   | data             |
//! | 8 bytes LE  | 8 bytes LE  | 1 byte | remaining bytes  |
//! +-------------+-------------+--------+------------------+
//! ```

use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use super::EntryType;
use super::LogEntry;
use crate::Error;
use crate::Result;
use crate::ENTRY_HEADER_LEN;

pub fn encode_entry(entry: &LogEntry) -> Bytes {
    let mut buf = BytesMut::with_capacity(entry.encoded_len());
    buf.put_u64_le(entry.index);
    buf.put_u64_le(entry.term);
    buf.put_u8(entry.entry_type.into());
    buf.put_slice(&entry.data);
    buf.freeze()
}

/// Reverses [`encode_entry`]. The type tag is not validated.
pub fn decode_entry(buf: &[u8]) -> Result<LogEntry> {
    if buf.len() < ENTRY_HEADER_LEN {
        return Err(Error::InvalidBuffer { len: buf.len() });
    }

    let mut header = &buf[..ENTRY_HEADER_LEN];
    let index = header.get_u64_le();
    let term = header.get_u64_le();
    let entry_type = EntryType(header.get_u8());

    Ok(LogEntry {
        index,
        term,
        entry_type,
        data: Bytes::copy_from_slice(&buf[ENTRY_HEADER_LEN..]),
    })
}
