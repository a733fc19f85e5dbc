use tracing::warn;

use crate::ConvertError;
use crate::Result;

/// Width of a decimal-encoded u64; `u64::MAX` has 20 digits.
pub const DECIMAL_WIDTH: usize = 20;

/// Converts a `u64` to an 8-byte array in big-endian byte order.
///
/// # Examples
/// ```
/// use raft_sled_store::convert::safe_kv;
///
/// let bytes = safe_kv(0x1234_5678_9ABC_DEF0);
/// assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);
/// ```
pub const fn safe_kv(num: u64) -> [u8; 8] {
    num.to_be_bytes()
}

pub fn safe_vk<K: AsRef<[u8]>>(bytes: K) -> Result<u64> {
    let bytes = bytes.as_ref();
    let array: [u8; 8] = bytes.try_into().map_err(|_| ConvertError::InvalidLength {
        expected: 8,
        actual: bytes.len(),
    })?;
    Ok(u64::from_be_bytes(array))
}

/// Converts a `u64` to its 20 digit, zero padded decimal form.
///
/// # Examples
/// ```
/// use raft_sled_store::convert::padded_decimal;
///
/// assert_eq!(padded_decimal(42), b"00000000000000000042".to_vec());
/// ```
pub fn padded_decimal(num: u64) -> Vec<u8> {
    format!("{num:0width$}", width = DECIMAL_WIDTH).into_bytes()
}

pub fn parse_padded_decimal<K: AsRef<[u8]>>(bytes: K) -> Result<u64> {
    let bytes = bytes.as_ref();
    if bytes.len() != DECIMAL_WIDTH {
        return Err(ConvertError::InvalidLength {
            expected: DECIMAL_WIDTH,
            actual: bytes.len(),
        }
        .into());
    }
    // from_str_radix accepts a leading '+', which is not a valid key digit
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ConvertError::ConversionFailure(format!(
            "non-digit byte in decimal key: {:?}",
            String::from_utf8_lossy(bytes)
        ))
        .into());
    }
    parse_u64(bytes)
}

/// Textual form used for integer values in the stable store.
pub fn u64_to_text(num: u64) -> Vec<u8> {
    num.to_string().into_bytes()
}

pub fn parse_u64<K: AsRef<[u8]>>(bytes: K) -> Result<u64> {
    let text = std::str::from_utf8(bytes.as_ref()).map_err(|e| {
        warn!("integer value is not valid utf-8: {:?}", e);
        ConvertError::ConversionFailure(e.to_string())
    })?;
    text.parse::<u64>()
        .map_err(|e| ConvertError::ConversionFailure(format!("{text:?}: {e}")).into())
}
