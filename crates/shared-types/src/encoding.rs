//! # Hex Encoding
//!
//! `0x`-prefixed hex rendering and parsing for hashes and addresses.

use crate::entities::{Address, Hash, ADDRESS_LEN, HASH_LEN};
use crate::errors::HexError;

/// Render bytes as a `0x`-prefixed lowercase hex string.
pub fn to_hex_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Strip an optional `0x`/`0X` prefix and surrounding whitespace.
pub fn strip_hex_prefix(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

/// Decode a hex string of any length, with or without `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(strip_hex_prefix(s)).map_err(|e| HexError::InvalidEncoding(e.to_string()))
}

/// Decode a hex string into exactly `N` bytes.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let bytes = decode_hex(s)?;
    if bytes.len() != N {
        return Err(HexError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Parse a 32-byte hash.
pub fn parse_hash(s: &str) -> Result<Hash, HexError> {
    decode_fixed::<HASH_LEN>(s)
}

/// Parse a 20-byte address.
///
/// Checksum casing is accepted but not validated.
pub fn parse_address(s: &str) -> Result<Address, HexError> {
    decode_fixed::<ADDRESS_LEN>(s)
}
