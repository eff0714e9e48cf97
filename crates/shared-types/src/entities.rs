//! # Core Primitive Entities
//!
//! Fixed-width values used by the Merkle distributor.

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Width of a [`Hash`] in bytes.
pub const HASH_LEN: usize = 32;

/// Width of an [`Address`] in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Width of a big-endian encoded `uint256` in bytes.
pub const UINT256_LEN: usize = 32;

/// Encode a `U256` as a 32-byte big-endian word.
pub fn u256_to_be_bytes(value: &U256) -> [u8; UINT256_LEN] {
    let mut out = [0u8; UINT256_LEN];
    value.to_big_endian(&mut out);
    out
}
