//! # Value Objects
//!
//! Protocol constants for leaf encoding and tree construction, and parsing
//! of the textual leaf fields.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{decode_hex, Address, ADDRESS_LEN, UINT256_LEN};

use super::errors::MerkleError;

/// Byte length of a packed leaf preimage: `uint256 ‖ address ‖ uint256`.
///
/// Each field contributes its natural width with no padding between fields.
/// A padded (ABI slot) encoding would be 96 bytes and hash differently.
pub const PACKED_LEAF_LEN: usize = UINT256_LEN + ADDRESS_LEN + UINT256_LEN;

/// Leaf count at which encoding, layer hashing and proof generation switch
/// to the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 1024;

/// A field of a whitelist entry, used to report encoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafField {
    /// Position of the entry, encoded as `uint256`.
    Index,
    /// 20-byte account address.
    Account,
    /// Claimable amount, encoded as `uint256`.
    Amount,
}

impl std::fmt::Display for LeafField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::Account => write!(f, "account"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// Parse a decimal `uint256` amount.
///
/// Rejects empty input, signs, non-digit characters and values ≥ 2^256.
pub fn parse_amount(s: &str) -> Result<U256, MerkleError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(MerkleError::encoding_range(LeafField::Amount, "empty amount"));
    }
    if trimmed.starts_with('-') {
        return Err(MerkleError::encoding_range(
            LeafField::Amount,
            format!("negative amount {}", trimmed),
        ));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MerkleError::encoding_range(
            LeafField::Amount,
            format!("not a decimal integer: {}", trimmed),
        ));
    }
    U256::from_dec_str(trimmed).map_err(|_| {
        MerkleError::encoding_range(LeafField::Amount, format!("{} exceeds 256 bits", trimmed))
    })
}

/// Parse a 20-byte account from hex, with or without `0x` prefix.
pub fn parse_account(s: &str) -> Result<Address, MerkleError> {
    let bytes = decode_hex(s).map_err(|e| MerkleError::encoding_range(LeafField::Account, e.to_string()))?;
    if bytes.len() != ADDRESS_LEN {
        return Err(MerkleError::encoding_range(
            LeafField::Account,
            format!("expected {} bytes, got {}", ADDRESS_LEN, bytes.len()),
        ));
    }
    let mut account = [0u8; ADDRESS_LEN];
    account.copy_from_slice(&bytes);
    Ok(account)
}
