//! # Leaf Encoder
//!
//! `leaf = keccak256(uint256(index) ‖ address ‖ uint256(amount))`
//!
//! The preimage uses packed encoding (Solidity `abi.encodePacked`): 32 + 20 +
//! 32 = 84 bytes. The padded `abi.encode` form puts the address in a 32-byte
//! slot and yields a different leaf, which verifiers reject.

use primitive_types::U256;
use rayon::prelude::*;
use shared_types::{u256_to_be_bytes, Address, Hash, ADDRESS_LEN, UINT256_LEN};

use super::tree_builder::keccak256;
use crate::domain::{LeafField, MerkleError, WhitelistEntry, PACKED_LEAF_LEN};

/// Build the 84-byte packed preimage of a leaf.
pub fn packed_leaf_preimage(index: u64, account: &Address, amount: &U256) -> [u8; PACKED_LEAF_LEN] {
    let mut out = [0u8; PACKED_LEAF_LEN];
    out[..UINT256_LEN].copy_from_slice(&u256_to_be_bytes(&U256::from(index)));
    out[UINT256_LEN..UINT256_LEN + ADDRESS_LEN].copy_from_slice(account);
    out[UINT256_LEN + ADDRESS_LEN..].copy_from_slice(&u256_to_be_bytes(amount));
    out
}

/// Encode one leaf from typed fields.
pub fn encode_leaf(index: u64, account: &Address, amount: &U256) -> Hash {
    keccak256(&packed_leaf_preimage(index, account, amount))
}

/// Encode one whitelist entry.
pub fn encode_entry(entry: &WhitelistEntry) -> Hash {
    encode_leaf(entry.index, &entry.account, &entry.amount)
}

/// Encode one leaf from big-endian byte strings.
///
/// `index_be` and `amount_be` may be any length; leading zero bytes are
/// dropped, and anything that still exceeds 32 bytes is an
/// [`MerkleError::EncodingRange`]. `account` must be exactly 20 bytes.
pub fn encode_leaf_raw(index_be: &[u8], account: &[u8], amount_be: &[u8]) -> Result<Hash, MerkleError> {
    let index = fit_uint256(LeafField::Index, index_be)?;
    let amount = fit_uint256(LeafField::Amount, amount_be)?;
    if account.len() != ADDRESS_LEN {
        return Err(MerkleError::encoding_range(
            LeafField::Account,
            format!("expected {} bytes, got {}", ADDRESS_LEN, account.len()),
        ));
    }

    let mut preimage = [0u8; PACKED_LEAF_LEN];
    preimage[..UINT256_LEN].copy_from_slice(&index);
    preimage[UINT256_LEN..UINT256_LEN + ADDRESS_LEN].copy_from_slice(account);
    preimage[UINT256_LEN + ADDRESS_LEN..].copy_from_slice(&amount);
    Ok(keccak256(&preimage))
}

/// Encode every entry, preserving entry order.
///
/// Runs on the rayon pool once `entries.len() >= parallel_threshold`.
pub fn encode_leaves(entries: &[WhitelistEntry], parallel_threshold: usize) -> Vec<Hash> {
    if entries.len() >= parallel_threshold {
        entries.par_iter().map(encode_entry).collect()
    } else {
        entries.iter().map(encode_entry).collect()
    }
}

/// Left-pad a big-endian integer to 32 bytes, refusing to truncate.
fn fit_uint256(field: LeafField, be: &[u8]) -> Result<[u8; UINT256_LEN], MerkleError> {
    let first_nonzero = be.iter().position(|b| *b != 0).unwrap_or(be.len());
    let significant = &be[first_nonzero..];
    if significant.len() > UINT256_LEN {
        return Err(MerkleError::encoding_range(
            field,
            format!("{} significant bytes exceed 256 bits", significant.len()),
        ));
    }
    let mut out = [0u8; UINT256_LEN];
    out[UINT256_LEN - significant.len()..].copy_from_slice(significant);
    Ok(out)
}
