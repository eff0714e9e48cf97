//! # Proof Generator
//!
//! Walks a finalized tree bottom-up and collects the sibling of the current
//! position at every layer below the root.
//!
//! A position with no sibling (the carried last element of an odd-length
//! layer) contributes nothing at that layer.

use rayon::prelude::*;
use shared_types::Hash;

use crate::domain::{Claim, MerkleError, MerkleTree, WhitelistEntry};

/// Generate the proof for the leaf at `index`.
///
/// # Errors
///
/// [`MerkleError::IndexOutOfRange`] if `index >= tree.leaf_count()`. The tree
/// itself and proofs for other indices are unaffected.
pub fn prove_index(tree: &MerkleTree, index: usize) -> Result<Vec<Hash>, MerkleError> {
    let leaf_count = tree.leaf_count();
    if index >= leaf_count {
        return Err(MerkleError::IndexOutOfRange { index, leaf_count });
    }
    Ok(collect_siblings(tree.layers(), index))
}

/// Generate proofs for every leaf, in leaf order.
///
/// Runs on the rayon pool once the tree has `parallel_threshold` leaves.
pub fn prove_all(tree: &MerkleTree, parallel_threshold: usize) -> Vec<Vec<Hash>> {
    let layers = tree.layers();
    let leaf_count = tree.leaf_count();
    if leaf_count >= parallel_threshold {
        (0..leaf_count)
            .into_par_iter()
            .map(|i| collect_siblings(layers, i))
            .collect()
    } else {
        (0..leaf_count).map(|i| collect_siblings(layers, i)).collect()
    }
}

/// Pair each entry with its proof, in entry order.
///
/// Extra items on either side are dropped; callers pass `prove_all` output
/// for the tree built from exactly these entries.
pub fn build_claims(entries: &[WhitelistEntry], proofs: Vec<Vec<Hash>>) -> Vec<Claim> {
    entries
        .iter()
        .cloned()
        .zip(proofs)
        .map(|(entry, proof)| Claim { entry, proof })
        .collect()
}

fn collect_siblings(layers: &[Vec<Hash>], index: usize) -> Vec<Hash> {
    let below_root = layers.len().saturating_sub(1);
    let mut proof = Vec::with_capacity(below_root);
    let mut position = index;

    for layer in &layers[..below_root] {
        let sibling = if position % 2 == 0 {
            position + 1
        } else {
            position - 1
        };
        if let Some(hash) = layer.get(sibling) {
            proof.push(*hash);
        }
        position /= 2;
    }

    proof
}
