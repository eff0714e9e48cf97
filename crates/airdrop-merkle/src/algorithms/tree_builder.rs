//! # Tree Builder
//!
//! Bottom-up construction of a sorted-pair Keccak-256 Merkle tree.
//!
//! ## Algorithm
//!
//! 1. Layer 0 = leaves
//! 2. Pair consecutive elements: parent = keccak256(min(a, b) ‖ max(a, b))
//! 3. An unpaired last element is carried up unchanged (no duplication,
//!    no self-hash)
//! 4. Repeat until one element remains; that element is the root
//!
//! Both rules are fixed by the on-chain verifier, which also sorts before
//! hashing and never sees a sibling for a carried element.

use rayon::prelude::*;
use sha3::{Digest, Keccak256};
use shared_types::Hash;
use tracing::debug;

use crate::domain::{MerkleError, MerkleTree, PARALLEL_THRESHOLD};

/// Keccak-256 over raw bytes.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash two nodes in ascending byte order.
///
/// Commutative: `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Keccak256::new()
        .chain_update(lo)
        .chain_update(hi)
        .finalize()
        .into()
}

/// Build a tree, hashing layers in parallel once they reach
/// [`PARALLEL_THRESHOLD`] elements.
pub fn build_tree(leaves: Vec<Hash>) -> Result<MerkleTree, MerkleError> {
    build_tree_with_threshold(leaves, PARALLEL_THRESHOLD)
}

/// Build a tree with an explicit parallelism threshold.
///
/// Layers are built sequentially; within a layer, pairs are independent and
/// are hashed on the rayon pool when the layer has at least
/// `parallel_threshold` elements.
///
/// # Errors
///
/// [`MerkleError::EmptyTree`] if `leaves` is empty.
pub fn build_tree_with_threshold(
    leaves: Vec<Hash>,
    parallel_threshold: usize,
) -> Result<MerkleTree, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyTree);
    }

    let leaf_count = leaves.len();
    let mut layers = vec![leaves];

    while let Some(current) = layers.last().filter(|layer| layer.len() > 1) {
        let next = next_layer(current, current.len() >= parallel_threshold);
        layers.push(next);
    }

    // The loop only stops on a single-element layer.
    let root = layers
        .last()
        .and_then(|layer| layer.first())
        .copied()
        .ok_or(MerkleError::EmptyTree)?;

    debug!(leaf_count, depth = layers.len() - 1, "Merkle layers built");

    Ok(MerkleTree::from_layers(layers, root))
}

fn next_layer(layer: &[Hash], parallel: bool) -> Vec<Hash> {
    if parallel {
        layer.par_chunks(2).map(parent).collect()
    } else {
        layer.chunks(2).map(parent).collect()
    }
}

fn parent(chunk: &[Hash]) -> Hash {
    match chunk {
        [left, right] => hash_pair(left, right),
        [carried] => *carried,
        _ => unreachable!("chunks(2) yields one or two elements"),
    }
}
