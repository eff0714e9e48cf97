//! # Proof Verification
//!
//! The verifier half of the sorted-pair contract:
//!
//! ```text
//! acc = leaf
//! for sibling in proof: acc = keccak256(sort(acc, sibling))
//! accept iff acc == root
//! ```

use shared_types::Hash;

use super::leaf_encoder::encode_entry;
use super::tree_builder::hash_pair;
use crate::domain::Claim;

/// Fold a proof into the root it implies.
pub fn process_proof(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |acc, sibling| hash_pair(&acc, sibling))
}

/// Check that `proof` reconstructs `root` from `leaf`.
pub fn verify_proof(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    process_proof(leaf, proof) == *root
}

/// Re-encode a claim's entry and verify its proof against `root`.
pub fn verify_claim(claim: &Claim, root: &Hash) -> bool {
    verify_proof(&encode_entry(&claim.entry), &claim.proof, root)
}
