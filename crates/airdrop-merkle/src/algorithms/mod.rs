//! # Algorithms Module
//!
//! The Merkle core: leaf encoding, tree construction, proof generation and
//! proof verification. Every function here is pure.

pub mod leaf_encoder;
pub mod proof_generator;
pub mod tree_builder;
pub mod verifier;

pub use leaf_encoder::{
    encode_entry, encode_leaf, encode_leaf_raw, encode_leaves, packed_leaf_preimage,
};
pub use proof_generator::{build_claims, prove_all, prove_index};
pub use tree_builder::{build_tree, build_tree_with_threshold, hash_pair, keccak256};
pub use verifier::{process_proof, verify_claim, verify_proof};
