//! # Airdrop Merkle
//!
//! Merkle commitment over a whitelist of `(index, account, amount)` entries,
//! with one membership proof per entry for on-chain claim verification.
//!
//! ## Protocol
//!
//! | Step | Rule |
//! |------|------|
//! | Leaf | `keccak256(uint256(index) ‖ address ‖ uint256(amount))`, packed, 84 bytes |
//! | Parent | `keccak256(min(a, b) ‖ max(a, b))`, sorted by bytes |
//! | Odd layer | last element carried up unchanged |
//! | Proof | siblings bottom-up; none recorded where an element was carried |
//! | Verify | `fold(leaf, proof, hash_pair) == root` |
//!
//! These match the OpenZeppelin `MerkleProof.verify` convention. Changing any
//! of them yields a root that deployed verifiers reject without error.
//!
//! ## Module Structure
//!
//! ```text
//! airdrop-merkle/
//! ├── domain/          # WhitelistEntry, MerkleTree, Claim, claims document, errors
//! ├── algorithms/      # leaf_encoder, tree_builder, proof_generator, verifier
//! ├── ports/           # DistributorApi (inbound), WhitelistSource / DistributionSink (outbound)
//! ├── adapters/        # JSON file and in-memory port implementations
//! ├── application/     # DistributorService
//! └── config.rs        # DistributorConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemorySink, InMemorySource, JsonFileSink, JsonFileSource};
pub use algorithms::{
    build_claims, build_tree, build_tree_with_threshold, encode_entry, encode_leaf, encode_leaf_raw,
    encode_leaves, hash_pair, keccak256, packed_leaf_preimage, process_proof, prove_all,
    prove_index, verify_claim, verify_proof,
};
pub use application::DistributorService;
pub use config::DistributorConfig;
pub use domain::{
    parse_account, parse_amount, AmountValue, Claim, ClaimRecord, Commitment, DistributorError,
    LeafField, MerkleDistribution, MerkleError, MerkleTree, SinkError, SourceError, WhitelistEntry,
    WhitelistRecord, PACKED_LEAF_LEN, PARALLEL_THRESHOLD,
};
pub use ports::{DistributionSink, DistributorApi, WhitelistSource};
pub use shared_types::{Address, Hash, U256};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
