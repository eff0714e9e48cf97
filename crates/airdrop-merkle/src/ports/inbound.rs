//! # Inbound Ports
//!
//! API trait defining what the distributor can do.

use shared_types::Hash;

use crate::domain::{Commitment, DistributorError, MerkleDistribution, MerkleTree, WhitelistEntry};

/// Merkle Distributor API - inbound port.
pub trait DistributorApi {
    /// Commit to a list of entries: encode leaves, build the tree, prove
    /// every entry.
    fn commit(&self, entries: &[WhitelistEntry]) -> Result<Commitment, DistributorError>;

    /// Proof for a single leaf of an existing tree.
    fn prove(&self, tree: &MerkleTree, index: usize) -> Result<Vec<Hash>, DistributorError>;

    /// Full run: load the whitelist, commit, and store the claims document.
    fn generate(&self) -> Result<MerkleDistribution, DistributorError>;
}
