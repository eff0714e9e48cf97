//! # Distributor Configuration
//!
//! Knobs for the application service. The Merkle algorithms themselves take
//! no configuration: leaf encoding and pairing rules are protocol constants.

use serde::{Deserialize, Serialize};

use crate::domain::PARALLEL_THRESHOLD;

/// Distributor service configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorConfig {
    /// Leaf count at which encoding, hashing and proving use rayon.
    pub parallel_threshold: usize,

    /// Reject entry lists whose indices are not exactly `0..n`.
    pub verify_index_sequence: bool,

    /// Verify every generated proof against the root before output.
    pub self_verify_proofs: bool,

    /// Log a warning for each account that appears more than once.
    pub warn_on_duplicate_accounts: bool,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
            verify_index_sequence: true,
            self_verify_proofs: true,
            warn_on_duplicate_accounts: true,
        }
    }
}

impl DistributorConfig {
    /// Create a config for testing (parallel paths always taken).
    pub fn for_testing() -> Self {
        Self {
            parallel_threshold: 2,
            ..Self::default()
        }
    }
}
