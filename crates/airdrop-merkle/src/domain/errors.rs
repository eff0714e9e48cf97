//! # Domain Errors
//!
//! Error types for the Merkle distributor.
//!
//! - `MerkleError`: failures of the pure core (encoding, tree, proofs)
//! - `SourceError` / `SinkError`: failures of the outbound ports
//! - `DistributorError`: everything the application service can return

use std::path::PathBuf;

use thiserror::Error;

use super::value_objects::LeafField;

/// Errors raised by leaf encoding, tree construction and proof generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// A field cannot be represented in its fixed encoding width.
    ///
    /// Fatal to the whole build: a single mis-encoded leaf makes the
    /// root unusable as an on-chain commitment.
    #[error("Encoding range error in {field}: {reason}")]
    EncodingRange {
        /// Offending field.
        field: LeafField,
        /// Human-readable cause.
        reason: String,
    },

    /// No leaves were supplied, so no root is defined.
    #[error("Cannot build a Merkle tree from zero leaves")]
    EmptyTree,

    /// Proof requested for a leaf that does not exist.
    #[error("Leaf index {index} out of range (leaf count: {leaf_count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },

    /// Entry indices are not the contiguous sequence 0..n.
    #[error("Non-contiguous entry index: expected {expected}, found {found}")]
    NonContiguousIndex {
        /// Position in the entry list.
        expected: u64,
        /// Index carried by the entry.
        found: u64,
    },

    /// A freshly generated proof failed to reconstruct the root.
    #[error("Generated proof for index {index} does not verify against the root")]
    ProofSelfCheckFailed {
        /// Index of the failing claim.
        index: u64,
    },

    /// The `merkleRoot` of a document read back could not be decoded.
    #[error("Malformed merkleRoot: {reason}")]
    MalformedRoot {
        /// Human-readable cause.
        reason: String,
    },

    /// A claim record read back from a document could not be decoded.
    #[error("Malformed claim at index {index}: {reason}")]
    MalformedClaim {
        /// Index of the claim record.
        index: u64,
        /// Human-readable cause.
        reason: String,
    },
}

impl MerkleError {
    /// Shorthand for [`MerkleError::EncodingRange`].
    pub fn encoding_range(field: LeafField, reason: impl Into<String>) -> Self {
        Self::EncodingRange {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading whitelist records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Input location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input was read but is not a valid document.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Input location.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Errors raised while persisting the claims document.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The output could not be written.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Output location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors returned by the distributor service.
#[derive(Debug, Error)]
pub enum DistributorError {
    /// Core failure (encoding, tree, proof).
    #[error(transparent)]
    Merkle(#[from] MerkleError),

    /// Whitelist loading failure.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Output persistence failure.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
