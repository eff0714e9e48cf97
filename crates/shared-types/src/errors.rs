//! # Error Types
//!
//! Errors raised when parsing shared primitives from text.

use thiserror::Error;

/// Errors that can occur while decoding hex-encoded primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Decoded value has the wrong number of bytes.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected width in bytes.
        expected: usize,
        /// Actual width in bytes (rounded down for odd digit counts).
        actual: usize,
    },

    /// Input contains non-hex characters or an odd digit count.
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(String),
}
