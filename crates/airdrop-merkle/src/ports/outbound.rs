//! # Outbound Ports
//!
//! Traits for the collaborators that supply whitelist records and receive
//! the claims document.

use crate::domain::{MerkleDistribution, SinkError, SourceError, WhitelistRecord};

/// Whitelist source - outbound port.
///
/// Record order is authoritative: position `i` becomes entry index `i`.
pub trait WhitelistSource {
    /// Load every record, in order.
    fn load(&self) -> Result<Vec<WhitelistRecord>, SourceError>;

    /// Human-readable location, for logging.
    fn describe(&self) -> String;
}

/// Distribution sink - outbound port.
pub trait DistributionSink {
    /// Persist the claims document. Must not leave a partial document behind.
    fn store(&self, distribution: &MerkleDistribution) -> Result<(), SinkError>;

    /// Human-readable location, for logging.
    fn describe(&self) -> String;
}
