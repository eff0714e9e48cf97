//! # In-Memory Adapters
//!
//! Port implementations that keep everything in memory.

use parking_lot::Mutex;

use crate::domain::{MerkleDistribution, SinkError, SourceError, WhitelistRecord};
use crate::ports::{DistributionSink, WhitelistSource};

/// Whitelist held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<WhitelistRecord>,
}

impl InMemorySource {
    /// Create a source over `records`.
    pub fn new(records: Vec<WhitelistRecord>) -> Self {
        Self { records }
    }
}

impl WhitelistSource for InMemorySource {
    fn load(&self) -> Result<Vec<WhitelistRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

/// Sink that keeps the last stored document.
#[derive(Debug, Default)]
pub struct InMemorySink {
    stored: Mutex<Option<MerkleDistribution>>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last stored document, if any.
    pub fn stored(&self) -> Option<MerkleDistribution> {
        self.stored.lock().clone()
    }
}

impl DistributionSink for InMemorySink {
    fn store(&self, distribution: &MerkleDistribution) -> Result<(), SinkError> {
        *self.stored.lock() = Some(distribution.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
