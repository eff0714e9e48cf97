//! # JSON File Adapters
//!
//! - `JsonFileSource`: reads `[{ "address": …, "amount": … }, …]`
//! - `JsonFileSink`: writes the pretty-printed claims document atomically
//!   (sibling temp file, flush, persist)

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::{MerkleDistribution, SinkError, SourceError, WhitelistRecord};
use crate::ports::{DistributionSink, WhitelistSource};

/// Whitelist loaded from a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Input location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a previously written claims document.
    pub fn load_distribution(&self) -> Result<MerkleDistribution, SourceError> {
        let content = self.read()?;
        serde_json::from_str(&content).map_err(|e| SourceError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn read(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl WhitelistSource for JsonFileSource {
    fn load(&self) -> Result<Vec<WhitelistRecord>, SourceError> {
        let content = self.read()?;
        let records: Vec<WhitelistRecord> =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        debug!(path = %self.path.display(), records = records.len(), "Whitelist loaded");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Claims document written to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DistributionSink for JsonFileSink {
    fn store(&self, distribution: &MerkleDistribution) -> Result<(), SinkError> {
        let json = serde_json::to_string_pretty(distribution)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;

        // Temp file lives beside the target so the rename stays on one
        // filesystem; it is removed on drop if anything below fails.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), bytes = json.len(), "Claims document written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
