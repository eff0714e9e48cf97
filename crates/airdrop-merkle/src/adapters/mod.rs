//! # Adapters
//!
//! Port implementations: JSON files for the CLI, in-memory for tests and
//! embedding.

pub mod json_file;
pub mod memory;

pub use json_file::{JsonFileSink, JsonFileSource};
pub use memory::{InMemorySink, InMemorySource};
