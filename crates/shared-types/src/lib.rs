//! # Shared Types Crate
//!
//! Primitive types shared across the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Hash`, `Address` and `U256` are defined once
//!   here and re-used by every crate.
//! - **Wire Rendering**: hashes render as `0x` + 64 lowercase hex characters,
//!   the format consumed by on-chain verifiers.

pub mod encoding;
pub mod entities;
pub mod errors;

pub use encoding::*;
pub use entities::*;
pub use errors::*;
