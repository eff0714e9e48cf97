//! # Domain Layer
//!
//! Pure domain types for the Merkle distributor.
//!
//! - `entities`: WhitelistEntry, MerkleTree, Claim, and the claims document
//! - `errors`: MerkleError and the port/service error wrappers
//! - `value_objects`: encoding widths, thresholds, field identifiers, amount
//!   and account parsing
//!
//! This module contains NO I/O dependencies. All external interactions
//! are abstracted through ports in the `ports` module.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
