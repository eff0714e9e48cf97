//! # Application Layer
//!
//! Service orchestrating load → commit → store.

pub mod service;

pub use service::DistributorService;
