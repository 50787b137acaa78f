//! Infrastructure adapters for Agentsmith.
//!
//! This crate implements the ports defined in
//! `agentsmith_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
