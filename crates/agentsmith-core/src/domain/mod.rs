//! Core domain layer for Agentsmith.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde derives
//! - **Immutable values**: Signals and configuration never mutate after
//!   construction
//!
//! The pipeline over these types is: scanned [`ProjectSignals`] + caller
//! [`Overrides`] resolve into one [`GeneratorConfig`]; the static [`CATALOG`]
//! is filtered by [`select_artifacts`]; each selected [`ArtifactSpec`] is
//! bound by [`render`] into a [`GeneratedArtifact`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod signals;
pub mod templates;

// Re-exports for convenience
pub use catalog::{AGENTS_DIR, ArtifactId, ArtifactSpec, CATALOG, select_artifacts};
pub use config::{GeneratorConfig, Overrides};
pub use error::{DomainError, ErrorCategory};
pub use render::{GeneratedArtifact, RenderContext, render, render_text};
pub use signals::{ProjectSignals, TestTool};
