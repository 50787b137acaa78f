//! Agentsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Agentsmith
//! agent-scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Host wrapper (out of scope)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Scanner, DocumentMerger, Generate)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   agentsmith-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSignals, GeneratorConfig,      │
//! │   ArtifactSpec catalog, rendering)      │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! Data flows strictly scanner → resolver → catalog selection → renderer →
//! filesystem writer; no stage depends on one downstream of it. For a fixed
//! [`GeneratorConfig`](domain::GeneratorConfig) the selected artifact set and
//! rendered content are a pure function of that config.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentsmith_core::{
//!     application::GenerateService,
//!     domain::Overrides,
//! };
//!
//! // filesystem: Box<dyn Filesystem> from agentsmith-adapters
//! # fn demo(filesystem: Box<dyn agentsmith_core::application::Filesystem>) {
//! let service = GenerateService::new(filesystem);
//! let report = service
//!     .generate("/path/to/app".as_ref(), Overrides::default())
//!     .unwrap();
//! println!("wrote {} artifacts", report.written.len());
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentMerger, GenerateReport, GenerateService, MergeOutcome, Scanner, ports::Filesystem,
    };
    pub use crate::domain::{
        ArtifactId, ArtifactSpec, GeneratedArtifact, GeneratorConfig, Overrides, ProjectSignals,
        TestTool, select_artifacts,
    };
    pub use crate::error::{AgentsmithError, AgentsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
