//! Scanned project signals and the test-tool value object.
//!
//! # Design
//!
//! [`ProjectSignals`] is a plain record of facts inferred from a project's
//! directory layout. It is produced only by the application-layer scanner and
//! is immutable once computed; everything downstream reads it through the
//! configuration resolver.
//!
//! [`TestTool`] is a closed enum. The supported set of test frameworks is
//! fixed at design time, so branching on it is an exhaustive `match` rather
//! than dynamic dispatch.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TestTool ─────────────────────────────────────────────────────────────────

/// The test framework detected in the scanned project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestTool {
    RSpec,
    Minitest,
}

impl TestTool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RSpec => "RSpec",
            Self::Minitest => "Minitest",
        }
    }

    /// The shell command that runs the full suite for this framework.
    pub const fn command(&self) -> &'static str {
        match self {
            Self::RSpec => "bundle exec rspec",
            Self::Minitest => "bin/rails test",
        }
    }
}

impl Default for TestTool {
    /// Rails ships Minitest, so it is the fixed fallback when no explicit
    /// framework dependency is declared.
    fn default() -> Self {
        Self::Minitest
    }
}

impl fmt::Display for TestTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rspec" => Ok(Self::RSpec),
            "minitest" => Ok(Self::Minitest),
            other => Err(DomainError::UnknownTestTool(other.to_string())),
        }
    }
}

// ── ProjectSignals ───────────────────────────────────────────────────────────

/// Facts inferred by scanning the project's directory layout.
///
/// Produced only by `application::Scanner`; never constructed from user
/// input. A missing marker on disk means the signal is simply absent
/// (`false` / default), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectSignals {
    /// The application is API-only (no server-rendered views).
    pub api_only: bool,
    /// A query-language API layer (GraphQL schema directory) is present.
    pub has_query_layer: bool,
    /// A component-based frontend toolchain (React/Vue/Svelte) is present.
    pub has_component_frontend: bool,
    /// Detected test framework, `Minitest` when nothing is declared.
    pub test_tool: TestTool,
}
