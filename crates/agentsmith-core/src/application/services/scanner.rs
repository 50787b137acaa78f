//! Signal scanner - project layout introspection.
//!
//! Inspects fixed paths and markers under the project root and returns the
//! [`ProjectSignals`] record. Read-only: the scanner never writes, and a
//! missing sub-path is an absent signal, never an error. Only a missing root
//! is fatal.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectSignals, TestTool},
    error::AgentsmithResult,
};

/// Marker line inside `config/application.rb` that declares API mode.
const API_ONLY_MARKER: &str = "config.api_only = true";

/// Component-based frontend toolchains recognised in `package.json`.
const COMPONENT_TOOLCHAINS: &[&str] = &["react", "vue", "svelte"];

/// Scans a project root for structural signals.
pub struct Scanner<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Scanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Scan `root` and compute all signals.
    ///
    /// Fails with [`ApplicationError::MissingRoot`] when `root` is not an
    /// existing directory; every other probe tolerates absence.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> AgentsmithResult<ProjectSignals> {
        if !self.filesystem.dir_exists(root) {
            return Err(ApplicationError::MissingRoot {
                path: root.to_path_buf(),
            }
            .into());
        }

        let signals = ProjectSignals {
            api_only: self.detect_api_only(root)?,
            has_query_layer: self.filesystem.dir_exists(&root.join("app/graphql")),
            has_component_frontend: self.detect_component_frontend(root)?,
            test_tool: self.detect_test_tool(root)?,
        };

        debug!(?signals, "project scanned");
        Ok(signals)
    }

    /// API mode: `config/application.rb` carries the api_only marker line.
    fn detect_api_only(&self, root: &Path) -> AgentsmithResult<bool> {
        Ok(self
            .read_if_present(&root.join("config/application.rb"))?
            .is_some_and(|content| content.contains(API_ONLY_MARKER)))
    }

    /// Component frontend: `package.json` names a known component toolchain.
    fn detect_component_frontend(&self, root: &Path) -> AgentsmithResult<bool> {
        Ok(self
            .read_if_present(&root.join("package.json"))?
            .is_some_and(|content| {
                COMPONENT_TOOLCHAINS
                    .iter()
                    .any(|toolchain| content.contains(&format!("\"{toolchain}\"")))
            }))
    }

    /// Test tool: an rspec declaration in the Gemfile wins, Minitest is the
    /// fixed default otherwise.
    fn detect_test_tool(&self, root: &Path) -> AgentsmithResult<TestTool> {
        let declares_rspec = self
            .read_if_present(&root.join("Gemfile"))?
            .is_some_and(|content| content.contains("rspec"));

        Ok(if declares_rspec {
            TestTool::RSpec
        } else {
            TestTool::default()
        })
    }

    /// Read a file, mapping "file not there" to `None`.
    ///
    /// A read failure on a file that *does* exist still propagates: only
    /// absence is part of the tolerant path.
    fn read_if_present(&self, path: &Path) -> AgentsmithResult<Option<String>> {
        if !self.filesystem.file_exists(path) {
            debug!(path = %path.display(), "marker file absent");
            return Ok(None);
        }
        self.filesystem.read_to_string(path).map(Some)
    }
}
