//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Scan the project root for signals
//! 2. Resolve signals + overrides into one configuration
//! 3. Select artifacts from the catalog
//! 4. Render each selected artifact
//! 5. Write the artifacts and merge the guidance document
//!
//! Single-threaded, synchronous, one batch run per call. All artifact paths
//! are fresh, so a failed write leaves previously written artifacts in place
//! rather than rolling them back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        DocumentMerger, MergeOutcome, Scanner,
        ports::Filesystem,
    },
    domain::{GeneratorConfig, Overrides, render, select_artifacts},
    error::AgentsmithResult,
};

/// What one generation run produced, for caller-side reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// The configuration the run resolved to.
    pub config: GeneratorConfig,
    /// Written artifact paths, relative to the project root, in catalog
    /// order.
    pub written: Vec<PathBuf>,
    /// What happened to the shared guidance document.
    pub merge: MergeOutcome,
}

/// Main generation service.
///
/// Orchestrates the scan, resolve, select, render, and write workflow over
/// an injected filesystem adapter.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate the agent team for the project at `root`.
    ///
    /// This is the main use case. `root` must be an existing directory;
    /// everything else about the project is optional and only shapes which
    /// artifacts come out.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn generate(&self, root: &Path, overrides: Overrides) -> AgentsmithResult<GenerateReport> {
        // 1. Scan
        let scanner = Scanner::new(&*self.filesystem);
        let signals = scanner.scan(root)?;

        // 2. Resolve
        let config = GeneratorConfig::resolve(&overrides, &signals);
        debug!(?config, "configuration resolved");

        // 3. Select + 4. Render + write
        let mut written = Vec::new();
        for spec in select_artifacts(&config) {
            let artifact = render(spec, &config)?;

            let target = root.join(&artifact.path);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, &artifact.content)?;

            info!(artifact = %spec.id, path = %artifact.path.display(), "artifact written");
            written.push(artifact.path);
        }

        // 5. Merge the guidance document
        let merger = DocumentMerger::new(&*self.filesystem);
        let merge = merger.merge(root, &config)?;

        info!(
            artifacts = written.len(),
            merge = ?merge,
            "generation completed"
        );

        Ok(GenerateReport {
            config,
            written,
            merge,
        })
    }
}
