//! Document merger for the shared guidance document.
//!
//! `CLAUDE.md` is the one pre-existing file the generator may touch. The
//! merge is idempotent by construction: a unique marker heading in the
//! appended section is searched for as a plain substring, and its presence
//! makes the merge a no-op. The design assumes exclusive access to the
//! document for the run's duration; concurrent invocations racing on it are
//! unsupported.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{GeneratorConfig, render_text, templates},
    error::AgentsmithResult,
};

/// File name of the shared guidance document, relative to the project root.
pub const GUIDANCE_DOC: &str = "CLAUDE.md";

/// What the merger did to the guidance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeOutcome {
    /// Document was absent; created from the creation template.
    Created,
    /// Document existed without the marker; the section was appended.
    Appended,
    /// Document already carries the marker; left byte-identical.
    AlreadyIntegrated,
}

/// Creates or updates the shared guidance document.
pub struct DocumentMerger<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DocumentMerger<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Merge the agent-team section into `root/CLAUDE.md`.
    ///
    /// Existing content is never truncated, reordered, or edited: the only
    /// mutation ever applied is appending the fixed marker-tagged section.
    /// The one normalization at the seam is that trailing whitespace on the
    /// existing text collapses to a single blank line before the section.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn merge(&self, root: &Path, config: &GeneratorConfig) -> AgentsmithResult<MergeOutcome> {
        let path = root.join(GUIDANCE_DOC);

        if !self.filesystem.file_exists(&path) {
            let content = render_text(GUIDANCE_DOC, templates::GUIDANCE_DOCUMENT, config)?;
            self.filesystem.write_file(&path, &content)?;
            info!(path = %path.display(), "guidance document created");
            return Ok(MergeOutcome::Created);
        }

        let existing = self.filesystem.read_to_string(&path)?;

        if existing.contains(templates::GUIDANCE_MARKER) {
            debug!(path = %path.display(), "marker present, nothing to merge");
            return Ok(MergeOutcome::AlreadyIntegrated);
        }

        let merged = format!(
            "{}\n\n{}",
            existing.trim_end(),
            templates::GUIDANCE_SECTION
        );
        self.filesystem.write_file(&path, &merged)?;
        info!(path = %path.display(), "agent-team section appended");
        Ok(MergeOutcome::Appended)
    }
}
