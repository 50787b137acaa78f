//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `agentsmith-adapters` implement
//! these.
//!
//! The generator has a single driven port: the filesystem. The scanner uses
//! the read surface, the write loop and the document merger use the write
//! surface.

use std::path::Path;

use crate::error::AgentsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `agentsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `agentsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Existence probes are infallible: "cannot tell" is treated as absent,
///   which matches the scanner's default-tolerant contract.
/// - All operations are blocking and sequential; the generator is a
///   single-threaded batch run.
pub trait Filesystem: Send + Sync {
    /// Check if a directory exists at `path`.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Check if a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file's entire content.
    fn read_to_string(&self, path: &Path) -> AgentsmithResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AgentsmithResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> AgentsmithResult<()>;
}
