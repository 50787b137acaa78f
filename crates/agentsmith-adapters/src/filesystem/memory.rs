//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use agentsmith_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying storage, so a test can hand a clone to a
/// service and keep its own handle for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory, creating all parents (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        insert_with_parents(&mut inner.directories, path.into());
    }

    /// Seed a file and its parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_parents(&mut inner.directories, parent.to_path_buf());
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

fn insert_with_parents(directories: &mut HashSet<PathBuf>, path: PathBuf) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

/// A poisoned lock means a test panicked mid-operation; surface it as a
/// filesystem failure rather than a second panic.
fn poisoned(path: &Path) -> agentsmith_core::error::AgentsmithError {
    agentsmith_core::application::ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> agentsmith_core::error::AgentsmithResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            agentsmith_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> agentsmith_core::error::AgentsmithResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;
        insert_with_parents(&mut inner.directories, path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> agentsmith_core::error::AgentsmithResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    agentsmith_core::application::ApplicationError::FilesystemError {
                        path: path.to_path_buf(),
                        reason: "Parent directory does not exist".into(),
                    }
                    .into(),
                );
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
