//! In-memory project tree for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use abpgen_core::{
    application::{
        ApplicationError,
        ports::{FolderNode, ProjectTree},
    },
    error::AbpgenResult,
};

/// In-memory project tree.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// scaffold service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectTree {
    inner: Arc<RwLock<MemoryProjectTreeInner>>,
}

#[derive(Debug, Default)]
struct MemoryProjectTreeInner {
    folders: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    failing_files: HashSet<String>,
}

impl MemoryProjectTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` and all of its ancestors as folders.
    ///
    /// Returns the handle of the deepest folder, ready to use as a project root.
    pub fn add_folder(&self, path: impl AsRef<Path>) -> FolderNode {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                inner.folders.insert(current.clone());
            }
        }
        FolderNode::new(path)
    }

    /// Seed an existing file (testing helper).
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_folder(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Make every later `add_file` for `file_name` fail.
    pub fn fail_writes_to(&self, file_name: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_files.insert(file_name.to_string());
        }
    }

    /// Read a file's content.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    pub fn has_folder(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.folders.contains(path.as_ref()))
            .unwrap_or(false)
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All folder paths, sorted.
    pub fn list_folders(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.folders.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl ProjectTree for MemoryProjectTree {
    fn find_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<Option<FolderNode>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::TreeLockError)?;

        let candidate = parent.child(name);
        Ok(inner
            .folders
            .contains(candidate.location())
            .then_some(candidate))
    }

    fn create_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<FolderNode> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::TreeLockError)?;

        if !inner.folders.contains(parent.location()) {
            return Err(
                ApplicationError::io(parent.location(), "Parent folder does not exist").into(),
            );
        }

        let folder = parent.child(name);
        inner.folders.insert(folder.location().to_path_buf());
        Ok(folder)
    }

    fn contains_file(&self, folder: &FolderNode, name: &str) -> AbpgenResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::TreeLockError)?;

        Ok(inner.files.contains_key(&folder.location().join(name)))
    }

    fn add_file(&self, folder: &FolderNode, name: &str, content: &str) -> AbpgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::TreeLockError)?;

        let path = folder.location().join(name);
        if !inner.folders.contains(folder.location()) {
            return Err(ApplicationError::io(path, "Folder does not exist").into());
        }
        if inner.failing_files.contains(name) {
            return Err(ApplicationError::io(path, "simulated write failure").into());
        }
        if inner.files.contains_key(&path) {
            return Err(ApplicationError::io(path, "File already exists").into());
        }

        inner.files.insert(path, content.to_string());
        Ok(())
    }
}
