//! Project tree backed by real directories.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::trace;

use abpgen_core::{
    application::{
        ApplicationError,
        ports::{FolderNode, ProjectTree},
    },
    error::{AbpgenError, AbpgenResult},
};

/// Production project tree using `std::fs`.
///
/// Folder handles wrap absolute or caller-relative directory paths. SDK-style
/// projects include every file under their directory, so writing a file is
/// what registers it with the project.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjectTree;

impl LocalProjectTree {
    /// Create a new local project tree adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ProjectTree for LocalProjectTree {
    fn find_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<Option<FolderNode>> {
        let candidate = parent.child(name);
        Ok(candidate.location().is_dir().then_some(candidate))
    }

    fn create_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<FolderNode> {
        let folder = parent.child(name);
        match fs::create_dir(folder.location()) {
            Ok(()) => Ok(folder),
            // Lost a race with another writer; the folder is there either way.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && folder.location().is_dir() => {
                Ok(folder)
            }
            Err(e) => Err(map_io_error(folder.location(), e, "create folder")),
        }
    }

    fn contains_file(&self, folder: &FolderNode, name: &str) -> AbpgenResult<bool> {
        Ok(folder.location().join(name).is_file())
    }

    fn add_file(&self, folder: &FolderNode, name: &str, content: &str) -> AbpgenResult<()> {
        let target = folder.location().join(name);

        let mut staged = NamedTempFile::new_in(folder.location())
            .map_err(|e| map_io_error(&target, e, "stage file"))?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.flush())
            .map_err(|e| map_io_error(&target, e, "write file"))?;
        trace!(staged = %staged.path().display(), "content staged");

        // The temp file is removed when the rename is refused.
        staged
            .persist_noclobber(&target)
            .map_err(|e| map_io_error(&target, e.error, "move file into place"))?;

        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> AbpgenError {
    ApplicationError::io(path, format!("Failed to {operation}: {e}")).into()
}
