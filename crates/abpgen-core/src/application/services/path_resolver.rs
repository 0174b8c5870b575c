//! Find-or-create resolution of nested folders.

use tracing::{debug, trace};

use crate::{
    application::ports::{FolderNode, ProjectTree},
    domain::FolderPath,
    error::AbpgenResult,
};

/// Walks a [`FolderPath`] under a root folder, creating missing segments.
pub struct PathResolver<'a> {
    tree: &'a dyn ProjectTree,
}

impl<'a> PathResolver<'a> {
    pub fn new(tree: &'a dyn ProjectTree) -> Self {
        Self { tree }
    }

    /// Resolve `path` under `root` and return the deepest folder.
    ///
    /// Segments are processed strictly left to right. Existing folders are
    /// reused, so resolving the same path twice yields the same node and
    /// creates nothing the second time.
    pub fn resolve(&self, root: &FolderNode, path: &FolderPath) -> AbpgenResult<FolderNode> {
        let mut current = root.clone();

        for segment in path.segments() {
            current = match self.tree.find_folder(&current, segment)? {
                Some(existing) => {
                    trace!(folder = %existing, "folder exists");
                    existing
                }
                None => {
                    let created = self.tree.create_folder(&current, segment)?;
                    debug!(folder = %created, "folder created");
                    created
                }
            };
        }

        Ok(current)
    }

    /// Parse and resolve a delimited path string.
    pub fn resolve_str(&self, root: &FolderNode, path: &str) -> AbpgenResult<FolderNode> {
        let path = FolderPath::parse(path)?;
        self.resolve(root, &path)
    }
}
