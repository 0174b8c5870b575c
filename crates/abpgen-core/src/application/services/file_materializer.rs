//! Idempotent creation of generated files.

use std::fmt;

use tracing::{debug, info};

use crate::{
    application::ports::{FolderNode, ProjectTree},
    error::AbpgenResult,
};

/// What happened to one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialization {
    /// The file did not exist and was written.
    Created,
    /// The file already existed and was left untouched.
    Skipped,
}

impl fmt::Display for Materialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

/// Writes files that are not yet present and never overwrites.
///
/// Re-running a scaffold therefore preserves any hand edits made to files
/// generated by an earlier run.
pub struct FileMaterializer<'a> {
    tree: &'a dyn ProjectTree,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(tree: &'a dyn ProjectTree) -> Self {
        Self { tree }
    }

    /// Create `file_name` in `folder` with `content` unless it already exists.
    pub fn create_if_absent(
        &self,
        folder: &FolderNode,
        file_name: &str,
        content: &str,
    ) -> AbpgenResult<Materialization> {
        self.create_with(folder, file_name, || Ok(content.to_string()))
    }

    /// Like [`Self::create_if_absent`], but only produces the content when the
    /// file is actually missing.
    pub fn create_with<F>(
        &self,
        folder: &FolderNode,
        file_name: &str,
        content: F,
    ) -> AbpgenResult<Materialization>
    where
        F: FnOnce() -> AbpgenResult<String>,
    {
        if self.tree.contains_file(folder, file_name)? {
            debug!(folder = %folder, file = file_name, "file exists, skipping");
            return Ok(Materialization::Skipped);
        }

        let content = content()?;
        self.tree.add_file(folder, file_name, &content)?;
        info!(folder = %folder, file = file_name, bytes = content.len(), "file created");

        Ok(Materialization::Created)
    }
}
