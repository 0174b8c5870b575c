//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffolding engine needs from its host.
//! The `abpgen-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{TemplateId, TemplateModel};
use crate::error::AbpgenResult;

/// Opaque handle to a folder in a project tree.
///
/// The wrapped location is meaningful only to the adapter that issued the
/// handle. Two handles are equal iff they address the same folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderNode(PathBuf);

impl FolderNode {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self(location.into())
    }

    pub fn location(&self) -> &Path {
        &self.0
    }

    /// Handle for a direct child of this folder.
    pub fn child(&self, name: &str) -> Self {
        Self(self.0.join(name))
    }
}

impl fmt::Display for FolderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A project of the host solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: FolderNode,
}

impl Project {
    pub fn new(name: impl Into<String>, root: FolderNode) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Port for the hierarchical project tree.
///
/// Implemented by:
/// - `abpgen_adapters::project_tree::LocalProjectTree` (directories on disk)
/// - `abpgen_adapters::project_tree::MemoryProjectTree` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectTree: Send + Sync {
    /// Find a direct child folder of `parent` by exact name.
    fn find_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<Option<FolderNode>>;

    /// Create a child folder of `parent` and register it with the tree.
    fn create_folder(&self, parent: &FolderNode, name: &str) -> AbpgenResult<FolderNode>;

    /// Whether `folder` already holds a physical file called `name`.
    fn contains_file(&self, folder: &FolderNode, name: &str) -> AbpgenResult<bool>;

    /// Write a new file and add it to the folder's items.
    ///
    /// Must be all-or-nothing: on error neither the file nor its
    /// registration may be left behind.
    fn add_file(&self, folder: &FolderNode, name: &str, content: &str) -> AbpgenResult<()>;
}

/// Port for locating the collaborating projects of the solution.
///
/// Implemented by `abpgen_adapters::discovery::SolutionScanner`.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectDiscovery: Send + Sync {
    /// The `*.Application` project, if present.
    fn find_application_project(&self) -> Option<Project>;

    /// The `*.Web` project (never a `*.WebApi` one), if present.
    fn find_web_project(&self) -> Option<Project>;

    /// Name of the solution; roots every service namespace.
    fn solution_name(&self) -> String;
}

/// Port for listing the dependency packages installed for the web project.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInspector: Send + Sync {
    fn installed_package_names(&self, web_project: &Project) -> AbpgenResult<Vec<String>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `abpgen_adapters::renderer::JinjaRenderer` (minijinja, embedded templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template `id` with `model`.
    ///
    /// Must be pure: the same pair always yields the same text.
    fn render(&self, id: TemplateId, model: &TemplateModel) -> AbpgenResult<String>;
}

/// One-way progress sink.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str, step: u32, total: u32);

    /// Called exactly once per run, whatever the outcome.
    fn finish(&self);
}

/// User-facing notifications (precondition failures, run summaries).
#[cfg_attr(test, mockall::automock)]
pub trait UserNotifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
