//! Solution discovery on disk.
//!
//! Scans a solution directory once and answers the discovery port from the
//! snapshot. Projects may sit directly next to the `.sln` file or inside
//! nested solution folders such as `src/`.
//!
//! ```text
//! Acme/
//! ├── Acme.sln
//! ├── packages/
//! └── src/
//!     ├── Acme.Application/Acme.Application.csproj
//!     ├── Acme.Web/Acme.Web.csproj
//!     └── Acme.WebApi/Acme.WebApi.csproj   ← never the web project
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use abpgen_core::{
    application::{
        ApplicationError,
        ports::{FolderNode, Project, ProjectDiscovery},
    },
    error::AbpgenError,
};

const PROJECT_EXTENSION: &str = "csproj";
const SOLUTION_EXTENSION: &str = "sln";
const APPLICATION_MARKER: &str = ".Application";
const WEB_MARKER: &str = ".Web";
const WEB_API_MARKER: &str = ".WebApi";

/// Directories never searched for projects.
const SKIPPED_DIRS: &[&str] = &["bin", "obj", "node_modules", "packages", ".git", ".vs"];

/// Errors raised while scanning a solution directory.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Solution directory not found: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to scan solution directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl From<DiscoveryError> for AbpgenError {
    fn from(e: DiscoveryError) -> Self {
        let path = match &e {
            DiscoveryError::NotADirectory(path) => path.clone(),
            DiscoveryError::Walk(inner) => inner.path().map(Path::to_path_buf).unwrap_or_default(),
        };
        ApplicationError::io(path, e.to_string()).into()
    }
}

/// A `.csproj` found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedProject {
    pub name: String,
    pub dir: PathBuf,
}

impl ScannedProject {
    fn to_project(&self) -> Project {
        Project::new(&self.name, FolderNode::new(&self.dir))
    }
}

/// Snapshot of a solution directory.
#[derive(Debug, Clone)]
pub struct SolutionScanner {
    root: PathBuf,
    solution_file: Option<PathBuf>,
    projects: Vec<ScannedProject>,
    app_name_override: Option<String>,
}

impl SolutionScanner {
    /// Scan `root` for a solution file and project directories.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, DiscoveryError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(DiscoveryError::NotADirectory(root));
        }

        let mut solution_files = Vec::new();
        let mut projects = Vec::new();

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some(SOLUTION_EXTENSION) if entry.depth() == 1 => {
                    solution_files.push(path.to_path_buf());
                }
                Some(PROJECT_EXTENSION) => {
                    let (Some(name), Some(dir)) =
                        (path.file_stem().and_then(|s| s.to_str()), path.parent())
                    else {
                        warn!(path = %path.display(), "skipping project with unusable path");
                        continue;
                    };
                    projects.push(ScannedProject {
                        name: name.to_string(),
                        dir: dir.to_path_buf(),
                    });
                }
                _ => {}
            }
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.dir.cmp(&b.dir)));
        debug!(
            projects = projects.len(),
            solutions = solution_files.len(),
            "solution scanned"
        );

        Ok(Self {
            root,
            solution_file: solution_files.into_iter().next(),
            projects,
            app_name_override: None,
        })
    }

    /// Use `name` as the solution name instead of the detected one.
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name_override = Some(name.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn solution_file(&self) -> Option<&Path> {
        self.solution_file.as_deref()
    }

    /// Every project found, in the order they are matched.
    pub fn projects(&self) -> &[ScannedProject] {
        &self.projects
    }

    fn first_matching(&self, matches: fn(&str) -> bool) -> Option<&ScannedProject> {
        self.projects.iter().find(|p| matches(&p.name))
    }
}

impl ProjectDiscovery for SolutionScanner {
    fn find_application_project(&self) -> Option<Project> {
        self.first_matching(is_application_project)
            .map(ScannedProject::to_project)
    }

    fn find_web_project(&self) -> Option<Project> {
        self.first_matching(is_web_project)
            .map(ScannedProject::to_project)
    }

    fn solution_name(&self) -> String {
        if let Some(name) = &self.app_name_override {
            return name.clone();
        }
        if let Some(stem) = self
            .solution_file
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
        {
            return stem.to_string();
        }
        self.first_matching(is_application_project)
            .and_then(|p| marker_prefix(&p.name, APPLICATION_MARKER))
            .unwrap_or_default()
            .to_string()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Text before `marker`, when the marker occurs after a non-empty prefix.
fn marker_prefix<'a>(name: &'a str, marker: &str) -> Option<&'a str> {
    name.find(marker)
        .filter(|&at| at > 0)
        .map(|at| &name[..at])
}

/// `Acme.Application`, `Acme.Application.Shared`, ...
pub fn is_application_project(name: &str) -> bool {
    marker_prefix(name, APPLICATION_MARKER).is_some()
}

/// `Acme.Web`, `Acme.Web.Mvc`, ... but never `Acme.WebApi`.
pub fn is_web_project(name: &str) -> bool {
    marker_prefix(name, WEB_MARKER).is_some() && !name.contains(WEB_API_MARKER)
}
