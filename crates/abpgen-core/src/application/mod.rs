//! Application layer for abpgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or path rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FileMaterializer, GeneratedFile, Materialization, PathResolver, ScaffoldReport,
    ScaffoldService, ScaffoldState, SolutionProjects,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    DependencyInspector, FolderNode, ProgressReporter, Project, ProjectDiscovery, ProjectTree,
    Severity, TemplateRenderer, UserNotifier,
};

pub use error::{ApplicationError, ProjectRole};
