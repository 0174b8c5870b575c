//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports, not request-validation failures. Those are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Which of the two collaborating projects could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRole {
    Application,
    Web,
}

impl ProjectRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Web => "Web",
        }
    }
}

impl std::fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The application or web project is not part of the solution.
    #[error("Cannot find the {role} project. Please ensure that you are in the ABP solution.")]
    MissingProject { role: ProjectRole },

    /// Template lookup, compilation or model binding failed.
    #[error("Template '{template}' failed: {reason}")]
    TemplateError { template: String, reason: String },

    /// Writing a file or registering it with the project tree failed.
    #[error("I/O failure at {path}: {reason}")]
    IoFailure { path: PathBuf, reason: String },

    /// Project-tree state lock was poisoned.
    #[error("Project tree lock poisoned")]
    TreeLockError,
}

impl ApplicationError {
    pub fn template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TemplateError {
            template: template.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::IoFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProject { role } => vec![
                format!("No project named '<Solution>.{}' was found", role),
                "Run from the solution directory or pass --solution <DIR>".into(),
                "Try: abpgen check to see what was detected".into(),
            ],
            Self::TemplateError { template, .. } => vec![
                format!("Check the template '{}'", template),
                "If you override templates, compare with the built-in ones".into(),
            ],
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files created before the failure were kept; re-running skips them".into(),
            ],
            Self::TreeLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProject { .. } => ErrorCategory::NotFound,
            Self::TemplateError { .. } => ErrorCategory::Configuration,
            Self::IoFailure { .. } | Self::TreeLockError => ErrorCategory::Internal,
        }
    }
}
