// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried into reports and notifications)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A delimited folder path was empty or contained an empty / relative segment.
    #[error("Invalid folder path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The scaffold request itself violates one of its invariants.
    #[error("Invalid scaffold request: {0}")]
    InvalidRequest(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPath { path, .. } => vec![
                format!("Check the folder path: '{}'", path),
                "Separate folders with '\\' (or '/'), e.g. Sales\\Orders".into(),
                "Leading, trailing and doubled separators are not allowed".into(),
                "Folder names cannot be blank or padded with spaces".into(),
            ],
            Self::InvalidRequest(msg) => vec![
                "Check the business, service and view names".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => vec![format!("Provide a value for '{}'", field)],
        }
    }
}
