//! Unified error handling for abpgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for abpgen core operations.
#[derive(Debug, Error, Clone)]
pub enum AbpgenError {
    /// Errors from the domain layer (invalid paths and requests).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and adapter failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl AbpgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// True for the precondition failure raised before any mutation.
    pub fn is_missing_project(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::MissingProject { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type AbpgenResult<T> = Result<T, AbpgenError>;
