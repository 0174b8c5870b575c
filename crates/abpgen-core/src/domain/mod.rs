// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for abpgen.
//!
//! This module contains pure scaffolding rules with no I/O. Project trees,
//! template engines and progress sinks are reached through the ports defined
//! in the application layer.
//!
//! ## Contents
//!
//! - **Request model**: `ScaffoldRequest`, `ViewFileSpec`
//! - **Path rules**: `FolderPath`, `NamespaceBuilder`, `VersionAwarePathRule`
//! - **Template models**: one serde value per generated file kind
//! - **Progress**: step accounting for a run
//!
// Public API - what the world sees
pub mod error;
pub mod folder_path;
pub mod legacy_casing;
pub mod namespace;
pub mod progress;
pub mod request;
pub mod template_model;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::DomainError;
pub use folder_path::FolderPath;
pub use legacy_casing::VersionAwarePathRule;
pub use namespace::NamespaceBuilder;
pub use progress::ProgressState;
pub use request::{ScaffoldRequest, ScaffoldRequestBuilder, ViewFileSpec};
pub use template_model::{
    ServiceFileModel, ServiceInterfaceFileModel, TemplateId, TemplateModel, ViewFileModel,
};
pub use validation::DomainValidator;
