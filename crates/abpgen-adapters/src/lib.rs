//! Infrastructure adapters for abpgen.
//!
//! This crate implements the ports defined in `abpgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod dependency;
pub mod discovery;
pub mod project_tree;
pub mod renderer;
pub mod reporting;

// Re-export commonly used adapters
pub use dependency::{PackagesDirInspector, StaticPackages};
pub use discovery::{DiscoveryError, SolutionScanner};
pub use project_tree::{LocalProjectTree, MemoryProjectTree};
pub use renderer::JinjaRenderer;
pub use reporting::{RecordingReporter, TracingReporter};
