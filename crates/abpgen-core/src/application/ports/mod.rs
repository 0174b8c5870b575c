//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `abpgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the engine, implemented by the host
//!   - `ProjectTree`: folder lookup/creation and file registration
//!   - `ProjectDiscovery`: application / web project lookup
//!   - `DependencyInspector`: installed package names
//!   - `TemplateRenderer`: template rendering
//!   - `ProgressReporter`, `UserNotifier`: one-way feedback sinks
//!
//! - **Driving (Input) Ports**: `ScaffoldService::can_execute` / `execute`

pub mod output;

pub use output::{
    DependencyInspector, FolderNode, ProgressReporter, Project, ProjectDiscovery, ProjectTree,
    Severity, TemplateRenderer, UserNotifier,
};
