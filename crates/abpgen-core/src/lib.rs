//! abpgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the ABP
//! business-area generator: given a business name, a service folder and a
//! set of views it adds an application service, its interface and the
//! matching Razor page + script pairs to an existing ABP solution.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            abpgen-cli (CLI)             │
//! │      (Builds requests, wires ports)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (ScaffoldService, PathResolver, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (ProjectTree, Discovery, Renderer, ..) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     abpgen-adapters (Infrastructure)    │
//! │ (LocalProjectTree, SolutionScanner, ..) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use abpgen_core::prelude::*;
//!
//! let request = ScaffoldRequest::builder()
//!     .business_name("Order")
//!     .service_name("OrderAppService")
//!     .service_interface_name("IOrderAppService")
//!     .service_folder(r"Sales\Orders")
//!     .view_folder(r"App\Main\views\order")
//!     .add_view(ViewFileSpec::page("index"))
//!     .build()?;
//!
//! let service = ScaffoldService::new(discovery, tree, renderer, inspector, progress, notifier);
//! if service.can_execute(&request) {
//!     service.execute(&request)?;
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{
            DependencyInspector, FolderNode, ProgressReporter, Project, ProjectDiscovery,
            ProjectTree, Severity, TemplateRenderer, UserNotifier,
        },
    };
    pub use crate::domain::{
        FolderPath, ScaffoldRequest, ScaffoldRequestBuilder, TemplateId, TemplateModel,
        ViewFileSpec,
    };
    pub use crate::error::{AbpgenError, AbpgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
