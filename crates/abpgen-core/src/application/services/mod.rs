//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives one "add new business" run; the smaller helpers
//! hold the find-or-create and create-if-absent rules it relies on.

pub mod file_materializer;
pub mod path_resolver;
pub mod scaffold_service;

pub use file_materializer::{FileMaterializer, Materialization};
pub use path_resolver::PathResolver;
pub use scaffold_service::{
    DONE_MESSAGE, DTO_FOLDER, GeneratedFile, ScaffoldReport, ScaffoldService, ScaffoldState,
    SolutionProjects,
};
