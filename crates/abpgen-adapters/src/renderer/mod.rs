//! Template rendering adapters.

pub mod jinja;

pub use jinja::{JinjaRenderer, builtin_source};
