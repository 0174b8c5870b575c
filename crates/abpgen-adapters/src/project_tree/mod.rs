//! Project tree adapters.

pub mod local;
pub mod memory;

pub use local::LocalProjectTree;
pub use memory::MemoryProjectTree;
