//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::*;
pub use test_dependencies::*;
pub use traits::*;
