//! Reusable UI components

mod alert;
mod layout;
mod loading;
mod sidebar;

pub use alert::*;
pub use layout::*;
pub use loading::*;
pub use sidebar::*;
