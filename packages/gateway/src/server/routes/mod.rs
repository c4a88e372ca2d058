// HTTP routes
pub mod health;
pub mod profiles;

pub use health::*;
pub use profiles::*;
