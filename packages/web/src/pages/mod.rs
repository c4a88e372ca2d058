//! Routed pages

mod cookies_counter;
mod home;
mod not_found;
mod octo_profiles;

pub use cookies_counter::*;
pub use home::*;
pub use not_found::*;
pub use octo_profiles::*;
