// Octo Profiles Gateway - API Core
//
// Relays the Octo Browser profile listing to the dashboard frontend so the
// upstream API token never leaves the server.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
