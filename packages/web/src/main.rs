//! Octo Dashboard - Dioxus Fullstack Web Application
//!
//! Lists Octo Browser profiles fetched through the gateway and hosts the
//! cookie counter utility.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! API_URL=http://localhost:5001 dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
