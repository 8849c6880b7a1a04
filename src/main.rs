//! Verda - Dioxus Web Landing Page
//!
//! Client-side web application for the Verda carbon programme: a landing
//! page with a live impact counter and an inquiry modal that submits
//! prospective-customer inquiries to the backend API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod inquiry;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Explicit API base override, mostly for server-side rendering and
    // local testing against a non-default backend.
    if let Ok(base) = std::env::var("API_BASE") {
        inquiry::init_api_base(base);
    }

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
