//! # oriel-server — Static Infographic Server
//!
//! Serves the built single-page infographic, built on Axum/Tower/Tokio.
//! One service, two behaviors: files that exist under the dist directory
//! are served as-is, and every other path falls back to `index.html` so
//! client-side routes survive a full page load.
//!
//! ## Crate Policy
//!
//! - No application routes. The page is static; all interactivity ships
//!   inside the bundle, so the server surface stays at "files plus
//!   fallback" and nothing else.
//! - Configuration comes from the environment only ([`ServerConfig`]).

pub mod config;
pub mod error;
pub mod site;

pub use config::ServerConfig;
pub use error::ServerError;
pub use site::{router, serve};
