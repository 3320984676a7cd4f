//! # oriel-cli — CLI for the Smart Services Infographic
//!
//! Provides the `oriel` command-line interface around the content table,
//! the navigation model, and the static server.
//!
//! ## Subcommands
//!
//! - `oriel serve` — Serve the built bundle with SPA fallback.
//! - `oriel content` — Validate and summarize the built-in content table.
//! - `oriel journey` — Print one journey's steps.
//! - `oriel walk` — Replay a journey through the navigation model,
//!   printing what a screen reader would announce.

pub mod content;
pub mod journey;
pub mod serve;
pub mod walk;
