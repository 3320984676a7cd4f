//! # oriel CLI Entry Point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oriel_cli::content::{run_content, ContentArgs};
use oriel_cli::journey::{run_journey, JourneyArgs};
use oriel_cli::serve::{run_serve, ServeArgs};
use oriel_cli::walk::{run_walk, WalkArgs};

/// Oriel Smart Services infographic toolchain.
///
/// Serves the built page, validates and inspects the content table, and
/// replays patient journeys through the navigation model.
#[derive(Parser, Debug)]
#[command(name = "oriel", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the built bundle with SPA fallback.
    Serve(ServeArgs),

    /// Validate the built-in content table and dump it as JSON.
    Content(ContentArgs),

    /// Print one journey's steps.
    Journey(JourneyArgs),

    /// Replay a journey, printing screen-reader announcements.
    Walk(WalkArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Content(args) => run_content(&args),
        Commands::Journey(args) => run_journey(&args),
        Commands::Walk(args) => run_walk(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
