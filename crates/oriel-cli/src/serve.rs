//! # Serve Subcommand
//!
//! Wraps [`oriel_server::serve`], with flags taking precedence over the
//! `PORT` and `ORIEL_DIST` environment variables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use oriel_server::ServerConfig;

/// Arguments for the `oriel serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// TCP port to listen on. Overrides $PORT.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory with the built bundle. Overrides $ORIEL_DIST.
    #[arg(long)]
    pub dist: Option<PathBuf>,
}

/// Run the static server until interrupted.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dist) = &args.dist {
        config.dist = dist.clone();
    }

    let index = config.dist.join("index.html");
    if !index.is_file() {
        tracing::warn!("{} not found; all requests will 404", index.display());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(oriel_server::serve(config))?;
    Ok(0)
}
