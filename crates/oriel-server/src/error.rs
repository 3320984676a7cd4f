//! # Server Error
//!
//! The handful of ways serving can fail before or while running. File-level
//! errors (missing assets) are HTTP responses, not errors here.

use std::net::SocketAddr;

use thiserror::Error;

/// Failures binding or running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The accept loop terminated abnormally.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
