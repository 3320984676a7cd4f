//! # Static Site Service
//!
//! The router and accept loop. Real files win; everything else gets
//! `index.html` with a 200, which is what lets the page's own view state
//! survive a reload on any path.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Build the file-or-fallback router over `dist`.
pub fn router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    let files = ServeDir::new(dist).fallback(index);
    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Bind and run until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let app = router(&config.dist);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("Oriel Smart Services infographic listening on {addr}");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
