//! # Server Configuration
//!
//! Environment-driven, with working defaults for local use.

use std::path::PathBuf;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port, bound on all interfaces.
    pub port: u16,
    /// Directory holding the built bundle (must contain `index.html`).
    pub dist: PathBuf,
}

impl ServerConfig {
    /// Read `PORT` and `ORIEL_DIST` from the environment.
    ///
    /// Unset or unparseable values fall back to port 3000 and `dist/`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let dist = std::env::var("ORIEL_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dist"));
        Self { port, dist }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            dist: PathBuf::from("dist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-global, so the env-var cases run as a
    // single test.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        std::env::remove_var("PORT");
        std::env::remove_var("ORIEL_DIST");
        assert_eq!(ServerConfig::from_env(), ServerConfig::default());

        std::env::set_var("PORT", "8080");
        std::env::set_var("ORIEL_DIST", "build/out");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist, PathBuf::from("build/out"));

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(ServerConfig::from_env().port, 3000);

        std::env::remove_var("PORT");
        std::env::remove_var("ORIEL_DIST");
    }
}
