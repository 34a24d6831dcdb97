//! Process configuration.
//!
//! The HTTP boundary is configured from `API_HOST` / `API_PORT`; the
//! saved-PDF directory (where the desktop client stages uploads) is resolved
//! once here and injected into whoever needs it, never read from a hidden
//! global.

use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Bank Statement Analyzer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn default_log_filter() -> &'static str {
    "info"
}

/// Directory the client stages uploaded statement PDFs into.
/// `{tempdir}/saved_pdf` on all platforms.
pub fn default_saved_pdf_dir() -> PathBuf {
    std::env::temp_dir().join("saved_pdf")
}

/// Server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub saved_pdf_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7500,
            saved_pdf_dir: default_saved_pdf_dir(),
        }
    }
}

impl ServerConfig {
    /// Read `API_HOST` / `API_PORT` from the environment, falling back to
    /// `127.0.0.1:7500`. An unparsable port falls back rather than aborting.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("API_HOST").unwrap_or(defaults.host);
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self {
            host,
            port,
            saved_pdf_dir: defaults.saved_pdf_dir,
        }
    }
}
