//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor: the long-lived cache engine and the
//! in-memory vanilla version catalog.
//!
//! The engine instance lives as long as the process; that lifetime is
//! what scopes the vanilla manifest cache, so constructing one engine per
//! request would defeat it.

use std::sync::Arc;

use jarvault_engine::JarCache;

use crate::catalog::VersionCatalog;

/// Service configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Interval between vanilla catalog refreshes, in seconds.
    pub catalog_refresh_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `JARVAULT_CATALOG_REFRESH_SECS` (default: 21600, i.e. 6 hours)
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            catalog_refresh_secs: std::env::var("JARVAULT_CATALOG_REFRESH_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(21_600),
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The artifact cache engine. One instance per process.
    pub engine: Arc<JarCache>,
    /// In-memory vanilla release catalog, maintained by the refresh task.
    pub catalog: VersionCatalog,
}
