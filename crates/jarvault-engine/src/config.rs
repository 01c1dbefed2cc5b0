//! Engine configuration: spool directory and download timeout.

use std::path::PathBuf;

/// Configuration for the cache engine's transfer side.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory for in-flight spool files. Created on engine
    /// construction if absent; spool files themselves are transient and
    /// removed when each pipeline run ends.
    pub spool_dir: PathBuf,
    /// Timeout for the artifact byte stream, in seconds. Artifacts are
    /// large binaries, so this is minutes where discovery is seconds.
    pub download_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spool_dir: std::env::temp_dir().join("jarvault-spool"),
            download_timeout_secs: 300,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults (`$TMPDIR/jarvault-spool`, 300 s).
    ///
    /// Variables:
    /// - `JARVAULT_SPOOL_DIR`
    /// - `JARVAULT_DOWNLOAD_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            spool_dir: std::env::var_os("JARVAULT_SPOOL_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.spool_dir),
            download_timeout_secs: std::env::var("JARVAULT_DOWNLOAD_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.download_timeout_secs),
        }
    }
}
