//! Cache engine error types.
//!
//! The taxonomy follows the caller-visible split: [`CacheError::Resolution`]
//! and [`CacheError::Transfer`] both mean "this artifact is unavailable"
//! (a not-found outcome), while [`CacheError::Store`] means the cache
//! itself is unhealthy (a server-side failure) and must never be presented
//! as a missing artifact.

use std::path::PathBuf;

use jarvault_origin::OriginError;
use jarvault_store::StoreError;

/// Errors from the artifact cache engine.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Engine construction failed (HTTP client build, spool directory).
    #[error("engine initialization failed: {reason}")]
    Init {
        /// What went wrong.
        reason: String,
    },
    /// Origin discovery failed; the artifact cannot be located upstream.
    #[error("origin resolution failed: {0}")]
    Resolution(#[from] OriginError),
    /// The artifact bytes could not be moved origin → spool → store.
    #[error("artifact transfer failed: {0}")]
    Transfer(#[from] TransferError),
    /// The object store is unreachable or misconfigured. Distinct from a
    /// cache miss by design: redownloading cannot fix a broken store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the download pipeline (origin → spool file → upload).
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Transport failure talking to the origin (connect, timeout,
    /// mid-stream disconnect).
    #[error("origin fetch failed for {url}: {source}")]
    Fetch {
        /// Origin URL being fetched.
        url: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// The origin answered with a non-success status. This is also how a
    /// nonexistent Forge/NeoForge version finally surfaces.
    #[error("origin returned {status} for {url}")]
    OriginStatus {
        /// Origin URL being fetched.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Local spool file I/O failed.
    #[error("spool I/O failed at {path}: {source}")]
    Spool {
        /// Spool path involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The upload into the object store failed. Recoverable from the
    /// caller's perspective; the next request simply retries the whole
    /// populate.
    #[error("upload failed: {source}")]
    Upload {
        /// Underlying store error.
        source: StoreError,
    },
}
