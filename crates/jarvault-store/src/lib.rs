//! # jarvault-store — Object store gateway
//!
//! Wraps a single bucket of an S3-compatible object store (AWS S3, MinIO,
//! R2) behind the four operations the cache engine needs:
//!
//! - [`JarStore::ensure_bucket`] — idempotent bucket creation at startup;
//!   any failure other than "already exists" is fatal configuration.
//! - [`JarStore::exists`] — existence probe with a tagged result: a
//!   missing object is `Ok(false)`, but an unreachable or misconfigured
//!   store is an `Err`. Conflating the two would turn outages into
//!   redundant re-downloads, so they stay distinct all the way up.
//! - [`JarStore::upload`] — single-shot streamed upload from a local file.
//!   SDK-level retries are disabled; retry policy belongs to the caller.
//! - [`JarStore::presign`] — time-bounded capability URL for direct GET
//!   access to one key, no further authentication required.

pub mod config;
pub mod error;
pub mod gateway;

pub use config::StoreConfig;
pub use error::StoreError;
pub use gateway::JarStore;
