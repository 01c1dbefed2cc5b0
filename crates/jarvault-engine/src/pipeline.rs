//! The download pipeline: origin URL → spool file.
//!
//! Streams the origin response chunk-by-chunk into a uniquely named file
//! in the spool directory; the artifact is never buffered in memory. The
//! returned [`tempfile::TempPath`] deletes the file when dropped, so spool
//! cleanup is unconditional: early error returns, upload failures in the
//! caller, and task cancellation all converge on the same drop path, and
//! repeated failures cannot accumulate disk.
//!
//! Concurrent pipeline runs get distinct spool names even for the same
//! cache key (the tempfile suffix is unique per run), so racing downloads
//! never interfere locally; the overwrite race at the object store is the
//! engine's accepted behavior.

use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;

use jarvault_core::JarKey;

use crate::error::{CacheError, TransferError};

/// Streams artifacts from origin URLs into the spool directory.
#[derive(Debug)]
pub struct DownloadPipeline {
    http: reqwest::Client,
    spool_dir: PathBuf,
}

impl DownloadPipeline {
    /// Create a pipeline with its own long-timeout HTTP client.
    pub(crate) fn new(spool_dir: PathBuf, timeout_secs: u64) -> Result<Self, CacheError> {
        std::fs::create_dir_all(&spool_dir).map_err(|e| CacheError::Init {
            reason: format!("cannot create spool dir {}: {e}", spool_dir.display()),
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CacheError::Init {
                reason: format!("cannot build download client: {e}"),
            })?;

        Ok(Self { http, spool_dir })
    }

    /// Download the artifact at `url` into a fresh spool file.
    ///
    /// On any failure the partially written file is already gone by the
    /// time the error reaches the caller.
    pub async fn fetch_to_spool(
        &self,
        url: &str,
        key: &JarKey,
    ) -> Result<TempPath, TransferError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransferError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(TransferError::OriginStatus {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let spool = tempfile::Builder::new()
            .prefix(&format!("{}.", key.spool_stem()))
            .suffix(".part")
            .tempfile_in(&self.spool_dir)
            .map_err(|e| TransferError::Spool {
                path: self.spool_dir.clone(),
                source: e,
            })?
            .into_temp_path();

        let mut file = tokio::fs::File::create(&spool)
            .await
            .map_err(|e| TransferError::Spool {
                path: spool.to_path_buf(),
                source: e,
            })?;

        let mut stream = resp.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| TransferError::Fetch {
                url: url.to_string(),
                source: e,
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| TransferError::Spool {
                    path: spool.to_path_buf(),
                    source: e,
                })?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| TransferError::Spool {
            path: spool.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(key = %key, bytes = written, "spooled artifact");
        Ok(spool)
    }
}
