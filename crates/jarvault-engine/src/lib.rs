//! # jarvault-engine — The artifact cache engine
//!
//! Composes the origin resolvers, the download pipeline, and the object
//! store gateway into the cache contract:
//!
//! 1. Derive the deterministic cache key for (platform, version, build).
//! 2. Probe the object store. A populated key is served with **zero
//!    origin traffic**; this is the core guarantee.
//! 3. On a miss, resolve the origin URL, stream the artifact through a
//!    spool file into the store, and return the key.
//! 4. Presigned download URLs are issued separately, per request, and
//!    never touch the origin side at all.
//!
//! ## Probe/resolve ordering
//!
//! Vanilla, Forge, and NeoForge keys are independent of any build, so the
//! store probe always runs before any origin call. Paper keys embed the
//! resolved build: a `latest` request must resolve first, while a pinned
//! build probes first and skips resolution entirely on a hit.
//!
//! ## Concurrency
//!
//! The engine holds no locks. Two simultaneous misses for the same key
//! both download and upload; the second write overwrites the first with
//! identical bytes. That race is accepted; a single-flight map would buy
//! only bandwidth, not correctness. The one piece of shared state, the
//! vanilla manifest cell, is populate-once and race-safe by construction.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::EngineConfig;
pub use error::{CacheError, TransferError};

use jarvault_core::{BuildSelector, JarKey, Platform};
use jarvault_origin::OriginClient;
use jarvault_store::JarStore;

/// The artifact cache engine. One long-lived instance per service.
#[derive(Debug)]
pub struct JarCache {
    origin: OriginClient,
    store: JarStore,
    pipeline: pipeline::DownloadPipeline,
}

impl JarCache {
    /// Assemble the engine from its collaborators.
    pub fn new(
        origin: OriginClient,
        store: JarStore,
        config: EngineConfig,
    ) -> Result<Self, CacheError> {
        let pipeline =
            pipeline::DownloadPipeline::new(config.spool_dir, config.download_timeout_secs)?;
        Ok(Self {
            origin,
            store,
            pipeline,
        })
    }

    /// Ensure the requested artifact is cached and return its key.
    ///
    /// On a cache hit this performs exactly one store probe and no origin
    /// traffic. On a miss it resolves, downloads, and uploads before
    /// returning. Errors split into "artifact unavailable"
    /// ([`CacheError::Resolution`] / [`CacheError::Transfer`]) and "store
    /// unhealthy" ([`CacheError::Store`]).
    pub async fn ensure_jar(
        &self,
        platform: Platform,
        version: &str,
        build: &BuildSelector,
    ) -> Result<JarKey, CacheError> {
        match platform {
            Platform::Vanilla => {
                self.ensure_fixed_key(platform, version, build, JarKey::vanilla(version))
                    .await
            }
            Platform::Forge | Platform::NeoForge => {
                self.ensure_fixed_key(platform, version, build, JarKey::installer(platform, version))
                    .await
            }
            Platform::Paper => self.ensure_paper(version, build).await,
        }
    }

    /// Issue a presigned download URL for a cache key.
    ///
    /// Pure store operation: no origin or resolver involvement, no state.
    pub async fn direct_url(&self, key: &JarKey, ttl_secs: u64) -> Result<String, CacheError> {
        Ok(self.store.presign(key, ttl_secs).await?)
    }

    /// Hit-or-populate for platforms whose key is independent of any
    /// build: probe first, resolve only on a miss.
    async fn ensure_fixed_key(
        &self,
        platform: Platform,
        version: &str,
        build: &BuildSelector,
        key: JarKey,
    ) -> Result<JarKey, CacheError> {
        if self.store.exists(&key).await? {
            tracing::debug!(key = %key, "cache hit");
            return Ok(key);
        }

        let resolved = self.origin.resolve(platform, version, build).await?;
        self.populate(&resolved.url, &key).await?;
        Ok(key)
    }

    /// Paper: the key embeds the concrete build, so the probe/resolve
    /// order depends on the selector.
    async fn ensure_paper(
        &self,
        version: &str,
        build: &BuildSelector,
    ) -> Result<JarKey, CacheError> {
        if let BuildSelector::Pinned(pinned) = build {
            // A literal build pins the key up front; a hit skips
            // resolution entirely.
            let key = JarKey::paper(version, pinned);
            if self.store.exists(&key).await? {
                tracing::debug!(key = %key, "cache hit");
                return Ok(key);
            }
            let resolved = self.origin.resolve(Platform::Paper, version, build).await?;
            self.populate(&resolved.url, &key).await?;
            return Ok(key);
        }

        // `latest` cannot be probed before resolution; the key depends
        // on which build is newest right now.
        let resolved = self.origin.resolve(Platform::Paper, version, build).await?;
        let concrete =
            resolved
                .build
                .as_deref()
                .ok_or_else(|| CacheError::Resolution(
                    jarvault_origin::OriginError::MetadataMalformed {
                        endpoint: "paper builds".into(),
                        reason: "latest resolution produced no build".into(),
                    },
                ))?;

        let key = JarKey::paper(version, concrete);
        if self.store.exists(&key).await? {
            tracing::debug!(key = %key, "cache hit");
            return Ok(key);
        }

        self.populate(&resolved.url, &key).await?;
        Ok(key)
    }

    /// Run the miss path: spool the origin bytes, upload them, and let
    /// the spool file delete itself on the way out, success and failure
    /// alike.
    async fn populate(&self, url: &str, key: &JarKey) -> Result<(), CacheError> {
        tracing::info!(key = %key, url, "cache miss, populating");

        let spool = self.pipeline.fetch_to_spool(url, key).await?;

        self.store
            .upload(&spool, key)
            .await
            .map_err(|source| CacheError::Transfer(TransferError::Upload { source }))?;

        // `spool` (a TempPath) drops here, removing the local file.
        Ok(())
    }
}
