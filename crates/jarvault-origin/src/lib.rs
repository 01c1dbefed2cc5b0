//! # jarvault-origin — Typed clients for upstream jar distribution platforms
//!
//! Each platform publishes version discovery differently:
//!
//! - **Vanilla** — Mojang's piston-meta manifest-of-manifests: a version
//!   index pointing at per-version detail documents that carry the server
//!   binary URL.
//! - **Paper** — the PaperMC v2 REST API: a per-version ordered list of
//!   build numbers plus a deterministic download path.
//! - **Forge / NeoForge** — a static Maven repository layout where the
//!   installer URL is a pure template of the version string. No discovery
//!   call at all.
//!
//! [`OriginClient`] unifies the three behind one `resolve` call so callers
//! stay platform-agnostic. Resolution failures never escape as panics or
//! raw transport errors; everything converts to [`OriginError`] at this
//! crate's boundary.
//!
//! ## Timeouts
//!
//! All discovery calls share one `reqwest::Client` with a short timeout
//! (seconds). Artifact downloads are NOT this crate's job; the returned
//! [`ResolvedOrigin`] URL is fetched elsewhere with a much longer timeout.

pub mod config;
pub mod error;
pub mod maven;
pub mod paper;
pub(crate) mod retry;
pub mod vanilla;

pub use config::OriginConfig;
pub use error::OriginError;

use std::time::Duration;

use jarvault_core::{BuildSelector, Platform};

/// Outcome of origin resolution: where to download the artifact from, and
/// (for platforms with builds) which concrete build was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrigin {
    /// Authoritative download URL for the artifact bytes.
    pub url: String,
    /// Concrete build the request resolved to, for platforms with a build
    /// concept. `None` for Vanilla/Forge/NeoForge.
    pub build: Option<String>,
}

/// Top-level origin resolver. Holds one sub-client per discovery protocol
/// over a shared short-timeout HTTP client.
#[derive(Debug)]
pub struct OriginClient {
    vanilla: vanilla::VanillaClient,
    paper: paper::PaperClient,
    maven: maven::MavenClient,
}

impl OriginClient {
    /// Create a new origin client from configuration.
    pub fn new(config: OriginConfig) -> Result<Self, OriginError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.discovery_timeout_secs))
            .build()
            .map_err(|e| OriginError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            vanilla: vanilla::VanillaClient::new(http.clone(), config.mojang_manifest_url),
            paper: paper::PaperClient::new(http, config.paper_api_url),
            maven: maven::MavenClient::new(config.forge_maven_url, config.neoforge_maven_url),
        })
    }

    /// Resolve the authoritative download URL for (platform, version,
    /// build). The single dispatch site over the closed platform set.
    pub async fn resolve(
        &self,
        platform: Platform,
        version: &str,
        build: &BuildSelector,
    ) -> Result<ResolvedOrigin, OriginError> {
        match platform {
            Platform::Vanilla => self.vanilla.resolve(version).await,
            Platform::Paper => self.paper.resolve(version, build).await,
            Platform::Forge | Platform::NeoForge => self.maven.resolve(platform, version),
        }
    }

    /// Access the Vanilla (piston-meta) client.
    pub fn vanilla(&self) -> &vanilla::VanillaClient {
        &self.vanilla
    }

    /// Access the Paper (PaperMC v2) client.
    pub fn paper(&self) -> &paper::PaperClient {
        &self.paper
    }

    /// Access the Maven (Forge/NeoForge) client.
    pub fn maven(&self) -> &maven::MavenClient {
        &self.maven
    }
}
