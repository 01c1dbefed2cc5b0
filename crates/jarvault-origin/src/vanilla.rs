//! Typed client for Mojang's piston-meta discovery protocol.
//!
//! Discovery is a two-hop chain: the version manifest
//! (`version_manifest_v2.json`) lists every version id with a pointer to a
//! per-version detail document, and the detail document carries the
//! concrete server binary URL under `downloads.server.url`.
//!
//! ## Manifest caching
//!
//! The manifest is fetched at most once per [`VanillaClient`] instance and
//! held for the instance's lifetime (accepted staleness; a restart picks
//! up new versions, and the API service refreshes its catalog with a
//! separate client). A failed fetch leaves the cell empty so a later
//! request may retry. Two requests racing to populate the cell compute
//! equal values; the redundant fetch is wasted work, never corruption.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::OnceCell;
use url::Url;

use jarvault_core::Platform;

use crate::error::OriginError;
use crate::ResolvedOrigin;

/// Version manifest: the index of every published version.
///
/// `#[serde(default)]` throughout: the live manifest carries fields not
/// modeled here, and absent lists degrade to "version not found" instead
/// of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionManifest {
    /// All published versions, newest first.
    #[serde(default)]
    pub versions: Vec<ManifestEntry>,
}

/// One version entry in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Version id, e.g. `1.20.1`.
    pub id: String,
    /// URL of the per-version detail document.
    pub url: String,
    /// Release channel: `release`, `snapshot`, `old_beta`, `old_alpha`.
    #[serde(rename = "type", default)]
    pub release_type: String,
    /// Publication timestamp.
    #[serde(rename = "releaseTime", default)]
    pub release_time: Option<DateTime<Utc>>,
}

/// A release-channel version id with its publication time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    /// Version id, e.g. `1.20.1`.
    pub id: String,
    /// Publication timestamp, if the manifest carried one.
    pub released_at: Option<DateTime<Utc>>,
}

/// Per-version detail document. Only the server download is modeled.
#[derive(Debug, Deserialize)]
struct VersionDetail {
    #[serde(default)]
    downloads: Option<DetailDownloads>,
}

#[derive(Debug, Deserialize)]
struct DetailDownloads {
    #[serde(default)]
    server: Option<DownloadTarget>,
}

#[derive(Debug, Deserialize)]
struct DownloadTarget {
    url: String,
}

/// Client for the Mojang piston-meta API.
#[derive(Debug)]
pub struct VanillaClient {
    http: reqwest::Client,
    manifest_url: Url,
    manifest: OnceCell<VersionManifest>,
}

impl VanillaClient {
    pub(crate) fn new(http: reqwest::Client, manifest_url: Url) -> Self {
        Self {
            http,
            manifest_url,
            manifest: OnceCell::new(),
        }
    }

    /// The cached manifest, fetching it on first use.
    async fn manifest(&self) -> Result<&VersionManifest, OriginError> {
        self.manifest
            .get_or_try_init(|| self.fetch_manifest())
            .await
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, OriginError> {
        let endpoint = "GET version_manifest_v2.json";
        let url = self.manifest_url.as_str();

        let resp = crate::retry::retry_send(|| self.http.get(url).send())
            .await
            .map_err(|e| OriginError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(OriginError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let manifest: VersionManifest =
            resp.json().await.map_err(|e| OriginError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        tracing::debug!(versions = manifest.versions.len(), "fetched version manifest");
        Ok(manifest)
    }

    /// Resolve the server jar download URL for an exact version id.
    ///
    /// Vanilla has no build concept; the returned origin carries no build.
    pub async fn resolve(&self, version: &str) -> Result<ResolvedOrigin, OriginError> {
        let manifest = self.manifest().await?;

        let entry = manifest
            .versions
            .iter()
            .find(|v| v.id == version)
            .ok_or_else(|| OriginError::VersionNotFound {
                platform: Platform::Vanilla,
                version: version.to_string(),
            })?;

        let endpoint = format!("GET {}", entry.url);
        let resp = crate::retry::retry_send(|| self.http.get(&entry.url).send())
            .await
            .map_err(|e| OriginError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(OriginError::Api {
                endpoint,
                status,
                body,
            });
        }

        let detail: VersionDetail =
            resp.json().await.map_err(|e| OriginError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let server_url = detail
            .downloads
            .and_then(|d| d.server)
            .map(|t| t.url)
            .ok_or_else(|| OriginError::MetadataMalformed {
                endpoint,
                reason: "missing downloads.server.url".into(),
            })?;

        Ok(ResolvedOrigin {
            url: server_url,
            build: None,
        })
    }

    /// All release-channel versions, newest first.
    ///
    /// Mirrors the catalog refresh: `type == "release"` entries sorted by
    /// `releaseTime` descending. Uses the same once-per-instance manifest
    /// fetch as [`VanillaClient::resolve`].
    pub async fn release_versions(&self) -> Result<Vec<ReleaseVersion>, OriginError> {
        let manifest = self.manifest().await?;

        let mut releases: Vec<ReleaseVersion> = manifest
            .versions
            .iter()
            .filter(|v| v.release_type == "release")
            .map(|v| ReleaseVersion {
                id: v.id.clone(),
                released_at: v.release_time,
            })
            .collect();
        releases.sort_by(|a, b| b.released_at.cmp(&a.released_at));
        Ok(releases)
    }
}
