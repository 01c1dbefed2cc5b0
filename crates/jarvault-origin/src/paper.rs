//! Typed client for the PaperMC v2 project API.
//!
//! Discovery is a single call: `GET {base}/versions/{version}` returns the
//! ordered (ascending) list of build numbers for that version. The
//! download URL is then a deterministic template over (version, build);
//! no second discovery hop.
//!
//! A pinned build is used verbatim without checking it against the list;
//! an invalid pin surfaces as a download failure later, not a resolution
//! failure.

use serde::Deserialize;
use url::Url;

use jarvault_core::{BuildSelector, Platform};

use crate::error::OriginError;
use crate::ResolvedOrigin;

/// Builds listing for one version, as returned by the PaperMC API.
#[derive(Debug, Deserialize)]
struct VersionBuilds {
    /// Build numbers in ascending order; the last element is the newest.
    #[serde(default)]
    builds: Vec<u64>,
}

/// Client for the PaperMC v2 project API.
#[derive(Debug)]
pub struct PaperClient {
    http: reqwest::Client,
    base_url: String,
}

impl PaperClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        // Trim so path templates below compose the same for root and
        // non-root bases.
        let base_url = base_url.as_str().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Resolve the download URL and concrete build for a version.
    ///
    /// `Latest` resolves to the newest (last) listed build. A pinned build
    /// skips validation and is templated into the URL verbatim.
    pub async fn resolve(
        &self,
        version: &str,
        build: &BuildSelector,
    ) -> Result<ResolvedOrigin, OriginError> {
        let endpoint = format!("GET /versions/{version}");
        let url = format!("{}/versions/{version}", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
            .await
            .map_err(|e| OriginError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(OriginError::VersionNotFound {
                platform: Platform::Paper,
                version: version.to_string(),
            });
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(OriginError::Api {
                endpoint,
                status,
                body,
            });
        }

        let listing: VersionBuilds =
            resp.json().await.map_err(|e| OriginError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let resolved_build = match build {
            BuildSelector::Latest => listing
                .builds
                .last()
                .map(|b| b.to_string())
                .ok_or_else(|| OriginError::VersionNotFound {
                    platform: Platform::Paper,
                    version: version.to_string(),
                })?,
            BuildSelector::Pinned(b) => {
                // An empty builds list still means the version itself is
                // unknown upstream, pinned or not.
                if listing.builds.is_empty() {
                    return Err(OriginError::VersionNotFound {
                        platform: Platform::Paper,
                        version: version.to_string(),
                    });
                }
                b.clone()
            }
        };

        let download_url = format!(
            "{}/versions/{version}/builds/{resolved_build}/download",
            self.base_url
        );

        Ok(ResolvedOrigin {
            url: download_url,
            build: Some(resolved_build),
        })
    }
}
