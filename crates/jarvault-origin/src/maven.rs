//! URL templates for the Forge and NeoForge Maven repositories.
//!
//! Both platforms publish installers under a static Maven layout, so there
//! is no discovery call at all: the installer URL is a pure function of
//! (platform, version). The repository serves whatever filename the
//! template names; a version that does not exist upstream is only detected
//! when the download itself fails.

use url::Url;

use jarvault_core::Platform;

use crate::error::OriginError;
use crate::ResolvedOrigin;

/// Resolver for the Forge and NeoForge Maven layouts.
#[derive(Debug)]
pub struct MavenClient {
    forge_base: String,
    neoforge_base: String,
}

impl MavenClient {
    pub(crate) fn new(forge_base: Url, neoforge_base: Url) -> Self {
        Self {
            forge_base: forge_base.as_str().trim_end_matches('/').to_string(),
            neoforge_base: neoforge_base.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Build the installer download URL for a Forge or NeoForge version.
    ///
    /// Infallible for the two Maven platforms; calling it with any other
    /// platform is a programming error reported as malformed metadata
    /// rather than a panic.
    pub fn resolve(&self, platform: Platform, version: &str) -> Result<ResolvedOrigin, OriginError> {
        let base = match platform {
            Platform::Forge => &self.forge_base,
            Platform::NeoForge => &self.neoforge_base,
            other => {
                return Err(OriginError::MetadataMalformed {
                    endpoint: "maven".into(),
                    reason: format!("platform {other} has no maven layout"),
                })
            }
        };

        let url = format!(
            "{base}/{version}/{p}-{version}-installer.jar",
            p = platform.as_str()
        );

        Ok(ResolvedOrigin { url, build: None })
    }
}
