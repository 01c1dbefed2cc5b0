//! Origin client configuration.
//!
//! Base URLs for each upstream discovery protocol. Defaults point to the
//! live production endpoints. Override via environment variables for
//! staging or wiremock-backed tests.

use url::Url;

/// Configuration for connecting to the upstream distribution platforms.
#[derive(Debug, Clone)]
pub struct OriginConfig {
    /// Mojang piston-meta version manifest.
    /// Default: <https://piston-meta.mojang.com/mc/game/version_manifest_v2.json>
    pub mojang_manifest_url: Url,
    /// PaperMC project API root for the `paper` project.
    /// Default: <https://api.papermc.io/v2/projects/paper>
    pub paper_api_url: Url,
    /// MinecraftForge Maven group directory for `forge`.
    /// Default: <https://maven.minecraftforge.net/net/minecraftforge/forge>
    pub forge_maven_url: Url,
    /// NeoForged Maven group directory for `neoforge`.
    /// Default: <https://maven.neoforged.net/releases/net/neoforged/neoforge>
    pub neoforge_maven_url: Url,
    /// Timeout for discovery calls, in seconds. Discovery documents are
    /// small JSON bodies; this is deliberately much shorter than the
    /// artifact download timeout configured on the engine.
    pub discovery_timeout_secs: u64,
}

const DEFAULT_MOJANG_MANIFEST: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";
const DEFAULT_PAPER_API: &str = "https://api.papermc.io/v2/projects/paper";
const DEFAULT_FORGE_MAVEN: &str = "https://maven.minecraftforge.net/net/minecraftforge/forge";
const DEFAULT_NEOFORGE_MAVEN: &str =
    "https://maven.neoforged.net/releases/net/neoforged/neoforge";

impl OriginConfig {
    /// Load configuration from environment variables, falling back to the
    /// production defaults.
    ///
    /// Variables:
    /// - `JARVAULT_MOJANG_MANIFEST_URL`
    /// - `JARVAULT_PAPER_API_URL`
    /// - `JARVAULT_FORGE_MAVEN_URL`
    /// - `JARVAULT_NEOFORGE_MAVEN_URL`
    /// - `JARVAULT_DISCOVERY_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mojang_manifest_url: env_url("JARVAULT_MOJANG_MANIFEST_URL", DEFAULT_MOJANG_MANIFEST)?,
            paper_api_url: env_url("JARVAULT_PAPER_API_URL", DEFAULT_PAPER_API)?,
            forge_maven_url: env_url("JARVAULT_FORGE_MAVEN_URL", DEFAULT_FORGE_MAVEN)?,
            neoforge_maven_url: env_url("JARVAULT_NEOFORGE_MAVEN_URL", DEFAULT_NEOFORGE_MAVEN)?,
            discovery_timeout_secs: std::env::var("JARVAULT_DISCOVERY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Point every upstream at one base URL. Intended for tests that mount
    /// all discovery routes on a single wiremock server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the base cannot be joined
    /// with the fixed route suffixes (does not occur for well-formed
    /// `http(s)` bases).
    pub fn for_base(base: &Url) -> Result<Self, ConfigError> {
        let join = |path: &str| -> Result<Url, ConfigError> {
            let trimmed = base.as_str().trim_end_matches('/');
            Url::parse(&format!("{trimmed}{path}"))
                .map_err(|e| ConfigError::InvalidUrl(base.as_str().to_string(), e.to_string()))
        };
        Ok(Self {
            mojang_manifest_url: join("/mc/game/version_manifest_v2.json")?,
            paper_api_url: join("/v2/projects/paper")?,
            forge_maven_url: join("/maven/forge")?,
            neoforge_maven_url: join("/maven/neoforge")?,
            discovery_timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Errors loading origin configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse as a URL.
    #[error("invalid URL in {0}: {1}")]
    InvalidUrl(String, String),
}
