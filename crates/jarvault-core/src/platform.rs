//! # Platform Identifiers & Build Selection
//!
//! [`Platform`] enumerates the upstream distribution platforms jarvault can
//! serve. Each platform publishes version discovery differently (Mojang's
//! manifest-of-manifests, PaperMC's REST build list, the Forge/NeoForge
//! static Maven layout), but they all share this one identifier type.
//!
//! [`BuildSelector`] captures the caller's build choice for platforms with
//! a build concept (currently Paper only): either the latest published
//! build or a pinned build string used verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An upstream distribution platform for server jars.
///
/// Parsed case-insensitively from query strings; the canonical form is
/// lowercase and is also the leading path segment of every [`crate::JarKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Vanilla server jars published through Mojang's piston-meta manifest.
    Vanilla,
    /// PaperMC server jars published through the PaperMC v2 REST API.
    Paper,
    /// Forge installer jars served from the MinecraftForge Maven repository.
    Forge,
    /// NeoForge installer jars served from the NeoForged Maven repository.
    NeoForge,
}

/// All supported platforms, in canonical order.
pub const ALL_PLATFORMS: [Platform; 4] = [
    Platform::Vanilla,
    Platform::Paper,
    Platform::Forge,
    Platform::NeoForge,
];

impl Platform {
    /// Canonical lowercase identifier, as used in cache keys and API
    /// query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::Paper => "paper",
            Self::Forge => "forge",
            Self::NeoForge => "neoforge",
        }
    }

    /// Whether this platform has a build concept on top of versions.
    ///
    /// Only Paper publishes multiple builds per version; for the other
    /// platforms the build selector is ignored.
    pub fn has_builds(&self) -> bool {
        matches!(self, Self::Paper)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform string is not one of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported platform '{0}' (supported: vanilla, paper, forge, neoforge)")]
pub struct UnknownPlatform(
    /// The string that failed to parse.
    pub String,
);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vanilla" => Ok(Self::Vanilla),
            "paper" => Ok(Self::Paper),
            "forge" => Ok(Self::Forge),
            "neoforge" => Ok(Self::NeoForge),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// The caller's build choice for platforms that publish multiple builds
/// per version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSelector {
    /// Resolve to the newest published build at request time.
    Latest,
    /// Use the given build string verbatim, without validating it against
    /// the upstream build list. A nonexistent build surfaces as a download
    /// failure, not a resolution failure.
    Pinned(String),
}

impl BuildSelector {
    /// Parse a caller-supplied build parameter. `"latest"` (any case)
    /// selects [`BuildSelector::Latest`]; everything else is pinned.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("latest") {
            Self::Latest
        } else {
            Self::Pinned(s.to_string())
        }
    }
}

impl Default for BuildSelector {
    fn default() -> Self {
        Self::Latest
    }
}

impl fmt::Display for BuildSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Pinned(b) => f.write_str(b),
        }
    }
}
