//! # Cache-Key Scheme
//!
//! [`JarKey`] is the storage path identifying one artifact in the object
//! store. The key is derived deterministically from (platform, version,
//! resolved build), so it also serves as the cache's deduplication
//! identity: a key that exists in the bucket is a cache hit and must be
//! served with zero origin traffic.
//!
//! Key shapes:
//!
//! | Platform  | Shape                                            |
//! |-----------|--------------------------------------------------|
//! | Vanilla   | `vanilla/{version}/server.jar`                   |
//! | Paper     | `paper/{version}/build-{build}.jar`              |
//! | Forge     | `forge/{version}/forge-{version}-installer.jar`  |
//! | NeoForge  | `neoforge/{version}/neoforge-{version}-installer.jar` |
//!
//! Paper keys always carry a concrete build; a request for `latest` is
//! resolved to the newest published build before the key is formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::Platform;

/// Deterministic object-store path for one cached artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JarKey(String);

impl JarKey {
    /// Key for a Vanilla server jar.
    pub fn vanilla(version: &str) -> Self {
        Self(format!("vanilla/{version}/server.jar"))
    }

    /// Key for a Paper server jar at a concrete build.
    ///
    /// `build` must already be resolved; passing the literal string
    /// `latest` here would defeat deduplication, so resolution happens
    /// before key construction.
    pub fn paper(version: &str, build: &str) -> Self {
        Self(format!("paper/{version}/build-{build}.jar"))
    }

    /// Key for a Forge or NeoForge installer jar.
    ///
    /// The installer filename mirrors the upstream Maven artifact name,
    /// so the tail of the key is also the filename the origin serves.
    pub fn installer(platform: Platform, version: &str) -> Self {
        let p = platform.as_str();
        Self(format!("{p}/{version}/{p}-{version}-installer.jar"))
    }

    /// The key as a storage path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, yielding the path string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// A filesystem-safe rendering of the key, used to derive spool file
    /// names for in-flight downloads.
    pub fn spool_stem(&self) -> String {
        self.0.replace('/', "_")
    }
}

impl fmt::Display for JarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JarKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JarKey> for String {
    fn from(key: JarKey) -> Self {
        key.0
    }
}
