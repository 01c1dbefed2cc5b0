//! # Vanilla Version Catalog
//!
//! In-memory listing of vanilla release versions, refreshed periodically
//! from the Mojang manifest. Serves `GET /v1/versions` without touching
//! the network on the request path.
//!
//! The lock is `parking_lot`, not `tokio::sync`; it is never held across
//! an `.await` point (replace and list are both synchronous swaps/clones).
//!
//! The refresh task builds a **fresh origin client each tick**: the
//! resolver's manifest cache is deliberately once-per-instance, so reusing
//! one client here would pin the catalog to the first fetch forever.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use jarvault_origin::{OriginClient, OriginConfig, OriginError};

/// One vanilla release version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionRecord {
    /// Version id, e.g. `1.20.1`.
    pub id: String,
    /// Upstream publication time, if known.
    pub released_at: Option<DateTime<Utc>>,
}

/// Thread-safe, cloneable in-memory version listing.
#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    versions: Arc<RwLock<Vec<VersionRecord>>>,
}

impl VersionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole listing with a freshly fetched one.
    pub fn replace(&self, versions: Vec<VersionRecord>) {
        *self.versions.write() = versions;
    }

    /// All known release versions, newest first.
    pub fn list(&self) -> Vec<VersionRecord> {
        self.versions.read().clone()
    }

    /// Number of known versions.
    pub fn len(&self) -> usize {
        self.versions.read().len()
    }

    /// Whether the catalog has been populated yet.
    pub fn is_empty(&self) -> bool {
        self.versions.read().is_empty()
    }
}

/// Fetch the release list once and swap it into the catalog.
///
/// A failed fetch leaves the previous listing intact.
pub async fn refresh_catalog(
    origin: &OriginClient,
    catalog: &VersionCatalog,
) -> Result<usize, OriginError> {
    let releases = origin.vanilla().release_versions().await?;
    let count = releases.len();
    catalog.replace(
        releases
            .into_iter()
            .map(|r| VersionRecord {
                id: r.id,
                released_at: r.released_at,
            })
            .collect(),
    );
    Ok(count)
}

/// Spawn the periodic refresh task. The first tick fires immediately so
/// the catalog is populated shortly after startup.
pub fn spawn_refresher(
    origin_config: OriginConfig,
    catalog: VersionCatalog,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;

            // Fresh client per tick; see module docs.
            let origin = match OriginClient::new(origin_config.clone()) {
                Ok(client) => client,
                Err(e) => {
                    tracing::warn!("catalog refresh could not build origin client: {e}");
                    continue;
                }
            };

            match refresh_catalog(&origin, &catalog).await {
                Ok(count) => {
                    tracing::info!(count, "refreshed vanilla version catalog");
                }
                Err(e) => {
                    tracing::warn!("vanilla catalog refresh failed, keeping previous listing: {e}");
                }
            }
        }
    })
}
