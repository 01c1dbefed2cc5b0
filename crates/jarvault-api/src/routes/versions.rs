//! # Version Catalog Endpoint
//!
//! `GET /v1/versions` — list the known vanilla release versions from the
//! in-memory catalog. Never touches the network; an empty list simply
//! means the refresh task has not completed a fetch yet.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::VersionRecord;
use crate::state::AppState;

/// Version listing response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionListResponse {
    /// Known release versions, newest first.
    pub versions: Vec<VersionRecord>,
    /// Number of entries in `versions`.
    pub count: usize,
}

/// Build the versions router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/versions", get(list_versions))
}

/// GET /v1/versions — the current vanilla release catalog.
#[utoipa::path(
    get,
    path = "/v1/versions",
    responses(
        (status = 200, description = "Current vanilla release catalog", body = VersionListResponse),
    ),
    tag = "versions"
)]
pub async fn list_versions(State(state): State<AppState>) -> Json<VersionListResponse> {
    let versions = state.catalog.list();
    let count = versions.len();
    Json(VersionListResponse { versions, count })
}
