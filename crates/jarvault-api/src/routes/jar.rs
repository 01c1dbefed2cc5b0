//! # Jar Download Endpoint
//!
//! `GET /v1/jar/download?platform=&version=&build=` — ensure the
//! requested artifact is cached in the object store, then return a
//! presigned URL the client consumes directly from storage. The artifact
//! bytes never flow through this service on the response path.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use jarvault_core::{BuildSelector, Platform};

use crate::error::AppError;
use crate::state::AppState;

/// Presigned URLs are valid for one hour.
const DOWNLOAD_TTL_SECS: u64 = 3600;

/// Query parameters for the download endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JarDownloadQuery {
    /// Platform: one of `vanilla`, `paper`, `forge`, `neoforge`
    /// (case-insensitive).
    pub platform: Option<String>,
    /// Version string, e.g. `1.20.1`.
    pub version: Option<String>,
    /// Build number, or `latest` (default). Only meaningful for Paper.
    pub build: Option<String>,
}

/// Successful download response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JarDownloadResponse {
    /// Canonical platform identifier.
    pub platform: String,
    /// Requested version.
    pub version: String,
    /// Cache key the artifact is stored under.
    pub s3_key: String,
    /// Presigned URL for direct download from the object store.
    pub download_url: String,
    /// Human-readable usage hint.
    pub message: String,
}

/// Build the jar router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/jar/download", get(download_jar))
}

/// GET /v1/jar/download — ensure the artifact is cached and presign it.
#[utoipa::path(
    get,
    path = "/v1/jar/download",
    params(JarDownloadQuery),
    responses(
        (status = 200, description = "Artifact cached, presigned URL issued", body = JarDownloadResponse),
        (status = 400, description = "Missing or invalid parameters", body = crate::error::ErrorBody),
        (status = 404, description = "Artifact could not be found or cached", body = crate::error::ErrorBody),
        (status = 500, description = "Object store unavailable", body = crate::error::ErrorBody),
    ),
    tag = "jar"
)]
pub async fn download_jar(
    State(state): State<AppState>,
    Query(query): Query<JarDownloadQuery>,
) -> Result<Json<JarDownloadResponse>, AppError> {
    let (Some(platform_raw), Some(version)) = (query.platform, query.version) else {
        return Err(AppError::BadRequest(
            "missing required parameters (example: /v1/jar/download?platform=paper&version=1.20.1)"
                .into(),
        ));
    };

    let platform: Platform = platform_raw.parse()?;
    let build = BuildSelector::parse(query.build.as_deref().unwrap_or("latest"));

    let key = state
        .engine
        .ensure_jar(platform, &version, &build)
        .await
        .map_err(|e| {
            tracing::warn!(%platform, version, "jar request failed: {e}");
            AppError::from(e)
        })?;

    let download_url = state.engine.direct_url(&key, DOWNLOAD_TTL_SECS).await?;

    Ok(Json(JarDownloadResponse {
        platform: platform.as_str().to_string(),
        version,
        s3_key: key.into_string(),
        download_url,
        message: "Use 'download_url' to fetch the jar directly from storage. Link is valid for 1 hour.".into(),
    }))
}
