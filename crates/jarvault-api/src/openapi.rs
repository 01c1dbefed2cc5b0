//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the jarvault API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "jarvault API",
        version = "0.1.0",
        description = "Cache-and-serve service for game-server jar artifacts: Vanilla, Paper, Forge, and NeoForge.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::jar::download_jar,
        crate::routes::versions::list_versions,
    ),
    components(schemas(
        crate::routes::jar::JarDownloadResponse,
        crate::routes::versions::VersionListResponse,
        crate::catalog::VersionRecord,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "jar", description = "Artifact caching and presigned downloads"),
        (name = "versions", description = "Vanilla release catalog"),
    )
)]
pub struct ApiDoc;

/// Router serving the generated document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
