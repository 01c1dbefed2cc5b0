//! # jarvault-api — Axum HTTP service for jarvault
//!
//! Thin adapter in front of the cache engine: query-parameter parsing,
//! HTTP status mapping, and nothing else. The engineering lives in
//! `jarvault-engine`; this crate translates its outcomes into responses.
//!
//! ## API Surface
//!
//! | Route                | Module                | Purpose                         |
//! |----------------------|-----------------------|---------------------------------|
//! | `/v1/jar/download`   | [`routes::jar`]       | Cache + presigned download URL  |
//! | `/v1/versions`       | [`routes::versions`]  | Vanilla release catalog         |
//! | `/health/*`          | (here)                | Liveness/readiness probes       |
//! | `/openapi.json`      | [`openapi`]           | Generated OpenAPI document      |

pub mod catalog;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted outside the traced API router so probe
/// traffic stays out of the request logs.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::jar::router())
        .merge(routes::versions::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
