//! Router-level tests driving the service with `tower::ServiceExt::oneshot`
//! against a wiremock backend playing both origin and object store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

use jarvault_api::catalog::{VersionCatalog, VersionRecord};
use jarvault_api::state::AppState;
use jarvault_engine::{EngineConfig, JarCache};
use jarvault_origin::{OriginClient, OriginConfig};
use jarvault_store::{JarStore, StoreConfig};

/// App state wired entirely to one mock server. The tempdir owns the
/// spool directory and must outlive the state.
fn state_for(server: &MockServer) -> (AppState, tempfile::TempDir) {
    let base: url::Url = server.uri().parse().unwrap();
    let origin = OriginClient::new(OriginConfig::for_base(&base).unwrap()).unwrap();
    let store = JarStore::new(&StoreConfig {
        bucket: "jars".into(),
        endpoint_url: base,
        region: "us-east-1".into(),
        access_key: "test-access".into(),
        secret_key: Zeroizing::new("test-secret".into()),
        force_path_style: true,
    });
    let spool = tempfile::tempdir().unwrap();
    let engine = JarCache::new(
        origin,
        store,
        EngineConfig {
            spool_dir: spool.path().to_path_buf(),
            download_timeout_secs: 30,
        },
    )
    .unwrap();

    (
        AppState {
            engine: Arc::new(engine),
            catalog: VersionCatalog::new(),
        },
        spool,
    )
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn missing_parameters_are_a_400() {
    let server = MockServer::start().await;
    let (state, _spool) = state_for(&server);

    let (status, body) = get(jarvault_api::app(state), "/v1/jar/download?version=1.20.1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("example"));
}

#[tokio::test]
async fn unknown_platform_is_a_400_with_zero_network_calls() {
    let server = MockServer::start().await;

    // Any traffic at all fails the test.
    Mock::given(method("HEAD"))
        .and(wiremock::matchers::path_regex(".*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::path_regex(".*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (state, _spool) = state_for(&server);
    let (status, body) = get(
        jarvault_api::app(state),
        "/v1/jar/download?platform=bukkit&version=1.20.1",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("bukkit"));
}

#[tokio::test]
async fn cached_artifact_returns_key_and_presigned_url() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (state, _spool) = state_for(&server);
    // Case-insensitive platform parsing on the way in.
    let (status, body) = get(
        jarvault_api::app(state),
        "/v1/jar/download?platform=Vanilla&version=1.20.1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "vanilla");
    assert_eq!(body["version"], "1.20.1");
    assert_eq!(body["s3_key"], "vanilla/1.20.1/server.jar");
    let url = body["download_url"].as_str().unwrap();
    assert!(url.contains("vanilla/1.20.1/server.jar"), "got: {url}");
    assert!(url.contains("X-Amz-Expires=3600"), "got: {url}");
}

#[tokio::test]
async fn unresolvable_artifact_is_a_404() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (state, _spool) = state_for(&server);
    let (status, body) = get(
        jarvault_api::app(state),
        "/v1/jar/download?platform=vanilla&version=1.20.1",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn broken_store_is_a_500_with_details_suppressed() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (state, _spool) = state_for(&server);
    let (status, body) = get(
        jarvault_api::app(state),
        "/v1/jar/download?platform=vanilla&version=1.20.1",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn versions_endpoint_serves_the_catalog() {
    let server = MockServer::start().await;
    let (state, _spool) = state_for(&server);

    state.catalog.replace(vec![
        VersionRecord {
            id: "1.20.1".into(),
            released_at: None,
        },
        VersionRecord {
            id: "1.19.4".into(),
            released_at: None,
        },
    ]);

    let (status, body) = get(jarvault_api::app(state), "/v1/versions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["versions"][0]["id"], "1.20.1");
}

#[tokio::test]
async fn versions_endpoint_is_empty_before_first_refresh() {
    let server = MockServer::start().await;
    let (state, _spool) = state_for(&server);

    let (status, body) = get(jarvault_api::app(state), "/v1/versions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn health_probes_respond_without_state() {
    let server = MockServer::start().await;
    let (state, _spool) = state_for(&server);
    let app = jarvault_api::app(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_lists_the_routes() {
    let server = MockServer::start().await;
    let (state, _spool) = state_for(&server);

    let (status, body) = get(jarvault_api::app(state), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/v1/jar/download"].is_object());
    assert!(body["paths"]["/v1/versions"].is_object());
}
