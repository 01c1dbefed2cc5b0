//! Contract tests for the Vanilla resolver against the piston-meta protocol.
//!
//! These tests use wiremock to simulate the live Mojang endpoints: the
//! version manifest and the per-version detail documents it points at.

use jarvault_core::{BuildSelector, Platform};
use jarvault_origin::{OriginClient, OriginConfig, OriginError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn manifest_body(server: &MockServer) -> serde_json::Value {
    serde_json::json!({
        "latest": {"release": "1.20.1", "snapshot": "23w31a"},
        "versions": [
            {
                "id": "23w31a",
                "type": "snapshot",
                "url": format!("{}/v1/packages/aaa/23w31a.json", server.uri()),
                "releaseTime": "2023-08-01T10:03:13+00:00"
            },
            {
                "id": "1.20.1",
                "type": "release",
                "url": format!("{}/v1/packages/bbb/1.20.1.json", server.uri()),
                "releaseTime": "2023-06-12T13:25:51+00:00"
            },
            {
                "id": "1.19.4",
                "type": "release",
                "url": format!("{}/v1/packages/ccc/1.19.4.json", server.uri()),
                "releaseTime": "2023-03-14T12:56:18+00:00"
            }
        ]
    })
}

async fn origin_for(server: &MockServer) -> OriginClient {
    let base = server.uri().parse().unwrap();
    OriginClient::new(OriginConfig::for_base(&base).unwrap()).unwrap()
}

#[tokio::test]
async fn resolves_server_jar_url_from_detail_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/packages/bbb/1.20.1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "downloads": {
                "client": {"url": "https://example.invalid/client.jar"},
                "server": {"url": "https://launcher.example/1.20.1/server.jar"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    let resolved = origin
        .resolve(Platform::Vanilla, "1.20.1", &BuildSelector::Latest)
        .await
        .unwrap();

    assert_eq!(resolved.url, "https://launcher.example/1.20.1/server.jar");
    assert_eq!(resolved.build, None);
}

#[tokio::test]
async fn unknown_version_is_version_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    let err = origin
        .resolve(Platform::Vanilla, "9.99.9", &BuildSelector::Latest)
        .await
        .unwrap_err();

    match err {
        OriginError::VersionNotFound { platform, version } => {
            assert_eq!(platform, Platform::Vanilla);
            assert_eq!(version, "9.99.9");
        }
        other => panic!("expected VersionNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn manifest_is_fetched_once_per_client_instance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .expect(1)
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;

    // Two lookups plus a release listing: one manifest fetch total.
    let _ = origin
        .resolve(Platform::Vanilla, "9.99.9", &BuildSelector::Latest)
        .await;
    let _ = origin
        .resolve(Platform::Vanilla, "8.88.8", &BuildSelector::Latest)
        .await;
    let releases = origin.vanilla().release_versions().await.unwrap();
    assert_eq!(releases.len(), 2);
}

#[tokio::test]
async fn detail_without_server_download_is_malformed_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .mount(&server)
        .await;

    // Old versions predate server downloads: the detail document exists
    // but has no downloads.server entry.
    Mock::given(method("GET"))
        .and(path("/v1/packages/ccc/1.19.4.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "downloads": {
                "client": {"url": "https://example.invalid/client.jar"}
            }
        })))
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    let err = origin
        .resolve(Platform::Vanilla, "1.19.4", &BuildSelector::Latest)
        .await
        .unwrap_err();

    match err {
        OriginError::MetadataMalformed { reason, .. } => {
            assert!(reason.contains("downloads.server"), "got: {reason}");
        }
        other => panic!("expected MetadataMalformed, got: {other:?}"),
    }
}

#[tokio::test]
async fn manifest_server_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("meta is down"))
        .expect(1)
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    let err = origin
        .resolve(Platform::Vanilla, "1.20.1", &BuildSelector::Latest)
        .await
        .unwrap_err();

    match err {
        OriginError::Api { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("meta is down"));
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn failed_manifest_fetch_is_retried_by_the_next_request() {
    let server = MockServer::start().await;

    // First request sees a 500; the cell stays empty, so the second
    // request fetches again and succeeds.
    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    assert!(origin.vanilla().release_versions().await.is_err());

    let releases = origin.vanilla().release_versions().await.unwrap();
    assert_eq!(releases[0].id, "1.20.1");
}

#[tokio::test]
async fn release_versions_filters_snapshots_and_sorts_newest_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc/game/version_manifest_v2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(&server)))
        .mount(&server)
        .await;

    let origin = origin_for(&server).await;
    let releases = origin.vanilla().release_versions().await.unwrap();

    let ids: Vec<&str> = releases.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1.20.1", "1.19.4"], "snapshots excluded, newest first");
}
