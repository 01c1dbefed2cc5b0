//! Gateway tests against a wiremock S3 endpoint.
//!
//! The SDK is pointed at the mock server with path-style addressing, so
//! object operations hit `/{bucket}/{key}` and bucket operations hit
//! `/{bucket}`, the same shapes MinIO serves.

use std::io::Write;

use jarvault_core::JarKey;
use jarvault_store::{JarStore, StoreConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

fn store_for(server: &MockServer) -> JarStore {
    JarStore::new(&StoreConfig {
        bucket: "jars".into(),
        endpoint_url: server.uri().parse().unwrap(),
        region: "us-east-1".into(),
        access_key: "test-access".into(),
        secret_key: Zeroizing::new("test-secret".into()),
        force_path_style: true,
    })
}

#[tokio::test]
async fn exists_is_true_when_head_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Length", "0"))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert!(store.exists(&JarKey::vanilla("1.20.1")).await.unwrap());
}

#[tokio::test]
async fn exists_is_false_on_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert!(!store.exists(&JarKey::vanilla("1.20.1")).await.unwrap());
}

#[tokio::test]
async fn exists_propagates_store_failures_instead_of_reporting_absent() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars/vanilla/1.20.1/server.jar"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let err = store.exists(&JarKey::vanilla("1.20.1")).await.unwrap_err();
    assert!(
        matches!(err, jarvault_store::StoreError::Probe { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn upload_puts_the_spooled_file() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/jars/paper/1.20.1/build-196.jar"))
        .respond_with(ResponseTemplate::new(200).insert_header("ETag", "\"abc\""))
        .expect(1)
        .mount(&server)
        .await;

    let mut spool = tempfile::NamedTempFile::new().unwrap();
    spool.write_all(b"jar bytes").unwrap();

    let store = store_for(&server);
    store
        .upload(spool.path(), &JarKey::paper("1.20.1", "196"))
        .await
        .unwrap();
}

#[tokio::test]
async fn ensure_bucket_creates_when_missing() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server).ensure_bucket().await.unwrap();
}

#[tokio::test]
async fn ensure_bucket_is_a_noop_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    store_for(&server).ensure_bucket().await.unwrap();
}

#[tokio::test]
async fn ensure_bucket_fails_on_non_missing_errors() {
    let server = MockServer::start().await;

    // Permission denied is not "absent"; abort instead of creating.
    Mock::given(method("HEAD"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/jars"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = store_for(&server).ensure_bucket().await.unwrap_err();
    assert!(
        matches!(err, jarvault_store::StoreError::BucketInit { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn presign_embeds_key_and_expiry_without_touching_the_network() {
    // No mocks mounted: presigning is pure signature computation.
    let server = MockServer::start().await;

    let store = store_for(&server);
    let url = store
        .presign(&JarKey::vanilla("1.20.1"), 3600)
        .await
        .unwrap();

    assert!(url.contains("vanilla/1.20.1/server.jar"), "got: {url}");
    assert!(url.contains("X-Amz-Expires=3600"), "got: {url}");
    assert!(url.contains("X-Amz-Signature="), "got: {url}");
}
