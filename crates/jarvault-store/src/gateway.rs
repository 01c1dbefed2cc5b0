//! The S3 gateway itself.

use std::path::Path;
use std::time::Duration;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;

use jarvault_core::JarKey;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Gateway over one bucket of an S3-compatible object store.
///
/// Cheap to clone; the underlying SDK client is reference-counted.
#[derive(Debug, Clone)]
pub struct JarStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl JarStore {
    /// Build a gateway from configuration.
    ///
    /// SDK-internal retries are disabled: uploads are single-shot by
    /// contract and probe errors must surface immediately rather than
    /// after a backoff cycle.
    pub fn new(config: &StoreConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.as_str().to_string(),
            None,
            None,
            "jarvault-static",
        );

        let sdk_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url.as_str())
            .credentials_provider(credentials)
            .force_path_style(config.force_path_style)
            .retry_config(aws_sdk_s3::config::retry::RetryConfig::disabled())
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(sdk_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Verify the bucket exists, creating it if absent. Idempotent.
    ///
    /// A concurrent creator winning the race is fine (already-owned /
    /// already-exists both count as success); anything else is a
    /// [`StoreError::BucketInit`] and should abort startup.
    pub async fn ensure_bucket(&self) -> Result<(), StoreError> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                tracing::debug!(bucket = %self.bucket, "bucket present");
                Ok(())
            }
            Err(err) => {
                let missing = err
                    .as_service_error()
                    .is_some_and(|e| e.is_not_found());
                if !missing {
                    return Err(StoreError::BucketInit {
                        bucket: self.bucket.clone(),
                        reason: DisplayErrorContext(&err).to_string(),
                    });
                }

                match self.client.create_bucket().bucket(&self.bucket).send().await {
                    Ok(_) => {
                        tracing::info!(bucket = %self.bucket, "created bucket");
                        Ok(())
                    }
                    Err(err) => {
                        let benign = err.as_service_error().is_some_and(|e| {
                            e.is_bucket_already_owned_by_you() || e.is_bucket_already_exists()
                        });
                        if benign {
                            Ok(())
                        } else {
                            Err(StoreError::BucketInit {
                                bucket: self.bucket.clone(),
                                reason: DisplayErrorContext(&err).to_string(),
                            })
                        }
                    }
                }
            }
        }
    }

    /// Probe whether an artifact is already cached.
    ///
    /// Not-found is `Ok(false)`. Every other failure (auth, network,
    /// 5xx) is an `Err`; treating those as "absent" would trigger
    /// pointless re-downloads while the store is unhealthy.
    pub async fn exists(&self, key: &JarKey) -> Result<bool, StoreError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                if err.as_service_error().is_some_and(|e| e.is_not_found()) {
                    Ok(false)
                } else {
                    Err(StoreError::Probe {
                        key: key.to_string(),
                        reason: DisplayErrorContext(&err).to_string(),
                    })
                }
            }
        }
    }

    /// Upload a spooled artifact file to its key. Single shot, streamed
    /// from disk; never buffers the artifact in memory.
    pub async fn upload(&self, path: &Path, key: &JarKey) -> Result<(), StoreError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StoreError::Upload {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(body)
            .send()
            .await
            .map_err(|err| StoreError::Upload {
                key: key.to_string(),
                reason: DisplayErrorContext(&err).to_string(),
            })?;

        tracing::info!(key = %key, "uploaded artifact");
        Ok(())
    }

    /// Generate a presigned GET URL for a cached artifact.
    ///
    /// The URL is a bearer capability scoped to this single key; validity
    /// is bounded by `ttl_secs`.
    pub async fn presign(&self, key: &JarKey, ttl_secs: u64) -> Result<String, StoreError> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(ttl_secs)).map_err(
            |e| StoreError::Presign {
                key: key.to_string(),
                reason: e.to_string(),
            },
        )?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .presigned(presigning)
            .await
            .map_err(|err| StoreError::Presign {
                key: key.to_string(),
                reason: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(request.uri().to_string())
    }
}
