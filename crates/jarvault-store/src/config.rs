//! Object store configuration.
//!
//! Bucket name, endpoint, and static credentials for the S3-compatible
//! backend. Supplied via environment variables; the credentials are held
//! in [`zeroize::Zeroizing`] storage and redacted from `Debug` output.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for the object store connection.
///
/// Custom `Debug` implementation redacts the secret key to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct StoreConfig {
    /// Bucket holding all cached artifacts.
    pub bucket: String,
    /// Endpoint URL of the S3-compatible store (e.g. `http://minio:9000`).
    pub endpoint_url: Url,
    /// Signing region. MinIO accepts any value; AWS requires a real one.
    pub region: String,
    /// Static access key id.
    pub access_key: String,
    /// Static secret access key.
    pub secret_key: Zeroizing<String>,
    /// Use path-style addressing (`endpoint/bucket/key`). Required for
    /// MinIO and most self-hosted stores.
    pub force_path_style: bool,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("bucket", &self.bucket)
            .field("endpoint_url", &self.endpoint_url)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `JARVAULT_S3_BUCKET` (required)
    /// - `JARVAULT_S3_ENDPOINT` (required)
    /// - `JARVAULT_S3_REGION` (default: `us-east-1`)
    /// - `JARVAULT_S3_ACCESS_KEY` (required)
    /// - `JARVAULT_S3_SECRET_KEY` (required)
    /// - `JARVAULT_S3_PATH_STYLE` (default: `true`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = required("JARVAULT_S3_BUCKET")?;
        let endpoint_raw = required("JARVAULT_S3_ENDPOINT")?;
        let endpoint_url = Url::parse(&endpoint_raw).map_err(|e| {
            ConfigError::InvalidUrl("JARVAULT_S3_ENDPOINT".to_string(), e.to_string())
        })?;

        Ok(Self {
            bucket,
            endpoint_url,
            region: std::env::var("JARVAULT_S3_REGION").unwrap_or_else(|_| "us-east-1".into()),
            access_key: required("JARVAULT_S3_ACCESS_KEY")?,
            secret_key: Zeroizing::new(required("JARVAULT_S3_SECRET_KEY")?),
            force_path_style: std::env::var("JARVAULT_S3_PATH_STYLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))
}

/// Errors loading store configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("{0} environment variable is required")]
    MissingVar(String),
    /// An environment variable held a value that does not parse as a URL.
    #[error("invalid URL in {0}: {1}")]
    InvalidUrl(String, String),
}
