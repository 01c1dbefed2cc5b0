//! Origin resolution error types.

use jarvault_core::Platform;

/// Errors from upstream discovery calls.
///
/// Every variant means "the artifact could not be resolved"; callers map
/// the whole family to a not-found outcome. None of these indicate a fault
/// in jarvault itself.
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    /// HTTP transport error (connect failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// Logical endpoint the call targeted.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// Upstream returned a non-2xx status.
    #[error("origin {endpoint} returned {status}: {body}")]
    Api {
        /// Logical endpoint the call targeted.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// Logical endpoint the call targeted.
        endpoint: String,
        /// Underlying reqwest/serde error.
        source: reqwest::Error,
    },
    /// The requested version is not published by the platform.
    #[error("{platform} version '{version}' not found upstream")]
    VersionNotFound {
        /// Platform queried.
        platform: Platform,
        /// Version string the caller asked for.
        version: String,
    },
    /// A discovery document was missing an expected field.
    #[error("malformed metadata from {endpoint}: {reason}")]
    MetadataMalformed {
        /// Logical endpoint the document came from.
        endpoint: String,
        /// What was missing or wrong.
        reason: String,
    },
}
