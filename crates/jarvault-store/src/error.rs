//! Object store error types.
//!
//! The variants split along the line the cache engine cares about:
//! [`StoreError::BucketInit`] is a configuration failure fatal at startup,
//! while the per-operation variants mean the store (not the artifact) is
//! the problem and the request should abort rather than fall back to a
//! re-download.

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The bucket could not be verified or created for a reason other
    /// than "does not exist yet". Fatal at service initialization.
    #[error("bucket '{bucket}' could not be ensured: {reason}")]
    BucketInit {
        /// Bucket name.
        bucket: String,
        /// Underlying SDK error rendering.
        reason: String,
    },
    /// An existence probe failed with something other than not-found.
    /// Never reported as a cache miss: "absent" and "unreachable" stay
    /// distinct.
    #[error("existence probe for '{key}' failed: {reason}")]
    Probe {
        /// Object key probed.
        key: String,
        /// Underlying SDK error rendering.
        reason: String,
    },
    /// Upload of a spooled artifact failed.
    #[error("upload of '{key}' failed: {reason}")]
    Upload {
        /// Object key targeted.
        key: String,
        /// Underlying SDK error rendering.
        reason: String,
    },
    /// Presigned URL generation failed.
    #[error("presign for '{key}' failed: {reason}")]
    Presign {
        /// Object key targeted.
        key: String,
        /// Underlying SDK error rendering.
        reason: String,
    },
}
