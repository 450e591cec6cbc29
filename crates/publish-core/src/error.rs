//! Error types for publish-core

use std::path::PathBuf;

use crate::signer::SignerError;
use crate::store::StoreError;

/// Result type for publish-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, signing or publishing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured documentation file does not exist
    #[error("documentation file {} not found", .path.display())]
    DocumentationNotFound { path: PathBuf },

    /// The configured documentation file exists but is empty
    #[error("documentation file {} cannot be empty", .path.display())]
    DocumentationEmpty { path: PathBuf },

    /// The content-addressed store rejected a publish
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The signing primitive failed
    #[error(transparent)]
    Signing(#[from] SignerError),

    /// Filesystem error from publish-fs
    #[error(transparent)]
    Fs(#[from] publish_fs::Error),

    /// Manifest or envelope could not be serialized
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A signed envelope is structurally invalid
    #[error("invalid signed envelope: {reason}")]
    InvalidEnvelope { reason: String },

    /// The envelope signature was not produced by the manifest's `from` address
    #[error("manifest claims signer {expected} but signature recovers {recovered}")]
    SignerMismatch { expected: String, recovered: String },
}

impl Error {
    pub fn invalid_envelope(reason: impl Into<String>) -> Self {
        Self::InvalidEnvelope {
            reason: reason.into(),
        }
    }
}
