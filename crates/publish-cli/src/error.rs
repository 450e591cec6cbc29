//! Error types for publish-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from publish-core
    #[error(transparent)]
    Core(#[from] publish_core::Error),

    /// Error from publish-fs
    #[error(transparent)]
    Fs(#[from] publish_fs::Error),

    /// Error from publish-ipfs
    #[error(transparent)]
    Ipfs(#[from] publish_ipfs::Error),

    /// Output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
