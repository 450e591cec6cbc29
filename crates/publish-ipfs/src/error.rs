//! Error types for publish-ipfs

/// Result type for publish-ipfs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors talking to an IPFS node
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-success status
    #[error("IPFS node returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The node answered with a body we could not understand
    #[error("unexpected response from {url}: {message}")]
    Response { url: String, message: String },
}
