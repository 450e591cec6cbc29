//! Content-addressed store collaborator

use std::error::Error as StdError;
use std::fmt;
use std::sync::Mutex;

use publish_fs::checksum::compute_content_checksum;

/// Failure reported by a [`ContentStore`].
///
/// Wraps the store's own error and displays it unchanged so callers see the
/// store's message, not a wrapper.
#[derive(Debug)]
pub struct StoreError {
    source: Box<dyn StdError + Send + Sync>,
}

impl StoreError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The underlying store error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.source
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.source()
    }
}

/// Stores opaque content and returns its address.
pub trait ContentStore {
    /// Publish `content` and return the address it can be retrieved by.
    fn publish(&self, content: &str) -> Result<String, StoreError>;
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn publish(&self, content: &str) -> Result<String, StoreError> {
        (**self).publish(content)
    }
}

impl<S: ContentStore + ?Sized> ContentStore for Box<S> {
    fn publish(&self, content: &str) -> Result<String, StoreError> {
        (**self).publish(content)
    }
}

/// In-process [`ContentStore`] addressing content by SHA-256 checksum.
///
/// Keeps every publish in order, so it doubles as a dry-run sink.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content previously published under `address`.
    pub fn get(&self, address: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()?
            .iter()
            .find(|(stored, _)| stored == address)
            .map(|(_, content)| content.clone())
    }

    /// All publishes as `(address, content)` pairs, oldest first.
    pub fn published(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ContentStore for MemoryStore {
    fn publish(&self, content: &str) -> Result<String, StoreError> {
        let address = compute_content_checksum(content);
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new("memory store lock poisoned"))?;
        entries.push((address.clone(), content.to_string()));
        Ok(address)
    }
}
