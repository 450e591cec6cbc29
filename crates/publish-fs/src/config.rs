//! Format-agnostic configuration loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Filesystem, Result};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore<F = crate::LocalFilesystem> {
    fs: F,
}

impl ConfigStore {
    /// Create a new ConfigStore reading from the local filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Filesystem> ConfigStore<F> {
    /// Create a ConfigStore over a custom filesystem.
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = self.fs.read_text(path)?;
        tracing::debug!(?path, format, "Loading config");

        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        })
    }
}
