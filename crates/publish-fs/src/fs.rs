//! The filesystem collaborator
//!
//! The manifest pipeline only ever asks three questions of the filesystem:
//! does a path exist, how large is it, and what text does it hold. Keeping
//! them behind a trait lets tests count calls and fake file contents.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read-only filesystem operations needed to publish documentation.
pub trait Filesystem {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Size of the file at `path` in bytes.
    fn size(&self, path: &Path) -> Result<u64>;

    /// Read the file at `path` as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String>;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn size(&self, path: &Path) -> Result<u64> {
        (**self).size(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn size(&self, path: &Path) -> Result<u64> {
        fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|e| Error::io(path, e))
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_reports_byte_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "# agent").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.exists(&path));
        assert_eq!(fs.size(&path).unwrap(), 7);
        assert_eq!(fs.read_text(&path).unwrap(), "# agent");
    }

    #[test]
    fn size_of_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        let err = LocalFilesystem::new().size(&path).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
