use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use publish_fs::{Error, Filesystem, Result};

/// A filesystem call observed by [`RecordingFilesystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Exists(PathBuf),
    Size(PathBuf),
    ReadText(PathBuf),
}

/// In-memory [`Filesystem`] that records every call.
#[derive(Debug, Default)]
pub struct RecordingFilesystem {
    files: HashMap<PathBuf, String>,
    calls: Mutex<Vec<FsCall>>,
}

impl RecordingFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&FsCall) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: FsCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup(&self, path: &Path) -> Result<&String> {
        self.files.get(path).ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }
}

impl Filesystem for RecordingFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.record(FsCall::Exists(path.to_path_buf()));
        self.files.contains_key(path)
    }

    fn size(&self, path: &Path) -> Result<u64> {
        self.record(FsCall::Size(path.to_path_buf()));
        self.lookup(path).map(|content| content.len() as u64)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.record(FsCall::ReadText(path.to_path_buf()));
        self.lookup(path).cloned()
    }
}
