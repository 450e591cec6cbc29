//! Filesystem abstraction for Agent Publisher
//!
//! Provides the filesystem collaborator used by the manifest pipeline and
//! format-agnostic loading of publish configuration files.

pub mod checksum;
pub mod config;
pub mod error;
pub mod fs;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fs::{Filesystem, LocalFilesystem};
