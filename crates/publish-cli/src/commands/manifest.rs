//! Manifest preview command

use std::path::Path;

use publish_core::{ManifestUploader, MemoryStore};
use publish_fs::LocalFilesystem;

use super::load_config;
use crate::error::Result;

/// Print the unsigned manifest as pretty JSON.
///
/// The documentation goes to an in-memory store, so its reference is a
/// local checksum rather than an IPFS CID.
pub fn run_manifest(config_path: &Path, image: &str, private_key: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let uploader = ManifestUploader::new(config, LocalFilesystem::new(), MemoryStore::new());

    let manifest = uploader.build_manifest(image, private_key)?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
