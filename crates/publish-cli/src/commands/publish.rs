//! Publish command implementation
//!
//! Uploads the documentation and the signed manifest envelope, then prints
//! the envelope's IPFS reference on stdout.

use std::path::Path;

use colored::Colorize;
use publish_core::{ManifestUploader, MemoryStore};
use publish_fs::LocalFilesystem;
use publish_ipfs::IpfsClient;

use super::load_config;
use crate::error::{CliError, Result};

/// Publish to the IPFS node at `ipfs_url`.
pub fn run_publish(config_path: &Path, image: &str, private_key: &str, ipfs_url: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let client = IpfsClient::new(ipfs_url)?;
    let uploader = ManifestUploader::new(config, LocalFilesystem::new(), client);

    let reference = uploader.upload(image, private_key)?;

    eprintln!(
        "{} Published manifest for {}",
        "OK".green().bold(),
        uploader.config().agent_name.cyan()
    );
    println!("{}", reference);
    Ok(())
}

/// Build and sign against an in-memory store; prints the envelope payload.
pub fn run_publish_dry_run(config_path: &Path, image: &str, private_key: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let uploader = ManifestUploader::new(config, LocalFilesystem::new(), MemoryStore::new());

    let reference = uploader.upload(image, private_key)?;
    let envelope = uploader
        .store()
        .get(&reference)
        .ok_or_else(|| CliError::user("dry run produced no envelope"))?;

    eprintln!(
        "{} Dry run, nothing uploaded (envelope {})",
        "--".yellow().bold(),
        reference.dimmed()
    );
    println!("{}", envelope);
    Ok(())
}
