//! Verify command implementation

use std::path::Path;

use colored::Colorize;
use publish_core::{VerifiedEnvelope, verify_envelope};
use publish_fs::{Filesystem, LocalFilesystem};
use publish_ipfs::IpfsClient;

use crate::error::Result;

/// Verify an envelope stored in a local file.
pub fn run_verify_file(path: &Path) -> Result<()> {
    let content = LocalFilesystem::new().read_text(path)?;
    report(verify_envelope(&content)?);
    Ok(())
}

/// Fetch an envelope from IPFS and verify it.
pub fn run_verify_ref(reference: &str, ipfs_url: &str) -> Result<()> {
    let content = IpfsClient::new(ipfs_url)?.cat(reference)?;
    report(verify_envelope(&content)?);
    Ok(())
}

fn report(verified: VerifiedEnvelope) {
    let manifest = &verified.manifest;
    eprintln!(
        "{} {} {} signed by {}",
        "OK".green().bold(),
        manifest.agent_id.cyan(),
        manifest.version,
        verified.signer
    );
    println!("{}", verified.signer);
}
