//! Command implementations for publish-cli

pub mod manifest;
pub mod publish;
pub mod verify;

pub use manifest::run_manifest;
pub use publish::{run_publish, run_publish_dry_run};
pub use verify::{run_verify_file, run_verify_ref};

use std::path::Path;

use publish_core::PublishConfig;
use publish_fs::ConfigStore;

/// Load the publish configuration at `path`.
fn load_config(path: &Path) -> crate::error::Result<PublishConfig> {
    Ok(ConfigStore::new().load(path)?)
}
