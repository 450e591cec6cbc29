//! Build-time publish configuration
//!
//! Everything that stays fixed across publishes of one agent lives here.
//! The per-call inputs (image reference and private key) are deliberately
//! not part of this struct and never appear in config files.
//!
//! # Example TOML
//!
//! ```toml
//! agent_name = "my-agent"
//! display_name = "My Agent"
//! description = "Detects large transfers"
//! agent_id = "0x8a9f"
//! version = "0.1.0"
//! documentation = "README.md"
//! cli_version = "0.2.0"
//! chain_ids = [1, 137]
//!
//! [chain_settings.default]
//! shards = 1
//! target = 1
//!
//! [chain_settings."137"]
//! shards = "2"
//! targets = 3
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::PUBLISHER_NAME;
use crate::chain_settings::RawChainSettings;

/// Configuration for publishing one agent's manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Machine name of the agent; written to the manifest's `agentId` field.
    pub agent_name: String,
    /// Human-readable name; written to `name`.
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    /// Agent identifier; written to the manifest's `agentIdHash` field.
    pub agent_id: String,
    pub version: String,
    /// Path of the documentation file published alongside the manifest.
    pub documentation: PathBuf,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub promo_url: Option<String>,
    /// Version of the publishing tool, recorded in `publishedFrom`.
    pub cli_version: String,
    /// Chains the agent runs on, in the order given.
    #[serde(default)]
    pub chain_ids: Vec<u64>,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub chain_settings: Option<RawChainSettings>,
}

impl PublishConfig {
    /// Value of the manifest's `publishedFrom` field.
    pub fn published_from(&self) -> String {
        format!("{} {}", PUBLISHER_NAME, self.cli_version)
    }
}
