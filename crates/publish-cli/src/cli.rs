//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use publish_ipfs::DEFAULT_GATEWAY;

/// Agent Publisher - Publish signed agent manifests to IPFS
#[derive(Parser, Debug)]
#[command(name = "agent-publish")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Publish documentation and a signed manifest for an agent image
    ///
    /// Prints the IPFS reference of the signed manifest.
    ///
    /// Examples:
    ///   agent-publish publish --image bafy...@sha256:...
    ///   agent-publish publish -c agent.yaml -i <ref> --dry-run
    Publish {
        /// Publish configuration file (.toml, .json, .yaml)
        #[arg(short, long, default_value = "publish.toml")]
        config: PathBuf,

        /// Image reference recorded in the manifest
        #[arg(short, long)]
        image: String,

        /// Hex private key used to sign the manifest
        #[arg(long, env = "AGENT_PUBLISH_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,

        /// IPFS HTTP API endpoint
        #[arg(long, env = "AGENT_PUBLISH_IPFS_URL", default_value = DEFAULT_GATEWAY)]
        ipfs_url: String,

        /// Build and sign without uploading; prints the envelope
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the unsigned manifest without publishing anything
    Manifest {
        /// Publish configuration file (.toml, .json, .yaml)
        #[arg(short, long, default_value = "publish.toml")]
        config: PathBuf,

        /// Image reference recorded in the manifest
        #[arg(short, long)]
        image: String,

        /// Hex private key whose address fills the `from` field
        #[arg(long, env = "AGENT_PUBLISH_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },

    /// Verify a signed manifest and print the publisher address
    Verify {
        /// Signed envelope JSON file
        #[arg(conflicts_with = "reference")]
        file: Option<PathBuf>,

        /// IPFS reference of the signed envelope
        #[arg(long = "ref")]
        reference: Option<String>,

        /// IPFS HTTP API endpoint used with --ref
        #[arg(long, env = "AGENT_PUBLISH_IPFS_URL", default_value = DEFAULT_GATEWAY)]
        ipfs_url: String,
    },
}
