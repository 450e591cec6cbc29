//! Core manifest pipeline for Agent Publisher
//!
//! Builds the manifest describing a deployable agent image, signs its digest
//! and publishes the signed envelope to a content-addressed store.
//!
//! # Pipeline
//!
//! 1. [`ManifestBuilder`] checks and publishes the documentation file,
//!    normalizes chain settings and assembles the [`Manifest`].
//! 2. [`Publisher`] digests the manifest, signs the digest and publishes the
//!    [`SignedEnvelope`].
//!
//! [`ManifestUploader`] runs both phases for one image reference and private
//! key and returns the content address of the envelope.

pub mod builder;
pub mod chain_settings;
pub mod clock;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod publisher;
pub mod signer;
pub mod store;
pub mod upload;
pub mod verify;

/// Tool name recorded in the `publishedFrom` manifest field.
pub const PUBLISHER_NAME: &str = "Agent Publisher";

pub use builder::ManifestBuilder;
pub use chain_settings::{ChainSettings, RawChainKey, RawChainSettings, normalize_chain_settings};
pub use clock::Clock;
pub use config::PublishConfig;
pub use error::{Error, Result};
pub use manifest::{Manifest, SignedEnvelope};
pub use publisher::Publisher;
pub use signer::{EthereumSigner, Signer, SignerError};
pub use store::{ContentStore, MemoryStore, StoreError};
pub use upload::ManifestUploader;
pub use verify::{VerifiedEnvelope, verify_envelope};
