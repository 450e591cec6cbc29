//! End-to-end manifest upload

use publish_fs::Filesystem;

use crate::Result;
use crate::builder::ManifestBuilder;
use crate::clock::Clock;
use crate::config::PublishConfig;
use crate::manifest::Manifest;
use crate::publisher::Publisher;
use crate::signer::{EthereumSigner, Signer};
use crate::store::ContentStore;

/// Builds, signs and publishes manifests for one agent configuration.
///
/// Holds no state between calls; a failed upload is retried by calling
/// [`ManifestUploader::upload`] again, which republishes the documentation.
#[derive(Debug)]
pub struct ManifestUploader<F, S, G = EthereumSigner> {
    config: PublishConfig,
    fs: F,
    store: S,
    signer: G,
    clock: Clock,
}

impl<F: Filesystem, S: ContentStore> ManifestUploader<F, S> {
    /// Uploader using [`EthereumSigner`] and the system clock.
    pub fn new(config: PublishConfig, fs: F, store: S) -> Self {
        Self {
            config,
            fs,
            store,
            signer: EthereumSigner,
            clock: Clock::system(),
        }
    }
}

impl<F: Filesystem, S: ContentStore, G: Signer> ManifestUploader<F, S, G> {
    pub fn with_signer<H: Signer>(self, signer: H) -> ManifestUploader<F, S, H> {
        ManifestUploader {
            config: self.config,
            fs: self.fs,
            store: self.store,
            signer,
            clock: self.clock,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assemble the unsigned manifest. Publishes the documentation.
    pub fn build_manifest(&self, image_reference: &str, private_key: &str) -> Result<Manifest> {
        ManifestBuilder::new(&self.config, &self.fs, &self.store, &self.signer, &self.clock)
            .build(image_reference, private_key)
    }

    /// Publish the documentation and the signed manifest for
    /// `image_reference`, returning the address of the signed envelope.
    pub fn upload(&self, image_reference: &str, private_key: &str) -> Result<String> {
        let manifest = self.build_manifest(image_reference, private_key)?;
        Publisher::new(&self.store, &self.signer).publish(&manifest, private_key)
    }
}
