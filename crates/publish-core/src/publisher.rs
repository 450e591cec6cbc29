//! Digest, sign and publish a manifest

use crate::Result;
use crate::manifest::{Manifest, SignedEnvelope};
use crate::signer::Signer;
use crate::store::ContentStore;

/// Signs manifests and publishes the resulting envelopes.
#[derive(Debug)]
pub struct Publisher<'a, S, G> {
    store: &'a S,
    signer: &'a G,
}

impl<'a, S: ContentStore, G: Signer> Publisher<'a, S, G> {
    pub fn new(store: &'a S, signer: &'a G) -> Self {
        Self { store, signer }
    }

    /// Sign the digest of the manifest's canonical serialization.
    pub fn sign(&self, manifest: &Manifest, private_key: &str) -> Result<SignedEnvelope> {
        let digest = manifest.digest()?;
        let signature = self.signer.sign_digest(private_key, &digest)?;
        Ok(SignedEnvelope {
            manifest: manifest.clone(),
            signature,
        })
    }

    /// Sign `manifest` and publish the envelope, returning its address.
    pub fn publish(&self, manifest: &Manifest, private_key: &str) -> Result<String> {
        let envelope = self.sign(manifest, private_key)?;
        let address = self.store.publish(&envelope.to_json()?)?;
        tracing::info!(%address, signer = %manifest.from, "Published signed manifest");
        Ok(address)
    }
}
