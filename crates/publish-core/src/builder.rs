//! Manifest assembly
//!
//! Checks the documentation file before touching its contents, publishes it,
//! normalizes chain settings and fills in the remaining manifest fields.

use publish_fs::Filesystem;

use crate::chain_settings::normalize_chain_settings;
use crate::clock::{Clock, format_utc};
use crate::config::PublishConfig;
use crate::manifest::Manifest;
use crate::signer::Signer;
use crate::store::ContentStore;
use crate::{Error, Result};

/// Assembles a [`Manifest`] from configuration plus per-call inputs.
#[derive(Debug)]
pub struct ManifestBuilder<'a, F, S, G> {
    config: &'a PublishConfig,
    fs: &'a F,
    store: &'a S,
    signer: &'a G,
    clock: &'a Clock,
}

impl<'a, F, S, G> ManifestBuilder<'a, F, S, G>
where
    F: Filesystem,
    S: ContentStore,
    G: Signer,
{
    pub fn new(
        config: &'a PublishConfig,
        fs: &'a F,
        store: &'a S,
        signer: &'a G,
        clock: &'a Clock,
    ) -> Self {
        Self {
            config,
            fs,
            store,
            signer,
            clock,
        }
    }

    /// Build the manifest for `image_reference`, signed later by `private_key`.
    ///
    /// Publishes the documentation file as a side effect. A documentation
    /// failure aborts before any read or publish.
    pub fn build(&self, image_reference: &str, private_key: &str) -> Result<Manifest> {
        let documentation = self.publish_documentation()?;

        let chain_settings = self
            .config
            .chain_settings
            .as_ref()
            .map(normalize_chain_settings);
        let from = self.signer.address(private_key)?;
        let timestamp = format_utc(self.clock.now());

        tracing::debug!(%from, %timestamp, image_reference, "Assembled manifest");

        let config = self.config;
        Ok(Manifest {
            from,
            name: config.display_name.clone(),
            description: config.description.clone(),
            long_description: config.long_description.clone(),
            agent_id: config.agent_name.clone(),
            agent_id_hash: config.agent_id.clone(),
            version: config.version.clone(),
            timestamp,
            image_reference: image_reference.to_string(),
            documentation,
            repository: config.repository.clone(),
            license_url: config.license_url.clone(),
            promo_url: config.promo_url.clone(),
            chain_ids: config.chain_ids.clone(),
            published_from: config.published_from(),
            external: config.external,
            chain_settings,
        })
    }

    /// Pre-flight the documentation file, then publish it verbatim.
    fn publish_documentation(&self) -> Result<String> {
        let path = &self.config.documentation;

        if !self.fs.exists(path) {
            return Err(Error::DocumentationNotFound { path: path.clone() });
        }
        if self.fs.size(path)? == 0 {
            return Err(Error::DocumentationEmpty { path: path.clone() });
        }

        let content = self.fs.read_text(path)?;
        let address = self.store.publish(&content)?;
        tracing::debug!(?path, %address, "Published documentation");
        Ok(address)
    }
}
