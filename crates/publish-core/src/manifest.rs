//! Manifest and signed envelope records
//!
//! Field order in these structs is the serialization order, and the
//! serialized bytes are what gets signed. Reordering or renaming a field
//! invalidates every existing signature.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::chain_settings::ChainSettings;
use crate::digest::keccak256;

/// Unsigned description of a published agent image.
///
/// Note the naming: `agent_id` carries the agent *name* and `agent_id_hash`
/// the agent identifier. Consumers depend on these field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub from: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub agent_id: String,
    pub agent_id_hash: String,
    pub version: String,
    pub timestamp: String,
    pub image_reference: String,
    pub documentation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_url: Option<String>,
    pub chain_ids: Vec<u64>,
    pub published_from: String,
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_settings: Option<ChainSettings>,
}

impl Manifest {
    /// Compact JSON form in field order; the exact bytes that are signed.
    pub fn to_canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Keccak-256 digest of [`Self::to_canonical_json`].
    pub fn digest(&self) -> Result<[u8; 32]> {
        Ok(keccak256(self.to_canonical_json()?.as_bytes()))
    }
}

/// A manifest together with the signature over its digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    pub manifest: Manifest,
    pub signature: String,
}

impl SignedEnvelope {
    /// Compact JSON payload published to the content store.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
