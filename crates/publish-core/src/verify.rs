//! Signed envelope verification
//!
//! The digest is recomputed over the manifest exactly as received, in its
//! received field order, so verification does not depend on this crate's
//! own manifest layout.

use serde_json::Value;

use crate::digest::keccak256;
use crate::manifest::Manifest;
use crate::signer::recover_address;
use crate::{Error, Result};

/// A signed envelope whose signature matched its `from` address.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedEnvelope {
    pub manifest: Manifest,
    /// Address recovered from the signature.
    pub signer: String,
}

/// Parse a signed envelope and check its signature against `manifest.from`.
pub fn verify_envelope(json: &str) -> Result<VerifiedEnvelope> {
    let envelope: Value =
        serde_json::from_str(json).map_err(|e| Error::invalid_envelope(e.to_string()))?;

    let manifest_value = envelope
        .get("manifest")
        .filter(|value| value.is_object())
        .ok_or_else(|| Error::invalid_envelope("missing manifest object"))?;
    let signature = envelope
        .get("signature")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::invalid_envelope("missing signature"))?;
    let expected = manifest_value
        .get("from")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::invalid_envelope("manifest has no from address"))?;

    let digest = keccak256(serde_json::to_string(manifest_value)?.as_bytes());
    let recovered = recover_address(&digest, signature)?;
    if !recovered.eq_ignore_ascii_case(expected) {
        return Err(Error::SignerMismatch {
            expected: expected.to_string(),
            recovered,
        });
    }

    let manifest: Manifest = serde_json::from_value(manifest_value.clone())
        .map_err(|e| Error::invalid_envelope(e.to_string()))?;
    tracing::debug!(signer = %recovered, "Verified signed manifest");
    Ok(VerifiedEnvelope {
        manifest,
        signer: recovered,
    })
}
