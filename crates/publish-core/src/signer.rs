//! Signing collaborator
//!
//! Manifests are signed the way Ethereum wallets sign raw digests: a
//! secp256k1 recoverable signature serialized as `0x || r || s || v`, with
//! `v = 27 + recovery id`. The publisher address is the EIP-55 checksummed
//! address of the signing key, so consumers can recover it from the
//! signature alone.

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::digest::keccak256;

/// Length of a serialized recoverable signature in bytes.
const SIGNATURE_LEN: usize = 65;

/// Offset added to the recovery id in the serialized `v` byte.
const V_OFFSET: u8 = 27;

/// Errors from the signing primitive
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The private key is not 32 bytes of hex or not a valid scalar
    #[error("invalid private key: {reason}")]
    InvalidPrivateKey { reason: String },

    /// A serialized signature could not be decoded
    #[error("invalid signature: {reason}")]
    InvalidSignature { reason: String },

    /// The ECDSA primitive itself failed
    #[error("ecdsa failure: {0}")]
    Ecdsa(#[from] k256::ecdsa::Error),
}

/// Derives publisher addresses and signs manifest digests.
pub trait Signer {
    /// Address of the wallet implied by `private_key`.
    fn address(&self, private_key: &str) -> Result<String, SignerError>;

    /// Compact recoverable signature of a 32-byte digest.
    fn sign_digest(&self, private_key: &str, digest: &[u8; 32]) -> Result<String, SignerError>;
}

/// [`Signer`] using secp256k1 keys and Ethereum address derivation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EthereumSigner;

impl EthereumSigner {
    pub fn new() -> Self {
        Self
    }
}

impl Signer for EthereumSigner {
    fn address(&self, private_key: &str) -> Result<String, SignerError> {
        let key = parse_private_key(private_key)?;
        Ok(address_of(key.verifying_key()))
    }

    fn sign_digest(&self, private_key: &str, digest: &[u8; 32]) -> Result<String, SignerError> {
        let key = parse_private_key(private_key)?;
        let (mut signature, mut recovery_id) = key.sign_prehash_recoverable(digest)?;

        // Consumers reject high-s signatures
        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let mut bytes = Vec::with_capacity(SIGNATURE_LEN);
        bytes.extend_from_slice(&signature.to_bytes());
        bytes.push(V_OFFSET + recovery_id.to_byte());
        Ok(format!("0x{}", hex::encode(bytes)))
    }
}

/// Recover the checksummed signer address from a digest and its compact
/// signature.
pub fn recover_address(digest: &[u8; 32], signature: &str) -> Result<String, SignerError> {
    let bytes = decode_hex(signature).map_err(|reason| SignerError::InvalidSignature { reason })?;
    if bytes.len() != SIGNATURE_LEN {
        return Err(SignerError::InvalidSignature {
            reason: format!("expected {SIGNATURE_LEN} bytes, got {}", bytes.len()),
        });
    }

    let signature = Signature::from_slice(&bytes[..64])?;
    let v = bytes[64];
    let recovery_id = RecoveryId::from_byte(v.checked_sub(V_OFFSET).unwrap_or(v)).ok_or_else(|| {
        SignerError::InvalidSignature {
            reason: format!("invalid recovery byte {v}"),
        }
    })?;

    let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)?;
    Ok(address_of(&key))
}

fn parse_private_key(private_key: &str) -> Result<SigningKey, SignerError> {
    let bytes = decode_hex(private_key).map_err(|reason| SignerError::InvalidPrivateKey { reason })?;
    if bytes.len() != 32 {
        return Err(SignerError::InvalidPrivateKey {
            reason: format!("expected 32 bytes, got {}", bytes.len()),
        });
    }
    SigningKey::from_slice(&bytes).map_err(|_| SignerError::InvalidPrivateKey {
        reason: "scalar out of range".to_string(),
    })
}

fn decode_hex(value: &str) -> Result<Vec<u8>, String> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| e.to_string())
}

fn address_of(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    to_checksum_address(&hash[12..])
}

/// EIP-55 mixed-case encoding of a 20-byte address.
fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
