//! Request signing: canonical payloads, signatures, verification.
//!
//! ## Wire format
//!
//! Every write endpoint takes the same body:
//!
//! ```json
//! {"pubKey": "<hex>", "origin": "<hex>", "signature": "<hex>"}
//! ```
//!
//! 1. The payload struct is serialized to compact JSON (fields in declaration order).
//! 2. `origin` is the lowercase hex of those bytes.
//! 3. The bytes of the `origin` *string* are hashed once with SHA-256.
//! 4. The 32-byte digest is signed with secp256k1 ECDSA (RFC 6979 nonces, low-S).
//! 5. `signature` is the hex of the DER-encoded signature.
//! 6. `pubKey` is the hex of the serialized public key, so the service can
//!    verify without a registration step.

pub mod wallet;

pub use wallet::Wallet;

use std::sync::OnceLock;

use bitcoin::hashes::{sha256, Hash};
use bitcoin::secp256k1::{ecdsa, All, Message, Secp256k1};
use bitcoin::{PrivateKey, PublicKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SigningError};
use crate::shared::Address;

/// Process-wide secp256k1 context.
pub(crate) fn secp() -> &'static Secp256k1<All> {
    static SECP: OnceLock<Secp256k1<All>> = OnceLock::new();
    SECP.get_or_init(Secp256k1::new)
}

// ============================================================================
// Envelope
// ============================================================================

/// Signed request body for the write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    #[serde(rename = "pubKey")]
    pub pub_key: String,
    pub origin: String,
    pub signature: String,
}

impl SignedEnvelope {
    /// Canonicalize `payload` and sign it with `signer`'s key.
    pub fn sign<T: Serialize>(signer: &Wallet, payload: &T) -> Result<Self, SdkError> {
        let origin = canonicalize(payload)?;
        let signature = sign_origin(signer.private_key(), &origin);
        Ok(Self {
            pub_key: signer.public_key_hex(),
            origin,
            signature,
        })
    }

    /// Check the signature against this envelope's own origin and public key.
    pub fn verify(&self) -> Result<bool, SigningError> {
        verify(&self.pub_key, &self.origin, &self.signature)
    }

    /// Decode `origin` back into the payload it was built from.
    pub fn decode_origin<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        let bytes = hex::decode(&self.origin).map_err(|source| SigningError::InvalidHex {
            field: "origin",
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Address controlled by the envelope's public key.
    pub fn signer_address(&self) -> Result<Address, SigningError> {
        address_from_pubkey_hex(&self.pub_key)
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// Serialize a payload to compact JSON and hex-encode the bytes.
pub fn canonicalize<T: Serialize>(payload: &T) -> Result<String, SdkError> {
    let json = serde_json::to_vec(payload)?;
    Ok(hex::encode(json))
}

/// SHA-256 of the origin string's bytes.
pub fn digest(origin: &str) -> [u8; 32] {
    sha256::Hash::hash(origin.as_bytes()).to_byte_array()
}

/// Sign an origin string; returns hex of the DER signature.
pub fn sign_origin(private_key: &PrivateKey, origin: &str) -> String {
    let message = Message::from_digest(digest(origin));
    let signature = secp().sign_ecdsa(&message, &private_key.inner);
    hex::encode(signature.serialize_der().to_vec())
}

/// Verify a hex DER signature over `origin` under a hex public key.
///
/// Empty inputs verify as `false` rather than erroring. High-S signatures are
/// normalized before checking.
pub fn verify(pubkey_hex: &str, origin: &str, signature_hex: &str) -> Result<bool, SigningError> {
    if pubkey_hex.is_empty() || origin.is_empty() || signature_hex.is_empty() {
        return Ok(false);
    }

    let public_key = parse_pubkey_hex(pubkey_hex)?;

    let sig_bytes = hex::decode(signature_hex).map_err(|source| SigningError::InvalidHex {
        field: "signature",
        source,
    })?;
    let mut signature = ecdsa::Signature::from_der(&sig_bytes)
        .map_err(|e| SigningError::InvalidSignature(e.to_string()))?;
    signature.normalize_s();

    let message = Message::from_digest(digest(origin));
    Ok(secp()
        .verify_ecdsa(&message, &signature, &public_key.inner)
        .is_ok())
}

/// Mainnet P2PKH address for a hex-encoded public key.
pub fn address_from_pubkey_hex(pubkey_hex: &str) -> Result<Address, SigningError> {
    Ok(wallet::address_of(&parse_pubkey_hex(pubkey_hex)?))
}

fn parse_pubkey_hex(pubkey_hex: &str) -> Result<PublicKey, SigningError> {
    let bytes = hex::decode(pubkey_hex).map_err(|source| SigningError::InvalidHex {
        field: "pubKey",
        source,
    })?;
    PublicKey::from_slice(&bytes).map_err(|e| SigningError::InvalidPublicKey(e.to_string()))
}
