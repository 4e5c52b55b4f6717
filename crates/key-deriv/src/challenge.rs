//! Challenge-response signing over derived authentication keys.
//!
//! Messages are hashed with SHA-256 and signed with deterministic (RFC 6979)
//! ECDSA over secp256k1. Signatures travel in the 64-byte compact `r || s`
//! encoding.

use secp256k1::{ecdsa::Signature, Message, PublicKey, SecretKey, SECP256K1};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::errors::{AuthKeyError, Result};

/// Length of a private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of a compressed public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 33;

/// Length of a compact signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

fn challenge_digest(message: &[u8]) -> Message {
    Message::from_digest(Sha256::digest(message).into())
}

/// Signs `message` with a 32-byte secp256k1 private key.
///
/// Fails with [`AuthKeyError::InvalidKey`] unless `private_key` is exactly
/// [`PRIVATE_KEY_LEN`] bytes encoding a nonzero scalar below the curve order.
/// Signing the same message with the same key always yields the same
/// signature.
pub fn sign_challenge(private_key: &[u8], message: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
    let secret = SecretKey::from_slice(private_key).map_err(AuthKeyError::InvalidKey)?;

    let signature = SECP256K1.sign_ecdsa(&challenge_digest(message), &secret);
    Ok(signature.serialize_compact())
}

/// Checks a compact signature over `message` against a compressed public key.
///
/// Any malformed input is a failed verification, not an error.
pub fn verify_challenge_signature(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    if public_key.len() != PUBLIC_KEY_LEN {
        debug!(len = public_key.len(), "rejecting public key of wrong length");
        return false;
    }
    if signature.len() != SIGNATURE_LEN {
        debug!(len = signature.len(), "rejecting signature of wrong length");
        return false;
    }

    let Ok(public_key) = PublicKey::from_slice(public_key) else {
        debug!("rejecting malformed public key");
        return false;
    };
    let Ok(signature) = Signature::from_compact(signature) else {
        debug!("rejecting malformed signature");
        return false;
    };

    match SECP256K1.verify_ecdsa(&challenge_digest(message), &signature, &public_key) {
        Ok(()) => true,
        Err(e) => {
            debug!(%e, "signature verification failed");
            false
        }
    }
}
