//! Error types for authentication key derivation and signing.

use bitcoin::bip32;

/// Errors produced while deriving or using authentication keys.
///
/// Signature verification never produces an error: a bad signature, key or
/// encoding is reported as `false` by [`crate::verify_challenge_signature`].
#[derive(Debug, thiserror::Error)]
pub enum AuthKeyError {
    /// A numeric or string input was malformed or out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The mnemonic phrase was rejected by the seed source.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] bip39::Error),

    /// Hardened derivation or key extraction was attempted on a public-only node.
    #[error("private key material unavailable")]
    KeyUnavailable,

    /// The private key bytes do not encode a valid secp256k1 scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(#[source] secp256k1::Error),

    /// The BIP-32 child derivation primitive failed.
    #[error("BIP32 derivation error: {0}")]
    Bip32(#[source] bip32::Error),
}

impl AuthKeyError {
    /// Shorthand for [`AuthKeyError::InvalidParameter`].
    pub(crate) fn invalid_param(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<bip32::Error> for AuthKeyError {
    fn from(err: bip32::Error) -> Self {
        match err {
            bip32::Error::CannotDeriveFromHardenedKey => Self::KeyUnavailable,
            other => Self::Bip32(other),
        }
    }
}

/// Result alias used throughout this crate.
pub type Result<T, E = AuthKeyError> = std::result::Result<T, E>;
