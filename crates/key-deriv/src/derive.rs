//! Core derivation of relying-party authentication keys.
//!
//! Provides the parameter type, the derived key type, and the walk from a
//! master node down the authentication path. [`DerivedKey`] can only be
//! constructed through derivation, so its key pair and path always agree.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hdauth_key_deriv::{derive_auth_key_from_root, AuthKeyParams, MasterNode};
//!
//! let master = MasterNode::from_seed(seed.as_bytes())?;
//! let key = derive_auth_key_from_root(&master, &AuthKeyParams::new("example.com"))?;
//!
//! let signature = key.sign_challenge(&challenge)?;
//! ```

use std::fmt;

use secp256k1::SECP256K1;
use tracing::debug;
use zeroize::Zeroize;

use crate::{
    challenge::{
        sign_challenge, verify_challenge_signature, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN,
        SIGNATURE_LEN,
    },
    credential::PublicCredential,
    errors::{AuthKeyError, Result},
    index::hash_to_index,
    node::MasterNode,
    paths::make_auth_path,
};

/// Parameters selecting one authentication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthKeyParams {
    /// Relying-party identifier, usually a domain name. Must be non-empty.
    pub rp_id: String,

    /// Authenticator device number.
    pub device_id: u32,

    /// Rotation counter for the relying party.
    pub key_index: u32,

    /// Derivation scheme version.
    pub version: u32,
}

impl AuthKeyParams {
    /// Parameters for `rp_id` with every other field at its default of 0.
    pub fn new(rp_id: impl Into<String>) -> Self {
        Self {
            rp_id: rp_id.into(),
            device_id: 0,
            key_index: 0,
            version: 0,
        }
    }

    /// Sets the device id.
    pub const fn with_device_id(mut self, device_id: u32) -> Self {
        self.device_id = device_id;
        self
    }

    /// Sets the key index.
    pub const fn with_key_index(mut self, key_index: u32) -> Self {
        self.key_index = key_index;
        self
    }

    /// Sets the scheme version.
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

/// Key pair derived for one relying party.
///
/// The private key is zeroized on drop and never shown by `Debug`.
/// Equality compares the relying party, public key and path only; the
/// private key is a function of those and is never compared.
#[derive(Clone)]
pub struct DerivedKey {
    rp_id: String,
    private_key: [u8; PRIVATE_KEY_LEN],
    public_key: [u8; PUBLIC_KEY_LEN],
    path: String,
}

impl DerivedKey {
    /// Relying party this key was derived for.
    pub fn rp_id(&self) -> &str {
        &self.rp_id
    }

    /// Secret scalar. Never log or transmit it.
    pub const fn private_key(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.private_key
    }

    /// Compressed public key.
    pub const fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Canonical derivation path, for audit and debugging only.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Signs a challenge with this key.
    pub fn sign_challenge(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
        sign_challenge(&self.private_key, message)
    }

    /// Verifies a signature over `message` against this key's public key.
    pub fn verify_challenge(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_challenge_signature(&self.public_key, message, signature)
    }

    /// The parts of this key that are safe to hand to a relying party.
    pub fn public_credential(&self) -> PublicCredential {
        PublicCredential {
            rp_id: self.rp_id.clone(),
            public_key: self.public_key,
            path: self.path.clone(),
        }
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.rp_id == other.rp_id
            && self.public_key == other.public_key
            && self.path == other.path
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("rp_id", &self.rp_id)
            .field("private_key", &"<redacted>")
            .field("public_key", &hex::encode(self.public_key))
            .field("path", &self.path)
            .finish()
    }
}

// Manual Drop implementation to zeroize the private key on drop.
impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Derives the authentication key for `params` below `root`.
///
/// Walks `root` through `[purpose', version', device_id', rp_index', key_index]`
/// one owned child at a time. `root` is never modified.
///
/// # Errors
///
/// - [`AuthKeyError::InvalidParameter`] if `rp_id` is empty or a numeric field
///   is not below [`HARDENED_OFFSET`](crate::HARDENED_OFFSET).
/// - [`AuthKeyError::KeyUnavailable`] if `root` carries no private material.
pub fn derive_auth_key_from_root(root: &MasterNode, params: &AuthKeyParams) -> Result<DerivedKey> {
    if params.rp_id.is_empty() {
        return Err(AuthKeyError::invalid_param("rp_id", "must not be empty"));
    }

    let rp_index = hash_to_index(&params.rp_id);
    let (path, indices) =
        make_auth_path(rp_index, params.device_id, params.key_index, params.version)?.into_parts();

    let mut node = root.derive_child(indices[0])?;
    for index in &indices[1..] {
        node = node.derive_child(*index)?;
    }

    let secret = node.private_key()?;
    let public_key = secret.public_key(SECP256K1).serialize();

    debug!(rp_id = %params.rp_id, %rp_index, %path, "derived authentication key");

    Ok(DerivedKey {
        rp_id: params.rp_id.clone(),
        private_key: secret.secret_bytes(),
        public_key,
        path,
    })
}
