//! Long-lived derivation context bound to one master node.

use bitcoin::bip32::Fingerprint;
use tracing::info;

use crate::{
    derive::{derive_auth_key_from_root, AuthKeyParams, DerivedKey},
    errors::Result,
    node::MasterNode,
    seed::{seed_from_mnemonic, Seed},
};

/// Long-lived handle over one master node.
///
/// Holds no mutable state: every [`RootContext::derive_auth_key`] call is
/// independent, and a shared reference can be used from many threads at once.
/// The master node is zeroized when the context is dropped.
#[derive(Debug, Clone)]
pub struct RootContext {
    master: MasterNode,
}

impl RootContext {
    /// Creates a context from an existing master node, possibly public-only.
    pub fn from_master(master: MasterNode) -> Self {
        info!(
            fingerprint = %master.fingerprint(),
            private = master.has_private(),
            "loaded master node"
        );
        Self { master }
    }

    /// Creates a context from a BIP-39 seed.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        Self::from_seed_bytes(seed.as_bytes())
    }

    /// Creates a context from raw seed bytes.
    pub fn from_seed_bytes(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_master(MasterNode::from_seed(seed)?))
    }

    /// Creates a context from a mnemonic phrase and passphrase.
    pub fn from_mnemonic(phrase: &str, passphrase: &str) -> Result<Self> {
        let seed = seed_from_mnemonic(phrase, passphrase)?;
        Self::from_seed(&seed)
    }

    /// Master node fingerprint. Safe to log.
    pub fn fingerprint(&self) -> Fingerprint {
        self.master.fingerprint()
    }

    /// The bound master node.
    pub const fn master(&self) -> &MasterNode {
        &self.master
    }

    /// Derives the authentication key for `params`.
    pub fn derive_auth_key(&self, params: &AuthKeyParams) -> Result<DerivedKey> {
        derive_auth_key_from_root(&self.master, params)
    }
}
