//! Owned BIP-32 nodes used as derivation roots and intermediate steps.

use std::fmt;

use bitcoin::{
    bip32::{ChildNumber, Fingerprint, Xpriv, Xpub},
    Network,
};
use secp256k1::SECP256K1;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{AuthKeyError, Result};

/// A node in the BIP-32 key tree.
///
/// Every derivation step returns a new owned node; existing nodes are never
/// mutated, so one root can be shared by many concurrent derivations.
#[derive(Clone)]
pub enum MasterNode {
    /// Node carrying private key material.
    Private(Xpriv),

    /// Public-only node. Cannot derive hardened children.
    Public(Xpub),
}

impl MasterNode {
    /// Creates the BIP-32 master node for a seed.
    ///
    /// The network only affects serialization, never key material.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let xpriv = Xpriv::new_master(Network::Bitcoin, seed)?;
        Ok(Self::Private(xpriv))
    }

    /// Derives the child node at `index`.
    ///
    /// Indices at or above [`HARDENED_OFFSET`](crate::HARDENED_OFFSET) are
    /// hardened and fail with [`AuthKeyError::KeyUnavailable`] on a public-only
    /// node.
    pub fn derive_child(&self, index: u32) -> Result<Self> {
        let child = ChildNumber::from(index);

        match self {
            Self::Private(xpriv) => Ok(Self::Private(xpriv.derive_priv(SECP256K1, &[child])?)),
            Self::Public(xpub) => Ok(Self::Public(xpub.ckd_pub(SECP256K1, child)?)),
        }
    }

    /// Returns the public-only counterpart of this node.
    pub fn to_public(&self) -> Self {
        match self {
            Self::Private(xpriv) => Self::Public(Xpub::from_priv(SECP256K1, xpriv)),
            Self::Public(xpub) => Self::Public(*xpub),
        }
    }

    /// Whether this node can derive hardened children.
    pub const fn has_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }

    /// BIP-32 fingerprint of this node. Safe to log.
    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            Self::Private(xpriv) => xpriv.fingerprint(SECP256K1),
            Self::Public(xpub) => xpub.fingerprint(),
        }
    }

    /// Private key of this node.
    pub(crate) fn private_key(&self) -> Result<&secp256k1::SecretKey> {
        match self {
            Self::Private(xpriv) => Ok(&xpriv.private_key),
            Self::Public(_) => Err(AuthKeyError::KeyUnavailable),
        }
    }
}

// Only public identifiers; the chain code and private key stay out of logs.
impl fmt::Debug for MasterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterNode")
            .field("fingerprint", &format_args!("{}", self.fingerprint()))
            .field("private", &self.has_private())
            .finish()
    }
}

// Manual Drop implementation to zeroize private nodes on drop.
impl Drop for MasterNode {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for MasterNode {
    #[inline]
    fn zeroize(&mut self) {
        // Public nodes hold nothing secret.
        let Self::Private(xpriv) = self else {
            return;
        };

        // # Security note
        //
        // The network is a public parameter and is left alone.
        //
        // NOTE: `Xpriv.private_key` (`SecretKey`) `non_secure_erase` writes `1`s to the memory.
        xpriv.depth.zeroize();
        {
            let fingerprint: &mut [u8; 4] = xpriv.parent_fingerprint.as_mut();
            fingerprint.zeroize();
        }
        xpriv.private_key.non_secure_erase();
        {
            let chaincode: &mut [u8; 32] = xpriv.chain_code.as_mut();
            chaincode.zeroize();
        }
        xpriv.child_number = if xpriv.child_number.is_normal() {
            ChildNumber::Normal { index: 0 }
        } else {
            ChildNumber::Hardened { index: 0 }
        };
    }
}

impl ZeroizeOnDrop for MasterNode {}
