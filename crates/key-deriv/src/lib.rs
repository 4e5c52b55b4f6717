//! Deterministic per-relying-party authentication keys.
//!
//! One master seed yields an unlinkable secp256k1 key pair for every relying
//! party, plus a challenge-response signature scheme over those keys.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hdauth_key_deriv::{verify_challenge_signature, AuthKeyParams, RootContext};
//!
//! let ctx = RootContext::from_mnemonic(phrase, "")?;
//! let key = ctx.derive_auth_key(&AuthKeyParams::new("example.com"))?;
//!
//! // Registration hands the relying party only the public credential.
//! let credential = key.public_credential();
//!
//! // Authentication signs the relying party's challenge.
//! let signature = key.sign_challenge(&challenge)?;
//! assert!(verify_challenge_signature(&credential.public_key, &challenge, &signature));
//! ```
//!
//! # Key Hierarchy
//!
//! Keys live at `m/128273'/<version>'/<device_id>'/<rp_index>'/<key_index>`, where
//! `rp_index` is [`hash_to_index`] of the relying-party identifier. See
//! [`make_auth_path`].

pub mod challenge;
pub mod credential;
pub mod derive;
pub mod errors;
pub mod index;
pub mod node;
pub mod paths;
mod root;
pub mod seed;

pub use challenge::{
    sign_challenge, verify_challenge_signature, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SIGNATURE_LEN,
};
pub use credential::PublicCredential;
pub use derive::{derive_auth_key_from_root, AuthKeyParams, DerivedKey};
pub use errors::{AuthKeyError, Result};
pub use index::hash_to_index;
pub use node::MasterNode;
pub use paths::{make_auth_path, AuthPath, AUTH_PATH_DEPTH, HARDENED_OFFSET, PURPOSE_AUTH};
pub use root::RootContext;
pub use seed::{generate_mnemonic, parse_mnemonic, seed_from_mnemonic, Seed, SEED_LEN};

// Re-exported so callers can name the mnemonic type without depending on bip39.
pub use bip39::Mnemonic;
