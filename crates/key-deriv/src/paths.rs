//! BIP32 derivation paths for relying-party authentication keys.
//!
//! # Key Hierarchy Overview
//!
//! Every authentication key lives under a single purpose subtree of the master
//! seed, so other protocols sharing the same mnemonic never collide with it:
//!
//! ```text
//! Master Seed
//! └── m/128273' ───────────────────────── Authentication purpose
//!     └── m/128273'/<version>' ────────── Scheme version
//!         └── .../<device_id>' ────────── Authenticator device
//!             └── .../<rp_index>' ─────── hash_to_index(rp_id)
//!                 └── .../<key_index> ─── Rotatable key (non-hardened)
//! ```
//!
//! The first four components are hardened. Only `key_index` is left
//! non-hardened. Rotating it still requires the private key of the hardened
//! `rp_index` parent, so public-only rotation is not possible with this layout.

use std::fmt;

use bitcoin::bip32::{ChildNumber, DerivationPath};

use crate::errors::{AuthKeyError, Result};

/// Offset that marks a child index as hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Purpose index reserving the authentication subtree.
///
/// # Implementation Details
///
/// Chosen once for this protocol and never reused by any other purpose that
/// derives from the same seed. It sits well outside the
/// [BIP-43](https://github.com/bitcoin/bips/blob/master/bip-0043.mediawiki)
/// ranges used by wallets.
pub const PURPOSE_AUTH: u32 = 128_273;

/// Number of components in an authentication path.
pub const AUTH_PATH_DEPTH: usize = 5;

/// A fully resolved authentication derivation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthPath {
    /// `[purpose', version', device_id', rp_index', key_index]` with the
    /// hardening offset already applied to the first four.
    indices: [u32; AUTH_PATH_DEPTH],

    /// Canonical textual form, e.g. `m/128273'/0'/0'/595175158'/0`.
    path: String,
}

impl AuthPath {
    /// Child indices in derivation order.
    pub const fn indices(&self) -> &[u32; AUTH_PATH_DEPTH] {
        &self.indices
    }

    /// Canonical textual path.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consumes the path, returning its textual form and indices.
    pub fn into_parts(self) -> (String, [u32; AUTH_PATH_DEPTH]) {
        (self.path, self.indices)
    }

    /// Converts the indices into a [`DerivationPath`].
    pub fn to_derivation_path(&self) -> DerivationPath {
        self.indices
            .iter()
            .copied()
            .map(ChildNumber::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl fmt::Display for AuthPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Builds the derivation path for one relying-party key.
///
/// `version`, `device_id` and `rp_index` get hardened. `key_index` is kept as
/// is. Each of them must be below [`HARDENED_OFFSET`]: the first three would
/// overflow when hardened, and a larger `key_index` would silently turn into a
/// hardened index.
pub fn make_auth_path(
    rp_index: u32,
    device_id: u32,
    key_index: u32,
    version: u32,
) -> Result<AuthPath> {
    let version_h = harden("version", version)?;
    let device_h = harden("device_id", device_id)?;
    let rp_h = harden("rp_index", rp_index)?;
    ensure_unhardened("key_index", key_index)?;

    let indices = [
        PURPOSE_AUTH + HARDENED_OFFSET,
        version_h,
        device_h,
        rp_h,
        key_index,
    ];
    let path = format!("m/{PURPOSE_AUTH}'/{version}'/{device_id}'/{rp_index}'/{key_index}");

    Ok(AuthPath { indices, path })
}

fn ensure_unhardened(name: &'static str, value: u32) -> Result<()> {
    if value >= HARDENED_OFFSET {
        return Err(AuthKeyError::invalid_param(
            name,
            format!("{value} is not below {HARDENED_OFFSET:#x}"),
        ));
    }

    Ok(())
}

fn harden(name: &'static str, value: u32) -> Result<u32> {
    ensure_unhardened(name, value)?;
    Ok(value + HARDENED_OFFSET)
}
