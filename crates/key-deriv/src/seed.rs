//! BIP-39 seed source.

use std::fmt;

use bip39::Mnemonic;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{AuthKeyError, Result};

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// Seed produced from a mnemonic phrase.
///
/// Zeroized on drop. `Debug` never prints the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Raw seed bytes.
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Parses a mnemonic phrase, tolerating case and extra whitespace.
pub fn parse_mnemonic(phrase: &str) -> Result<Mnemonic> {
    let normalized = phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Mnemonic::parse_normalized(&normalized)?)
}

/// Turns a mnemonic phrase and passphrase into a seed.
///
/// Fails with [`AuthKeyError::InvalidMnemonic`] on unknown words, an invalid
/// word count or a bad checksum.
pub fn seed_from_mnemonic(phrase: &str, passphrase: &str) -> Result<Seed> {
    let mnemonic = parse_mnemonic(phrase)?;
    Ok(Seed(mnemonic.to_seed(passphrase)))
}

/// Generates a fresh English mnemonic from OS randomness.
///
/// `word_count` must be one of 12, 15, 18, 21 or 24.
pub fn generate_mnemonic(word_count: usize) -> Result<Mnemonic> {
    if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
        return Err(AuthKeyError::invalid_param(
            "word_count",
            format!("{word_count} is not one of 12, 15, 18, 21, 24"),
        ));
    }

    // 32 bits of entropy per 3 words.
    let mut entropy = [0u8; 32];
    let len = word_count / 3 * 4;
    rand::thread_rng().fill_bytes(&mut entropy[..len]);

    let mnemonic = Mnemonic::from_entropy(&entropy[..len]);
    entropy.zeroize();

    Ok(mnemonic?)
}
