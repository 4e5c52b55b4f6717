//! Maps relying-party identifiers to subtree indices.

use sha2::{Digest, Sha256};

/// Mask that clears the hardening bit of a child index.
const INDEX_MASK: u32 = 0x7fff_ffff;

/// Hashes an identifier into a 31-bit child index.
///
/// The index is the first four bytes of `SHA-256(identifier)` read big-endian
/// with the top bit cleared, so it always stays below
/// [`HARDENED_OFFSET`](crate::HARDENED_OFFSET) and can be hardened without
/// overflow. Defined for every string, the empty one included.
pub fn hash_to_index(identifier: &str) -> u32 {
    let digest = Sha256::digest(identifier.as_bytes());
    let prefix = [digest[0], digest[1], digest[2], digest[3]];
    u32::from_be_bytes(prefix) & INDEX_MASK
}
