//! Transmit-safe projection of a derived key.

use serde::{Deserialize, Serialize};

use crate::challenge::{verify_challenge_signature, PUBLIC_KEY_LEN};

/// What a relying party stores at registration: the identifier, the
/// compressed public key and the derivation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicCredential {
    /// Relying-party identifier.
    pub rp_id: String,

    /// Compressed secp256k1 public key.
    #[serde(with = "hex::serde")]
    pub public_key: [u8; PUBLIC_KEY_LEN],

    /// Canonical derivation path.
    pub path: String,
}

impl PublicCredential {
    /// Verifies a challenge signature against this credential.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_challenge_signature(&self.public_key, message, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let credential = PublicCredential {
            rp_id: "example.com".to_string(),
            public_key: [2u8; PUBLIC_KEY_LEN],
            path: "m/128273'/0'/0'/595175158'/0".to_string(),
        };

        let json = serde_json::to_value(&credential).unwrap();
        assert_eq!(json["rp_id"], "example.com");
        assert_eq!(json["public_key"], "02".repeat(PUBLIC_KEY_LEN));
        assert_eq!(json["path"], "m/128273'/0'/0'/595175158'/0");

        let parsed: PublicCredential = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, credential);
    }

    #[test]
    fn test_rejects_short_public_key() {
        let json = r#"{"rp_id":"a","public_key":"0202","path":"m"}"#;
        assert!(serde_json::from_str::<PublicCredential>(json).is_err());
    }
}
