//! End-to-end registration and authentication against one root.

use std::{collections::HashSet, thread};

use hdauth_key_deriv::{
    derive_auth_key_from_root, sign_challenge, verify_challenge_signature, AuthKeyError,
    AuthKeyParams, PublicCredential, RootContext,
};

const ABANDON: &str = "abandon abandon abandon abandon abandon abandon \
                       abandon abandon abandon abandon abandon about";

#[test]
fn register_then_authenticate() {
    let ctx = RootContext::from_mnemonic(ABANDON, "").unwrap();

    // Registration: only the public credential leaves the authenticator.
    let key = ctx
        .derive_auth_key(&AuthKeyParams::new("example.com"))
        .unwrap();
    let stored: PublicCredential =
        serde_json::from_str(&serde_json::to_string(&key.public_credential()).unwrap()).unwrap();
    assert_eq!(
        hex::encode(stored.public_key),
        "038c776e5c8697e0c41ab51f4517570061d1df1210c9454efed68b8febc203238a"
    );
    drop(key);

    // Authentication: a later session re-derives from the same phrase.
    let challenge = [0x5a_u8; 32];
    let later = RootContext::from_mnemonic(ABANDON, "").unwrap();
    let key = later
        .derive_auth_key(&AuthKeyParams::new("example.com"))
        .unwrap();
    let signature = sign_challenge(key.private_key(), &challenge).unwrap();

    assert!(stored.verify(&challenge, &signature));
    assert!(!stored.verify(&[0xa5; 32], &signature));
}

#[test]
fn passphrase_changes_every_key() {
    let plain = RootContext::from_mnemonic(ABANDON, "").unwrap();
    let protected = RootContext::from_mnemonic(ABANDON, "TREZOR").unwrap();
    let params = AuthKeyParams::new("example.com");

    assert_ne!(plain.fingerprint(), protected.fingerprint());
    assert_ne!(
        plain.derive_auth_key(&params).unwrap().public_key(),
        protected.derive_auth_key(&params).unwrap().public_key()
    );
}

#[test]
fn rotation_and_devices_are_unlinkable() {
    let ctx = RootContext::from_mnemonic(ABANDON, "").unwrap();

    let mut public_keys = HashSet::new();
    for device_id in 0..4 {
        for key_index in 0..4 {
            let params = AuthKeyParams::new("example.com")
                .with_device_id(device_id)
                .with_key_index(key_index);
            let key = ctx.derive_auth_key(&params).unwrap();
            assert!(key
                .path()
                .ends_with(&format!("/{device_id}'/595175158'/{key_index}")));
            public_keys.insert(*key.public_key());
        }
    }

    assert_eq!(public_keys.len(), 16);
}

#[test]
fn signature_from_other_relying_party_rejected() {
    let ctx = RootContext::from_mnemonic(ABANDON, "").unwrap();
    let a = ctx.derive_auth_key(&AuthKeyParams::new("a.example")).unwrap();
    let b = ctx.derive_auth_key(&AuthKeyParams::new("b.example")).unwrap();

    let signature = a.sign_challenge(b"challenge").unwrap();

    assert!(verify_challenge_signature(a.public_key(), b"challenge", &signature));
    assert!(!verify_challenge_signature(b.public_key(), b"challenge", &signature));
}

#[test]
fn concurrent_derivation_from_shared_root() {
    let ctx = RootContext::from_mnemonic(ABANDON, "").unwrap();
    let rp_ids: Vec<String> = (0..8).map(|i| format!("rp{i}.example")).collect();

    let expected: Vec<_> = rp_ids
        .iter()
        .map(|rp_id| ctx.derive_auth_key(&AuthKeyParams::new(rp_id.as_str())).unwrap())
        .collect();

    let derived: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = rp_ids
            .iter()
            .map(|rp_id| {
                let ctx = &ctx;
                s.spawn(move || {
                    derive_auth_key_from_root(ctx.master(), &AuthKeyParams::new(rp_id.as_str()))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(derived, expected);
}

#[test]
fn public_only_root_fails_cleanly() {
    let ctx = RootContext::from_mnemonic(ABANDON, "").unwrap();
    let public = RootContext::from_master(ctx.master().to_public());

    let err = public
        .derive_auth_key(&AuthKeyParams::new("example.com"))
        .unwrap_err();
    assert!(matches!(err, AuthKeyError::KeyUnavailable));
}
