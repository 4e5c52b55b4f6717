//! Verifies a challenge signature against a public key.

use anyhow::{bail, Result};
use hdauth_key_deriv::verify_challenge_signature;

use crate::cli::VerifyArgs;

/// Handles the verify command.
///
/// Prints the outcome and fails when the signature does not verify, so the
/// exit status can be used in scripts.
pub(crate) fn handle_verify(args: VerifyArgs) -> Result<()> {
    let valid = check_signature(&args)?;
    println!("{valid}");

    if !valid {
        bail!("signature does not verify");
    }

    Ok(())
}

/// Decodes the hex inputs and checks the signature. Bad hex is an error.
fn check_signature(args: &VerifyArgs) -> Result<bool> {
    let public_key = hex::decode(&args.public_key)?;
    let signature = hex::decode(&args.signature)?;
    let message = args.message.bytes()?;

    Ok(verify_challenge_signature(&public_key, &message, &signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::MessageArgs,
        config::TomlConfig,
        handlers::sign,
    };

    const EXAMPLE_PUBKEY: &str =
        "038c776e5c8697e0c41ab51f4517570061d1df1210c9454efed68b8febc203238a";

    fn verify_args(signature: String, text: &str) -> VerifyArgs {
        VerifyArgs {
            public_key: EXAMPLE_PUBKEY.to_string(),
            signature,
            message: MessageArgs {
                message: None,
                message_text: Some(text.to_string()),
            },
        }
    }

    fn signed(text: &str) -> String {
        let args = sign::tests::sign_args("example.com", text);
        sign::signature_hex(&args, &TomlConfig::default()).unwrap()
    }

    #[test]
    fn test_accepts_cli_signature() {
        let signature = signed("login-nonce");

        assert!(check_signature(&verify_args(signature.clone(), "login-nonce")).unwrap());
        assert!(handle_verify(verify_args(signature, "login-nonce")).is_ok());
    }

    #[test]
    fn test_rejects_tampered_signature() {
        let mut signature = hex::decode(signed("login-nonce")).unwrap();
        signature[10] ^= 0x01;
        let tampered = hex::encode(signature);

        assert!(!check_signature(&verify_args(tampered.clone(), "login-nonce")).unwrap());
        assert!(handle_verify(verify_args(tampered, "login-nonce")).is_err());
    }

    #[test]
    fn test_rejects_other_message() {
        let signature = signed("login-nonce");

        assert!(handle_verify(verify_args(signature, "other-nonce")).is_err());
    }

    #[test]
    fn test_bad_hex_is_error() {
        let args = verify_args("zz".repeat(64), "login-nonce");

        assert!(check_signature(&args).is_err());
    }
}
