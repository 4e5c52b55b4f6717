//! Signs a challenge and prints the compact signature as hex.

use anyhow::Result;

use super::{auth_params, load_root};
use crate::{cli::SignArgs, config::TomlConfig};

/// Handles the sign command.
pub(crate) fn handle_sign(args: SignArgs, config: &TomlConfig) -> Result<()> {
    println!("{}", signature_hex(&args, config)?);

    Ok(())
}

/// Signs the challenge named by `args` and returns the hex signature.
pub(super) fn signature_hex(args: &SignArgs, config: &TomlConfig) -> Result<String> {
    let root = load_root(&args.secret, config)?;
    let key = root.derive_auth_key(&auth_params(&args.key, config))?;

    let signature = key.sign_challenge(&args.message.bytes()?)?;
    Ok(hex::encode(signature))
}
