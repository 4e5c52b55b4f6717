//! Derives a relying-party key and prints its public credential as JSON.
//!
//! The private key never leaves this process.

use anyhow::Result;
use tracing::info;

use super::{auth_params, load_root};
use crate::{cli::DeriveArgs, config::TomlConfig};

/// Handles the derive command.
pub(crate) fn handle_derive(args: DeriveArgs, config: &TomlConfig) -> Result<()> {
    println!("{}", credential_json(&args, config)?);

    Ok(())
}

fn credential_json(args: &DeriveArgs, config: &TomlConfig) -> Result<String> {
    let root = load_root(&args.secret, config)?;
    let params = auth_params(&args.key, config);

    let key = root.derive_auth_key(&params)?;
    info!(rp_id = %params.rp_id, path = %key.path(), "derived public credential");

    Ok(serde_json::to_string_pretty(&key.public_credential())?)
}
