//! Generates a new mnemonic phrase.

use anyhow::Result;
use hdauth_key_deriv::generate_mnemonic;

use crate::cli::GenerateMnemonicArgs;

/// Handles the generate-mnemonic command.
pub(crate) fn handle_generate_mnemonic(args: GenerateMnemonicArgs) -> Result<()> {
    let mnemonic = generate_mnemonic(args.words)?;
    println!("{mnemonic}");

    Ok(())
}
