use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hdauth-cli",
    about = "Deterministic per-relying-party authentication keys",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "HDAUTH_CONFIG",
        help = "path to a TOML config file"
    )]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    GenerateMnemonic(GenerateMnemonicArgs),

    Derive(DeriveArgs),

    Sign(SignArgs),

    Verify(VerifyArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Generate a fresh BIP-39 mnemonic", version)]
pub(crate) struct GenerateMnemonicArgs {
    #[arg(long, default_value_t = 24, help = "number of words (12, 15, 18, 21 or 24)")]
    pub(crate) words: usize,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Derive the public credential for a relying party",
    version
)]
pub(crate) struct DeriveArgs {
    #[clap(flatten)]
    pub(crate) key: KeyArgs,

    #[clap(flatten)]
    pub(crate) secret: SecretArgs,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Sign a challenge with a relying-party key", version)]
pub(crate) struct SignArgs {
    #[clap(flatten)]
    pub(crate) key: KeyArgs,

    #[clap(flatten)]
    pub(crate) secret: SecretArgs,

    #[clap(flatten)]
    pub(crate) message: MessageArgs,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Verify a challenge signature", version)]
pub(crate) struct VerifyArgs {
    #[arg(long, help = "hex-encoded compressed public key")]
    pub(crate) public_key: String,

    #[arg(long, help = "hex-encoded compact signature")]
    pub(crate) signature: String,

    #[clap(flatten)]
    pub(crate) message: MessageArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct KeyArgs {
    #[arg(long, help = "relying party identifier, e.g. a domain name")]
    pub(crate) rp_id: String,

    #[arg(long, help = "authenticator device id (overrides the config file)")]
    pub(crate) device_id: Option<u32>,

    #[arg(long, default_value_t = 0, help = "key rotation index")]
    pub(crate) key_index: u32,

    #[arg(
        long,
        help = "derivation scheme version (overrides the config file)"
    )]
    pub(crate) scheme_version: Option<u32>,
}

#[derive(Args, Clone)]
pub(crate) struct SecretArgs {
    #[arg(
        long,
        env = "HDAUTH_MNEMONIC",
        hide_env_values = true,
        help = "BIP-39 mnemonic (overrides `mnemonic_file` in the config file)"
    )]
    pub(crate) mnemonic: Option<String>,

    #[arg(
        long,
        env = "HDAUTH_PASSPHRASE",
        hide_env_values = true,
        default_value = "",
        help = "BIP-39 passphrase"
    )]
    pub(crate) passphrase: String,
}

// Keeps secrets out of `Debug` output of the parsed commands.
impl std::fmt::Debug for SecretArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArgs")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct MessageArgs {
    #[arg(long, help = "hex-encoded challenge bytes")]
    pub(crate) message: Option<String>,

    #[arg(long, help = "challenge given as UTF-8 text")]
    pub(crate) message_text: Option<String>,
}

impl MessageArgs {
    /// Challenge bytes from whichever form was given.
    pub(crate) fn bytes(&self) -> Result<Vec<u8>> {
        match (&self.message, &self.message_text) {
            (Some(hex_message), _) => Ok(hex::decode(hex_message)?),
            (None, Some(text)) => Ok(text.as_bytes().to_vec()),
            (None, None) => Ok(Vec::new()),
        }
    }
}
