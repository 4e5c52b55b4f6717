use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Optional settings file for the CLI. Command-line flags take precedence.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlConfig {
    /// File holding the BIP-39 mnemonic.
    pub(crate) mnemonic_file: Option<PathBuf>,

    /// Default authenticator device id.
    #[serde(default)]
    pub(crate) device_id: u32,

    /// Default derivation scheme version.
    #[serde(default)]
    pub(crate) version: u32,

    /// Log filter directive used when `RUST_LOG` is unset.
    pub(crate) log_filter: Option<String>,
}

impl TomlConfig {
    /// Reads the config at `path`, or returns the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
