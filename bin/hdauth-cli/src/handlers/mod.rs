//! Subcommand handlers.

pub(crate) mod derive;
pub(crate) mod mnemonic;
pub(crate) mod sign;
pub(crate) mod verify;

use std::fs;

use anyhow::{bail, Context, Result};
use hdauth_key_deriv::{AuthKeyParams, RootContext};
use zeroize::Zeroizing;

use crate::{
    cli::{KeyArgs, SecretArgs},
    config::TomlConfig,
};

/// Builds the root context from the mnemonic given on the command line or in
/// the file named by the config.
pub(crate) fn load_root(secret: &SecretArgs, config: &TomlConfig) -> Result<RootContext> {
    let phrase = match (&secret.mnemonic, &config.mnemonic_file) {
        (Some(phrase), _) => Zeroizing::new(phrase.clone()),
        (None, Some(path)) => Zeroizing::new(
            fs::read_to_string(path)
                .with_context(|| format!("reading mnemonic file {}", path.display()))?,
        ),
        (None, None) => bail!("no mnemonic given: pass --mnemonic or set `mnemonic_file`"),
    };

    Ok(RootContext::from_mnemonic(&phrase, &secret.passphrase)?)
}

/// Resolves derivation parameters, filling unset flags from the config.
pub(crate) fn auth_params(key: &KeyArgs, config: &TomlConfig) -> AuthKeyParams {
    AuthKeyParams::new(key.rp_id.as_str())
        .with_device_id(key.device_id.unwrap_or(config.device_id))
        .with_key_index(key.key_index)
        .with_version(key.scheme_version.unwrap_or(config.version))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ABANDON: &str = "abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon about";

    fn key_args() -> KeyArgs {
        KeyArgs {
            rp_id: "example.com".to_string(),
            device_id: None,
            key_index: 2,
            scheme_version: None,
        }
    }

    #[test]
    fn test_params_fall_back_to_config() {
        let config = TomlConfig {
            device_id: 4,
            version: 1,
            ..Default::default()
        };

        let expected = AuthKeyParams::new("example.com")
            .with_device_id(4)
            .with_key_index(2)
            .with_version(1);
        assert_eq!(auth_params(&key_args(), &config), expected);

        let overridden = KeyArgs {
            device_id: Some(9),
            scheme_version: Some(0),
            ..key_args()
        };
        let params = auth_params(&overridden, &config);
        assert_eq!(params.device_id, 9);
        assert_eq!(params.version, 0);
    }

    #[test]
    fn test_mnemonic_sources() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{ABANDON}").unwrap();
        let config = TomlConfig {
            mnemonic_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let from_file = SecretArgs {
            mnemonic: None,
            passphrase: String::new(),
        };
        let from_flag = SecretArgs {
            mnemonic: Some(ABANDON.to_string()),
            passphrase: String::new(),
        };

        let a = load_root(&from_file, &config).unwrap();
        let b = load_root(&from_flag, &TomlConfig::default()).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());

        assert!(load_root(&from_file, &TomlConfig::default()).is_err());
    }
}
