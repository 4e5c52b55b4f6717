//! CLI for deriving relying-party authentication keys and answering
//! challenges with them.

mod cli;
mod config;
mod handlers;

use anyhow::Result;
use clap::Parser;
use hdauth_common::logging::{self, LoggerConfig};

use crate::{
    config::TomlConfig,
    handlers::{derive, mnemonic, sign, verify},
};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = TomlConfig::load(cli.config.as_deref())?;

    let mut logger = LoggerConfig::with_base_name("hdauth-cli");
    if let Some(filter) = &config.log_filter {
        logger.set_default_filter(filter.as_str());
    }
    logging::init(logger);

    match cli.command {
        cli::Commands::GenerateMnemonic(args) => mnemonic::handle_generate_mnemonic(args),
        cli::Commands::Derive(args) => derive::handle_derive(args, &config),
        cli::Commands::Sign(args) => sign::handle_sign(args, &config),
        cli::Commands::Verify(args) => verify::handle_verify(args),
    }
}
