//! `hmac-keygen` command-line program
//!
//! With no arguments: generate a 256-bit key, write it to `hmac_key.bin`
//! in the working directory, and print `Chiave generata: <hex>`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Commands};
pub use config::KeygenConfig;

use std::io;

/// Execute the parsed command line against stdout
///
/// # Errors
///
/// Returns the first failure; `main` reports it on stderr and exits non-zero.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = KeygenConfig::from_cli(cli);
    let mut out = io::stdout().lock();

    match &cli.command {
        None => commands::generate(&config, &mut out),
        Some(Commands::Inspect { path }) => commands::inspect(path, config.print_key, &mut out),
    }
}
