//! Main entry point for the hmac-keygen CLI application

use clap::Parser;
use fusekey_keygen::{logging, Cli};

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    fusekey_keygen::run(&cli)
}
