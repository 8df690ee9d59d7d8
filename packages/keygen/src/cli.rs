//! CLI argument definitions

use clap::{Parser, Subcommand};
use fusekey_key::DEFAULT_KEY_FILE;
use std::path::PathBuf;

/// Command-line arguments of `hmac-keygen`
///
/// Only explicit flags are read; the environment never changes where the
/// key is written.
#[derive(Debug, Parser)]
#[command(name = "hmac-keygen", version)]
#[command(about = "Generate a 256-bit HMAC key and save it as a raw 32-byte file")]
#[command(long_about = None)]
pub struct Cli {
    /// Path of the key file to write
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub output: PathBuf,

    /// Do not print key material; show only its fingerprint
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Action to run; generates a key when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands besides the default key generation
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Read an existing key file, check its size and show it
    ///
    /// Useful before handing the file to a provisioning tool. Fails if the
    /// file is not exactly 32 bytes.
    Inspect {
        /// Key file to read
        path: PathBuf,
    },
}
