//! Run configuration resolved from the command line

use crate::cli::Cli;
use fusekey_key::DEFAULT_KEY_FILE;
use std::path::PathBuf;

/// Resolved settings for a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    /// Key file destination
    pub output: PathBuf,
    /// Print the key hex to stdout (otherwise only its fingerprint)
    pub print_key: bool,
}

impl KeygenConfig {
    /// Settings from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            print_key: !cli.quiet,
        }
    }
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_KEY_FILE),
            print_key: true,
        }
    }
}
