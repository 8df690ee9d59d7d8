//! Logging setup
//!
//! `env_logger` behind the `log` facade, writing to stderr so stdout only
//! ever carries the result line. Levels come from `RUST_LOG`:
//! - unset - warnings and errors only
//! - `RUST_LOG=info` - also reports the key file path and fingerprint
//! - `RUST_LOG=debug` - generation and write details
//!
//! Key material is never logged, only `HmacKey::fingerprint`.

use env_logger::Env;
use log::debug;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging (once per process)
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
            .format_timestamp_micros()
            .init();

        debug!("Logging initialized");
    });
}

/// Initialize logging for tests, tolerating repeated calls
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
