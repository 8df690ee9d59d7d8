//! Key file persistence

mod atomic;
mod key_file;

pub use atomic::write_to_file;
pub use key_file::{KeyFile, DEFAULT_KEY_FILE};
