//! # Fusekey Key Generation
//!
//! Generates 256-bit HMAC keys intended for one-time-programmable
//! hardware key storage, and persists them as raw 32-byte files.
//!
//! ## Features
//!
//! - **Key Generation**: 32 bytes from the OS CSPRNG, no userspace fallback
//! - **Key Material**: zeroized on drop, redacted `Debug`, SHA-256 fingerprint
//! - **Key Files**: atomic temp-file-and-rename writes, owner-only permissions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fusekey_key::{KeyFile, KeyGenerator};
//!
//! # fn main() -> fusekey_key::Result<()> {
//! let key = KeyGenerator::new().generate()?;
//! KeyFile::default().save(&key)?;
//! println!("Chiave generata: {}", key.to_hex());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod encoding;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod material;
pub mod store;

// Re-export core types
pub use encoding::{decode_hex, encode_hex};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{KeyError, Result};
pub use generator::KeyGenerator;
pub use material::{HmacKey, KEY_SIZE_BITS, KEY_SIZE_BYTES};
pub use store::{write_to_file, KeyFile, DEFAULT_KEY_FILE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HmacKey, KeyError, KeyFile, KeyGenerator, Result};
}
