//! Key generation

use crate::entropy::{EntropySource, OsEntropy};
use crate::material::{HmacKey, KEY_SIZE_BYTES};
use crate::Result;
use log::debug;
use zeroize::Zeroizing;

/// Generates 256-bit keys from an entropy source
///
/// Defaults to the operating system CSPRNG. Another source can be supplied
/// with [`KeyGenerator::with_source`], which is how failure paths are
/// exercised in tests.
#[derive(Debug, Clone, Default)]
pub struct KeyGenerator<E: EntropySource = OsEntropy> {
    source: E,
}

impl KeyGenerator<OsEntropy> {
    /// Generator backed by the OS CSPRNG
    #[must_use]
    pub fn new() -> Self {
        Self { source: OsEntropy }
    }
}

impl<E: EntropySource> KeyGenerator<E> {
    /// Generator backed by a caller-provided source
    pub fn with_source(source: E) -> Self {
        Self { source }
    }

    /// Draw a fresh key
    ///
    /// # Errors
    ///
    /// Returns [`crate::KeyError::EntropyUnavailable`] if the source fails.
    /// This is not retryable at this level.
    pub fn generate(&mut self) -> Result<HmacKey> {
        let mut buf = Zeroizing::new([0u8; KEY_SIZE_BYTES]);
        self.source.fill(buf.as_mut_slice())?;
        let key = HmacKey::new(*buf);
        debug!("Generated {KEY_SIZE_BYTES}-byte key (fingerprint: {})", key.fingerprint());
        Ok(key)
    }
}
