//! HMAC key material

use crate::encoding::{decode_hex, encode_hex};
use crate::{KeyError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::Zeroizing;

/// Key length in bytes
pub const KEY_SIZE_BYTES: usize = 32;

/// Key length in bits
pub const KEY_SIZE_BITS: u32 = 256;

/// Number of SHA-256 bytes kept in a fingerprint
const FINGERPRINT_BYTES: usize = 8;

/// A 256-bit secret key, wiped from memory on drop
///
/// The key has no structure: 32 opaque bytes. `Debug` prints only the
/// fingerprint, so keys can appear in logged structs without leaking.
#[derive(Clone)]
pub struct HmacKey {
    bytes: Zeroizing<[u8; KEY_SIZE_BYTES]>,
}

impl HmacKey {
    /// Take ownership of an exact-size array
    #[must_use]
    pub fn new(bytes: [u8; KEY_SIZE_BYTES]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Copy key material out of a slice
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidKeySize`] unless the slice is exactly
    /// [`KEY_SIZE_BYTES`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; KEY_SIZE_BYTES] = bytes.try_into().map_err(|_| KeyError::InvalidKeySize {
            expected: KEY_SIZE_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self::new(array))
    }

    /// Parse a key from its hex rendering
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidHex`] if the text is not hex, or
    /// [`KeyError::InvalidKeySize`] if it does not decode to 32 bytes.
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = Zeroizing::new(decode_hex(text.trim())?);
        Self::from_bytes(&decoded)
    }

    /// Raw key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE_BYTES] {
        &self.bytes
    }

    /// 64-character lowercase hex rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        encode_hex(self.bytes.as_slice())
    }

    /// Short non-secret identifier: hex of the first 8 bytes of SHA-256(key)
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.bytes.as_slice());
        encode_hex(&digest[..FINGERPRINT_BYTES])
    }
}

impl PartialEq for HmacKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for HmacKey {}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacKey")
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}
