//! Raw key file: exactly 32 bytes, no header, no checksum

use super::atomic::write_to_file;
use crate::material::HmacKey;
use crate::{KeyError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Default key file name, relative to the working directory
pub const DEFAULT_KEY_FILE: &str = "hmac_key.bin";

/// Location of a raw binary key file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// Key file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `key`, replacing whatever the file held before
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Io`] if the file cannot be written; the previous
    /// file, if any, is left in place.
    pub fn save(&self, key: &HmacKey) -> Result<()> {
        write_to_file(key.as_bytes(), &self.path)?;
        info!(
            "Key file written: {} (fingerprint: {})",
            self.path.display(),
            key.fingerprint()
        );
        Ok(())
    }

    /// Read the key back
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Io`] if the file cannot be read and
    /// [`KeyError::InvalidKeySize`] if it is not exactly 32 bytes.
    pub fn load(&self) -> Result<HmacKey> {
        let bytes = Zeroizing::new(fs::read(&self.path).map_err(|e| KeyError::io(&self.path, e))?);
        HmacKey::from_bytes(&bytes)
    }
}

impl Default for KeyFile {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(KeyFile::default().path(), Path::new("hmac_key.bin"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = KeyFile::new(dir.path().join(DEFAULT_KEY_FILE));
        let key = HmacKey::new([0x42; 32]);
        file.save(&key).unwrap();
        assert_eq!(fs::metadata(file.path()).unwrap().len(), 32);
        assert_eq!(file.load().unwrap(), key);
    }

    #[test]
    fn test_load_rejects_wrong_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        fs::write(&path, [1u8; 16]).unwrap();
        let err = KeyFile::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidKeySize {
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KeyFile::new(dir.path().join("nope.bin")).load().unwrap_err();
        assert!(matches!(err, KeyError::Io { .. }));
    }
}
