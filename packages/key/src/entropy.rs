//! Operating system entropy source
//!
//! Key material is drawn from the platform CSPRNG through `getrandom`
//! (`getrandom(2)` on Linux, `BCryptGenRandom` on Windows,
//! `SecRandomCopyBytes` on Apple targets). There is no fallback to a
//! userspace or seeded generator: if the OS cannot supply entropy the
//! caller gets [`KeyError::EntropyUnavailable`].

use crate::{KeyError, Result};

/// Smallest buffer for which the sanity check is applied.
///
/// Below this length an all-equal output is too likely from a healthy
/// generator to be treated as a failure.
pub const SANITY_CHECK_MIN_LEN: usize = 12;

/// Source of cryptographically secure random bytes
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EntropyUnavailable`] if the source cannot
    /// produce output.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Entropy source backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest)
            .map_err(|e| KeyError::entropy(format!("OS random source failed: {e}")))?;
        check_output(dest)
    }
}

/// Reject output a working CSPRNG will practically never produce.
///
/// Catches backends that silently do nothing (buffer stays zeroed) or
/// return a constant. Buffers shorter than [`SANITY_CHECK_MIN_LEN`] pass
/// unconditionally.
///
/// # Errors
///
/// Returns [`KeyError::EntropyUnavailable`] when every byte is identical.
pub fn check_output(bytes: &[u8]) -> Result<()> {
    if bytes.len() < SANITY_CHECK_MIN_LEN {
        return Ok(());
    }
    let first = bytes[0];
    if bytes.iter().all(|&b| b == first) {
        return Err(KeyError::entropy(format!(
            "random source returned {} identical bytes (0x{first:02x})",
            bytes.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_entropy_empty_buffer() {
        let mut buf = [0u8; 0];
        assert!(OsEntropy.fill(&mut buf).is_ok());
    }

    #[test]
    fn test_check_output_rejects_constant() {
        assert!(matches!(
            check_output(&[0u8; 32]),
            Err(KeyError::EntropyUnavailable(_))
        ));
        assert!(matches!(
            check_output(&[0xFFu8; 32]),
            Err(KeyError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_check_output_short_buffers_pass() {
        assert!(check_output(&[0u8; SANITY_CHECK_MIN_LEN - 1]).is_ok());
        assert!(check_output(&[]).is_ok());
    }

    #[test]
    fn test_check_output_accepts_varied() {
        let mut bytes = [7u8; 32];
        bytes[31] = 8;
        assert!(check_output(&bytes).is_ok());
    }
}
