//! Hex rendering of key material

use crate::Result;

/// Render bytes as lowercase hex, two digits per byte, high nibble first.
///
/// No prefix and no separators; the output length is always
/// `2 * bytes.len()`.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text (either case) back into bytes
///
/// # Errors
///
/// Returns [`crate::KeyError::InvalidHex`] on odd length or non-hex characters.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyError;
    use hex_literal::hex;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_vector() {
        let bytes = hex!("00 01 0a 0f 10 7f 80 ab ff");
        assert_eq!(encode_hex(&bytes), "00010a0f107f80abff");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode_hex("ABff").unwrap(), vec![0xab, 0xff]);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(decode_hex("abc"), Err(KeyError::InvalidHex(_))));
        assert!(matches!(decode_hex("zz"), Err(KeyError::InvalidHex(_))));
    }

    proptest! {
        #[test]
        fn encoded_length_and_alphabet(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let text = encode_hex(&bytes);
            prop_assert_eq!(text.len(), bytes.len() * 2);
            prop_assert!(text.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        }

        #[test]
        fn decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
        }
    }
}
