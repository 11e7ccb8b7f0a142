use std::fmt;

use crate::sequence::{RandomByteBuffer, SEQUENCE_BITS};

/// A random byte buffer rendered as `'0'`/`'1'` characters.
///
/// Always exactly [`SEQUENCE_BITS`] characters long, and built only from a
/// [`RandomByteBuffer`], so both the length and the alphabet hold for every
/// value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryDigitString(String);

impl BinaryDigitString {
    /// Expands each byte into eight digits, most significant bit first.
    pub fn from_buffer(buffer: &RandomByteBuffer) -> Self {
        let mut digits = String::with_capacity(SEQUENCE_BITS);

        for &byte in buffer.as_bytes() {
            for shift in (0..8).rev() {
                digits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
            }
        }

        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits, always [`SEQUENCE_BITS`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the digits as bits, `true` for `'1'`.
    pub fn digits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    pub fn ones(&self) -> usize {
        self.digits().filter(|&bit| bit).count()
    }

    pub fn zeros(&self) -> usize {
        self.len() - self.ones()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&RandomByteBuffer> for BinaryDigitString {
    fn from(buffer: &RandomByteBuffer) -> Self {
        Self::from_buffer(buffer)
    }
}

impl AsRef<str> for BinaryDigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryDigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::rng::EntropySource;
    use crate::sequence::SEQUENCE_BYTES;

    struct Fixed([u8; SEQUENCE_BYTES]);

    impl EntropySource for Fixed {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            dest.copy_from_slice(&self.0[..dest.len()]);
            Ok(())
        }
    }

    fn expand(bytes: [u8; SEQUENCE_BYTES]) -> BinaryDigitString {
        let buffer = RandomByteBuffer::fill_from(&mut Fixed(bytes)).unwrap();
        BinaryDigitString::from_buffer(&buffer)
    }

    #[test]
    fn all_zero_bytes_give_all_zero_digits() {
        let digits = expand([0u8; SEQUENCE_BYTES]);

        assert_eq!(digits.as_str(), "0".repeat(SEQUENCE_BITS));
        assert_eq!(digits.ones(), 0);
        assert_eq!(digits.zeros(), SEQUENCE_BITS);
    }

    #[test]
    fn all_ones_bytes_give_all_one_digits() {
        let digits = expand([0xFFu8; SEQUENCE_BYTES]);

        assert_eq!(digits.as_str(), "1".repeat(SEQUENCE_BITS));
        assert_eq!(digits.ones(), SEQUENCE_BITS);
    }

    #[test]
    fn bits_are_most_significant_first() {
        let mut bytes = [0u8; SEQUENCE_BYTES];
        bytes[0] = 0x80;
        bytes[1] = 0x01;
        bytes[15] = 0xA5;

        let digits = expand(bytes);
        let s = digits.as_str();

        assert_eq!(&s[0..8], "10000000");
        assert_eq!(&s[8..16], "00000001");
        assert_eq!(&s[120..128], "10100101");
        assert_eq!(digits.ones(), 1 + 1 + 4);
    }

    #[test]
    fn bytes_are_expanded_in_order() {
        let mut bytes = [0u8; SEQUENCE_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }

        let digits = expand(bytes);

        for (i, chunk) in digits.as_str().as_bytes().chunks(8).enumerate() {
            let chunk = std::str::from_utf8(chunk).unwrap();
            assert_eq!(chunk, format!("{i:08b}"));
        }
    }

    #[test]
    fn display_matches_inner_string() {
        let digits = expand([0x5Au8; SEQUENCE_BYTES]);

        assert_eq!(digits.to_string(), digits.as_str());
        assert_eq!(digits.len(), SEQUENCE_BITS);
        assert!(!digits.is_empty());
    }
}
