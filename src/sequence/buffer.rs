use crate::Error;
use crate::rng::EntropySource;
use crate::sequence::SEQUENCE_BYTES;

/// Fixed-size block of secure random bytes.
///
/// The only way to obtain one is [`RandomByteBuffer::fill_from`], so every
/// instance holds bytes that came from an entropy source. Its contents are
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomByteBuffer([u8; SEQUENCE_BYTES]);

impl RandomByteBuffer {
    /// Reads [`SEQUENCE_BYTES`] fresh bytes from `source`.
    pub fn fill_from<S: EntropySource>(source: &mut S) -> Result<Self, Error> {
        let mut bytes = [0u8; SEQUENCE_BYTES];
        source.fill_bytes(&mut bytes)?;

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SEQUENCE_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for RandomByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
