//! Random number sources
//!
//! This module defines where secure randomness comes from. Everything that
//! needs random bytes is written against [`EntropySource`], and the
//! operating system generator ([`OsEntropy`]) is the implementation used
//! by default.
//!
//! Sources must be cryptographically secure. A non-cryptographic PRNG
//! behind this trait would silently void every guarantee made by the
//! callers.

mod os_entropy;

pub use os_entropy::OsEntropy;

use crate::Error;

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `dest` entirely with fresh random bytes.
    ///
    /// Implementations must either fill the whole buffer or return
    /// [`Error::EntropySourceUnavailable`]. Callers discard the buffer on
    /// error, so partial writes are allowed.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        (**self).fill_bytes(dest)
    }
}
