use std::io::Write;

use crate::Error;
use crate::rng::{EntropySource, OsEntropy};
use crate::sequence::{BinaryDigitString, RandomByteBuffer};

/// Produces binary digit strings from an entropy source.
///
/// Every call to [`generate`](Self::generate) reads a new buffer from the
/// source; nothing is cached between calls.
#[derive(Debug, Default)]
pub struct BinarySequenceGenerator<S = OsEntropy> {
    source: S,
}

impl BinarySequenceGenerator<OsEntropy> {
    /// Creates a generator backed by the operating system.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl<S: EntropySource> BinarySequenceGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Draws a fresh buffer and expands it into binary digits.
    ///
    /// Fails with [`Error::EntropySourceUnavailable`] if the source cannot
    /// be read; in that case no digits are produced.
    pub fn generate(&mut self) -> Result<BinaryDigitString, Error> {
        let buffer = RandomByteBuffer::fill_from(&mut self.source)?;

        Ok(BinaryDigitString::from_buffer(&buffer))
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

/// Generates one sequence from the operating system's secure source.
pub fn generate() -> Result<BinaryDigitString, Error> {
    BinarySequenceGenerator::new().generate()
}

/// Generates one sequence from `generator` and writes it to `out` as a
/// single line.
///
/// Nothing is written unless the whole sequence was produced. Write
/// failures are reported as [`Error::Output`].
pub fn run<S, W>(generator: &mut BinarySequenceGenerator<S>, out: &mut W) -> Result<(), Error>
where
    S: EntropySource,
    W: Write,
{
    let digits = generator.generate()?;

    writeln!(out, "{digits}")?;
    out.flush()?;

    Ok(())
}
