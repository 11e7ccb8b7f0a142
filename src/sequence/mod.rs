//! Binary sequence generation
//!
//! A sequence is produced in two steps:
//!
//! - [`RandomByteBuffer`]
//!   Exactly [`SEQUENCE_BYTES`] octets read from an
//!   [`EntropySource`](crate::rng::EntropySource). The buffer is filled
//!   once on construction and never mutated afterwards.
//!
//! - [`BinaryDigitString`]
//!   The buffer expanded into [`SEQUENCE_BITS`] characters, each `'0'` or
//!   `'1'`. Bytes are taken in order and each byte contributes its bits
//!   from most significant to least significant.
//!
//! [`BinarySequenceGenerator`] wires both steps to a source,
//! [`generate`] runs it once against the operating system, and [`run`]
//! writes one generated line to an output stream.

mod buffer;
mod digits;
mod generator;

pub use buffer::RandomByteBuffer;
pub use digits::BinaryDigitString;
pub use generator::{BinarySequenceGenerator, generate, run};

/// Number of random bytes drawn per sequence.
pub const SEQUENCE_BYTES: usize = 16;

/// Number of binary digits in a sequence.
pub const SEQUENCE_BITS: usize = SEQUENCE_BYTES * 8;
