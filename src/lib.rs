//! Secure random binary sequences
//!
//! This crate produces a 128-bit random sequence drawn from the operating
//! system's cryptographically secure random source and renders it as a
//! string of `'0'` and `'1'` characters.
//!
//! # Module overview
//!
//! - `os`
//!   Platform entropy. Thin, fallible wrappers around the kernel or
//!   system library call that yields secure random bytes on each
//!   supported target. Nothing outside `rng` talks to this module.
//!
//! - `rng`
//!   The [`rng::EntropySource`] seam and its operating system
//!   implementation [`rng::OsEntropy`]. Generators are written against the
//!   trait so that alternative sources (fixed bytes, failing sources) can
//!   be plugged in.
//!
//! - `sequence`
//!   The fixed-size byte buffer, the binary digit string it expands to,
//!   and the generator that ties both to an entropy source.
//!
//! - `stats`
//!   The monobit frequency test, used to sanity-check the balance of
//!   generated bits. It is a statistical smoke test, not a cryptographic
//!   assessment.
//!
//! # Example
//!
//! ```no_run
//! let digits = bitseq::generate()?;
//! assert_eq!(digits.len(), bitseq::SEQUENCE_BITS);
//! # Ok::<(), bitseq::Error>(())
//! ```

mod error;
mod os;

pub mod logger;
pub mod rng;
pub mod sequence;
pub mod stats;

pub use error::Error;
pub use sequence::{
    BinaryDigitString, BinarySequenceGenerator, RandomByteBuffer, SEQUENCE_BITS, SEQUENCE_BYTES,
    generate, run,
};
