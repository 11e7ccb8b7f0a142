//! Statistical checks on generated sequences
//!
//! Currently provides the frequency (monobit) test from NIST SP 800-22.
//! It detects gross imbalance between ones and zeros and nothing else;
//! passing it says little about cryptographic quality.

mod frequency;

pub use frequency::{SIGNIFICANCE, erfc, frequency_test, monobit_p_value, passes_frequency_test};
