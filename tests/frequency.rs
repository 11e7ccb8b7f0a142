use bitseq::stats::{SIGNIFICANCE, frequency_test, monobit_p_value};
use bitseq::{BinarySequenceGenerator, SEQUENCE_BITS};

const RUNS: usize = 10_000;

#[test]
fn test_frequency_ones_ratio_close_to_half() {
    let mut generator = BinarySequenceGenerator::new();
    let mut ones = 0usize;

    for _ in 0..RUNS {
        ones += generator.generate().unwrap().ones();
    }

    // 1.28M bits: one standard deviation is about 0.00044, allow > 10 sigma.
    let total = (RUNS * SEQUENCE_BITS) as f64;
    let ratio = ones as f64 / total;
    assert!((ratio - 0.5).abs() < 0.005, "ratio of ones = {ratio}");
}

#[test]
fn test_frequency_pooled_sequences_pass_monobit() {
    let mut generator = BinarySequenceGenerator::new();
    let mut bits = Vec::with_capacity(1_000 * SEQUENCE_BITS);

    for _ in 0..1_000 {
        bits.extend(generator.generate().unwrap().digits());
    }

    // Fails with probability 1e-9 on a good source.
    let p = monobit_p_value(bits);
    assert!(p > 1e-9, "p = {p}");
}

#[test]
fn test_frequency_most_single_sequences_pass_monobit() {
    let mut generator = BinarySequenceGenerator::new();

    let passed = (0..1_000)
        .filter(|_| frequency_test(&generator.generate().unwrap()) >= SIGNIFICANCE)
        .count();

    // Expected about 990; a binomial(1000, 0.01) tail above 50 failures is negligible.
    assert!(passed >= 950, "passed = {passed}");
}
