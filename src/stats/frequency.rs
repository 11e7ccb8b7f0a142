use std::f64::consts::SQRT_2;

use crate::sequence::BinaryDigitString;

/// Significance level below which a sequence is considered non-random.
pub const SIGNIFICANCE: f64 = 0.01;

/// Complementary error function.
///
/// Chebyshev-fitted rational approximation with a fractional error below
/// 1.2e-7 over the whole real line.
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);

    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));

    let ans = t * (-z * z + poly).exp();

    if x >= 0.0 { ans } else { 2.0 - ans }
}

/// P-value of the monobit test over an arbitrary bit stream.
///
/// S = (ones - zeros) / sqrt(n), P = erfc(|S| / sqrt(2)). An empty stream
/// carries no evidence either way and yields 1.0.
pub fn monobit_p_value<I>(bits: I) -> f64
where
    I: IntoIterator<Item = bool>,
{
    let (n, sum) = bits.into_iter().fold((0u64, 0i64), |(n, sum), bit| {
        (n + 1, if bit { sum + 1 } else { sum - 1 })
    });

    if n == 0 {
        return 1.0;
    }

    let s_obs = (sum as f64).abs() / (n as f64).sqrt();
    erfc(s_obs / SQRT_2)
}

/// P-value of the monobit test for one generated sequence.
pub fn frequency_test(digits: &BinaryDigitString) -> f64 {
    monobit_p_value(digits.digits())
}

pub fn passes_frequency_test(digits: &BinaryDigitString) -> bool {
    frequency_test(digits) >= SIGNIFICANCE
}
