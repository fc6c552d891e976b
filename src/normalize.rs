//! Reduction of an exact decimal result to the canonical mantissa/exponent
//! pair within a fixed digit budget.

use dec::Rounding;
use num_bigint::BigInt;

use emulator::{Dec, Emulator};
use pair::FloatPair;
use Exception;

/// Digits in the default ("small") mantissa budget.
pub const SMALL_MANTISSA_DIGITS: i64 = 38;

/// Digits in the widened ("large") mantissa budget.
pub const LARGE_MANTISSA_DIGITS: i64 = 72;

/// Natural small-budget exponents above this threshold are considered too
/// coarse and switch the result over to the large mantissa budget.
pub const EXPONENT_WIDEN_THRESHOLD: i64 = -18;

impl Emulator {
    /// Normalizes a decimal result into its canonical pair.
    ///
    /// The exponent is chosen so that the mantissa fills the digit budget:
    /// 38 digits by default, or 72 when the caller requests it via
    /// `large_result` or when the natural exponent would land above
    /// [`EXPONENT_WIDEN_THRESHOLD`]. The mantissa is the result scaled by
    /// `10^-exponent` and truncated toward zero; truncation, not rounding to
    /// nearest, is the required extraction policy.
    pub(crate) fn normalize(
        &mut self,
        result: Dec,
        large_result: bool,
    ) -> Result<FloatPair, Exception> {
        // Digit count in front of the decimal point, derived from the
        // magnitude order. Zero has no order and counts as one digit.
        // Sub-unity magnitudes get an extra decrement; together with the
        // truncated (not floored) order this fixes the exponents for results
        // below one.
        let order = if result.is_zero() {
            0
        } else {
            self.magnitude_order(&result)?
        };
        let mut digit_count = order + 1;
        if digit_count < 0 {
            digit_count -= 1;
        }

        let mut exponent = digit_count - SMALL_MANTISSA_DIGITS;
        if exponent > EXPONENT_WIDEN_THRESHOLD || large_result {
            exponent -= LARGE_MANTISSA_DIGITS - SMALL_MANTISSA_DIGITS;
        }

        let mantissa = self.extract_mantissa(&result, exponent)?;
        trace!(
            "normalize: result={} order={} digit_count={} -> {}e{}",
            result,
            order,
            digit_count,
            mantissa,
            exponent
        );
        Ok(FloatPair::new(mantissa, exponent))
    }

    /// `log10(|result|)` at working precision, truncated toward zero.
    fn magnitude_order(&mut self, result: &Dec) -> Result<i64, Exception> {
        let mut order = result.clone();
        self.cx.abs(&mut order);
        self.cx.log10(&mut order);
        self.check_status()?;
        self.trunc(&mut order);
        // A truncated order always fits an i64; the context's exponent range
        // caps it at six digits.
        order
            .to_standard_notation_string()
            .parse()
            .map_err(|_| Exception::Overflow)
    }

    /// `trunc(result * 10^-exponent)` as an arbitrary-precision integer.
    fn extract_mantissa(&mut self, result: &Dec, exponent: i64) -> Result<BigInt, Exception> {
        let shift = self
            .cx
            .parse((-exponent).to_string())
            .map_err(|_| Exception::InvalidOperation)?;
        let mut mantissa = result.clone();
        // Scaling by a power of the base only moves the decimal exponent;
        // no digits are lost ahead of the truncation.
        self.cx.scaleb(&mut mantissa, &shift);
        self.check_status()?;
        self.trunc(&mut mantissa);
        // After rounding to an integral value the standard notation is a
        // plain digit string; a negative zero renders as `-0`, which integer
        // parsing accepts.
        mantissa
            .to_standard_notation_string()
            .parse()
            .map_err(|_| Exception::InvalidOperation)
    }

    /// Rounds to an integral value, toward zero. Intermediate arithmetic
    /// stays on half-even; the two truncation points are the only places
    /// that use a directed mode.
    fn trunc(&mut self, value: &mut Dec) {
        self.cx.set_rounding(Rounding::Down);
        self.cx.round(value);
        self.cx.set_rounding(Rounding::HalfEven);
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_traits::pow;

    use pair::FloatPair;
    use {Emulator, Op};

    /// Runs a value through the pipeline via `value + 0`, which leaves the
    /// value itself untouched and exercises only the normalizer.
    fn normalize_value(mantissa: i64, exponent: i64, large_result: bool) -> FloatPair {
        let mut emulator = Emulator::new();
        emulator
            .compute(
                Op::Add,
                &FloatPair::new(mantissa, exponent),
                &FloatPair::from_integer(0),
                large_result,
            )
            .unwrap()
    }

    fn ten_pow(power: usize) -> BigInt {
        pow(BigInt::from(10), power)
    }

    #[test]
    fn unit_value_fills_small_budget() {
        assert_eq!(normalize_value(1, 0, false), FloatPair::new(ten_pow(37), -37));
    }

    #[test]
    fn zero_counts_as_one_digit() {
        // order 0, digit count 1, exponent 1 - 38.
        assert_eq!(normalize_value(0, 0, false), FloatPair::new(0, -37));
    }

    #[test]
    fn negative_value_keeps_sign() {
        assert_eq!(
            normalize_value(-5, 0, false),
            FloatPair::new(-5 * ten_pow(37), -37)
        );
    }

    #[test]
    fn sub_unity_power_of_ten() {
        // 0.1: the order -1 is exact, digit count 0.
        assert_eq!(normalize_value(1, -1, false), FloatPair::new(ten_pow(37), -38));
    }

    #[test]
    fn sub_unity_extra_decrement() {
        // 0.01: digit count -1 takes the extra decrement to -2, and the
        // resulting mantissa spans 39 digits. Idiosyncratic, but normative.
        assert_eq!(normalize_value(1, -2, false), FloatPair::new(ten_pow(38), -40));
    }

    #[test]
    fn sub_unity_truncated_order() {
        // 0.05: log10 is -1.30..; truncation toward zero gives order -1 and
        // digit count 0 (a floored order would give -2 and digit count -2).
        assert_eq!(
            normalize_value(5, -2, false),
            FloatPair::new(5 * ten_pow(36), -38)
        );
    }

    #[test]
    fn just_below_power_of_ten() {
        // 0.0999: order truncates to -1 like 0.05.
        assert_eq!(
            normalize_value(999, -4, false),
            FloatPair::new(999 * ten_pow(34), -38)
        );
    }

    #[test]
    fn large_flag_forces_widening() {
        assert_eq!(normalize_value(1, 0, true), FloatPair::new(ten_pow(71), -71));
    }

    #[test]
    fn natural_widening_above_threshold() {
        // 10^20 has 21 digits: exponent -17 > -18 switches budgets.
        assert_eq!(normalize_value(1, 20, false), FloatPair::new(ten_pow(71), -51));
    }

    #[test]
    fn no_widening_at_threshold() {
        // 10^19 has 20 digits: exponent -18 is not above the threshold.
        assert_eq!(normalize_value(1, 19, false), FloatPair::new(ten_pow(37), -18));
    }
}
