use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// A float128 value decomposed into its components.
///
/// The number represented is:
///
/// ```notrust
/// mantissa * 10^exponent
/// ```
///
/// The mantissa carries the significant digits and the sign; the exponent is a
/// plain decimal scale. A *normalized* pair produced by the emulator keeps the
/// mantissa within a 38- or 72-digit budget, but the type itself places no
/// restriction on either component, so arbitrary operands can be expressed.
#[derive(Clone, PartialEq, Eq)]
pub struct FloatPair {
    pub mantissa: BigInt,
    pub exponent: i64,
}

impl FloatPair {
    pub fn new<M: Into<BigInt>>(mantissa: M, exponent: i64) -> Self {
        Self {
            mantissa: mantissa.into(),
            exponent,
        }
    }

    /// An integer value that is already canonical (exponent 0). Comparison
    /// verdicts are represented this way.
    pub fn from_integer<M: Into<BigInt>>(value: M) -> Self {
        Self::new(value, 0)
    }

    /// Returns `true` if the represented value is zero, regardless of the
    /// exponent.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }
}

impl fmt::Display for FloatPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

impl fmt::Debug for FloatPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl From<(i64, i64)> for FloatPair {
    fn from((mantissa, exponent): (i64, i64)) -> Self {
        Self::new(mantissa, exponent)
    }
}
