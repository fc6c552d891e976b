//! The emulator core: the working-precision context and the computation
//! pipeline (reconstruct operands, evaluate, normalize).

use dec::{Context, Decimal, Rounding};
use std::fmt;

use eval::Evaluated;
use pair::FloatPair;
use Exception;
use Op;

/// Significant decimal digits carried through intermediate arithmetic. Enough
/// headroom to evaluate one operation exactly (or to full working precision)
/// before normalizing, so the normalizer never re-rounds rounded data.
pub const WORKING_PRECISION: usize = 150;

/// Coefficient units backing the working decimals; `dec` packs 3 digits per
/// unit, so 50 units hold the full 150-digit working precision.
const UNITS: usize = 50;

/// The working decimal type.
pub(crate) type Dec = Decimal<UNITS>;

/// Adjusted-exponent range of the working context. The backend's math
/// functions (`ln`, `log10`) are only defined for contexts clamped to its
/// math range of +-999,999; the default +-999,999,999 is outside it and
/// makes them signal an invalid context.
const MAX_EXPONENT: isize = 999_999;
const MIN_EXPONENT: isize = -999_999;

/// The float128 emulator.
///
/// Owns the decimal context that fixes the working precision and the rounding
/// behavior of intermediate arithmetic. Owning the context per emulator makes
/// the precision explicit and keeps concurrent computations from interfering
/// through hidden global state.
pub struct Emulator {
    pub(crate) cx: Context<Dec>,
}

impl Emulator {
    /// Creates an emulator with the fixed 150-digit working precision and
    /// the exponent range clamped to the backend's math range.
    ///
    /// Intermediate arithmetic rounds half-even; the normalizer switches to
    /// a directed mode only for its two truncation steps.
    pub fn new() -> Emulator {
        let mut cx = Context::<Dec>::default();
        // 150 digits always fit the 50-unit coefficient.
        cx.set_precision(WORKING_PRECISION).unwrap();
        cx.set_max_exponent(MAX_EXPONENT).unwrap();
        cx.set_min_exponent(MIN_EXPONENT).unwrap();
        cx.set_rounding(Rounding::HalfEven);
        Emulator { cx }
    }

    /// Executes one operation on two operand pairs and returns the normalized
    /// result pair.
    ///
    /// # Parameters
    ///
    /// * `op`: The operation to evaluate. `Sqrt` and `Ln` ignore `b`.
    /// * `a`, `b`: The operands, as raw (not necessarily normalized) pairs.
    /// * `large_result`: Forces the 72-digit mantissa budget regardless of
    ///   the result's natural scale.
    pub fn compute(
        &mut self,
        op: Op,
        a: &FloatPair,
        b: &FloatPair,
        large_result: bool,
    ) -> Result<FloatPair, Exception> {
        self.cx.clear_status();

        let a = self.reconstruct(a)?;
        let b = self.reconstruct(b)?;
        trace!("compute: op={} a={} b={} large_result={}", op, a, b, large_result);

        let result = match self.evaluate(op, a, b)? {
            // Comparison verdicts are already canonical: the 0/1 integer
            // keeps exponent 0 and skips normalization.
            Evaluated::Verdict(holds) => FloatPair::from_integer(holds as i64),
            Evaluated::Number(result) => self.normalize(result, large_result)?,
        };
        debug!("compute: {} -> {}", op, result);
        Ok(result)
    }

    /// Rebuilds the exact decimal value `mantissa * 10^exponent` of one
    /// operand.
    ///
    /// Scaling an integer by a power of the base is exact in a decimal
    /// representation, up to the working precision; operands with more than
    /// 150 significant digits are rounded half-even on entry.
    fn reconstruct(&mut self, pair: &FloatPair) -> Result<Dec, Exception> {
        let literal = format!("{}E{}", pair.mantissa, pair.exponent);
        let value = self
            .cx
            .parse(literal)
            .map_err(|_| Exception::InvalidOperation)?;
        // Exponents beyond the backend's range surface here as an overflow
        // instead of silently clamping.
        self.check_status()?;
        Ok(value)
    }

    /// Maps exceptional conditions accumulated in the decimal status to the
    /// corresponding exception. Backstop for anything the explicit operand
    /// checks in `evaluate` did not reject up front.
    pub(crate) fn check_status(&mut self) -> Result<(), Exception> {
        let status = self.cx.status();
        if status.division_by_zero() {
            Err(Exception::ZeroDivide)
        } else if status.invalid_context() || status.insufficient_storage() {
            // A misconfigured or starved backend returns NaN; it must not be
            // reported as a numeric overflow further down the pipeline.
            Err(Exception::InvalidOperation)
        } else if status.overflow() {
            Err(Exception::Overflow)
        } else if status.invalid_operation() {
            Err(Exception::InvalidOperation)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Emulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Emulator")
            .field("precision", &WORKING_PRECISION)
            .finish()
    }
}
