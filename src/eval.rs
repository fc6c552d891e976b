//! Operator evaluation at working precision.

use std::cmp::Ordering;

use emulator::{Dec, Emulator};
use Exception;
use Op;

/// What an evaluation produced: a numeric result that still needs
/// normalization, or a comparison verdict that is already canonical.
#[derive(Debug)]
pub(crate) enum Evaluated {
    Number(Dec),
    Verdict(bool),
}

impl Emulator {
    /// Applies `op` to the reconstructed operands.
    ///
    /// Domain errors (division by zero, square root of a negative operand,
    /// logarithm of a non-positive operand) are rejected before touching the
    /// decimal backend, so they can never leak out as a NaN or an infinity
    /// masquerading as a result.
    pub(crate) fn evaluate(&mut self, op: Op, a: Dec, b: Dec) -> Result<Evaluated, Exception> {
        let result = match op {
            Op::Mul => {
                let mut r = a;
                self.cx.mul(&mut r, &b);
                r
            }
            Op::Div => {
                if b.is_zero() {
                    return Err(Exception::ZeroDivide);
                }
                let mut r = a;
                self.cx.div(&mut r, &b);
                r
            }
            Op::Add => {
                let mut r = a;
                self.cx.add(&mut r, &b);
                r
            }
            Op::Sub => {
                let mut r = a;
                self.cx.sub(&mut r, &b);
                r
            }
            Op::Sqrt => {
                // A negative zero operand is still zero; only true negatives
                // are out of domain.
                if a.is_negative() && !a.is_zero() {
                    return Err(Exception::NegativeSqrt);
                }
                let mut r = a;
                self.cx.sqrt(&mut r);
                r
            }
            Op::Ln => {
                if a.is_zero() || a.is_negative() {
                    return Err(Exception::NonPositiveLog);
                }
                let mut r = a;
                self.cx.ln(&mut r);
                r
            }
            Op::Le | Op::Lt | Op::Gt | Op::Ge => {
                // Decimal comparison is exact at any precision; finite
                // operands always order.
                let ord = self
                    .cx
                    .partial_cmp(&a, &b)
                    .ok_or(Exception::InvalidOperation)?;
                let holds = match op {
                    Op::Le => ord != Ordering::Greater,
                    Op::Lt => ord == Ordering::Less,
                    Op::Gt => ord == Ordering::Greater,
                    Op::Ge => ord != Ordering::Less,
                    _ => unreachable!(),
                };
                trace!("evaluate: {} -> {}", op, holds);
                return Ok(Evaluated::Verdict(holds));
            }
        };

        self.check_status()?;
        trace!("evaluate: {} -> {}", op, result);
        Ok(Evaluated::Number(result))
    }
}
