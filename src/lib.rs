//! Decimal float128 emulator.
//!
//! This is an emulator for a fixed-precision decimal floating point format
//! whose values are mantissa/exponent pairs (`value = mantissa * 10^exponent`).
//! It computes a reference result for one arithmetic or comparison operation at
//! high working precision and normalizes it to a canonical pair within a fixed
//! digit budget, for comparison against an on-chain implementation of the same
//! format.
//!
//! The arithmetic itself is carried out with 150 significant decimal digits so
//! that the normalization step never has to re-round already-rounded data. The
//! normalizer then picks an exponent that yields either a 38-digit ("small")
//! or 72-digit ("large") mantissa and truncates toward zero.

#![warn(missing_debug_implementations)]

#[macro_use] extern crate log;
extern crate dec;
extern crate hex;
extern crate num_bigint;
extern crate num_traits;

mod abi;
mod emulator;
mod eval;
mod normalize;
mod pair;

pub use abi::*;
pub use emulator::*;
pub use normalize::*;
pub use pair::*;

use std::error;
use std::fmt;
use std::str::FromStr;

/// The exceptions a float128 computation can raise.
///
/// These are *domain* failures: the operation is undefined for its operands or
/// its result cannot be represented. They must never be coerced into a numeric
/// sentinel such as zero or NaN, since that would be indistinguishable from a
/// valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    /// A finite operand was divided by zero.
    ZeroDivide,
    /// Square root of a negative operand.
    NegativeSqrt,
    /// Natural logarithm of a non-positive operand.
    NonPositiveLog,
    /// The result exceeds the exponent range of the decimal backend or the
    /// 256-bit output words.
    Overflow,
    /// The decimal backend reported an invalid operation that was not caught
    /// by an explicit operand check.
    InvalidOperation,
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            Exception::ZeroDivide => "division by zero",
            Exception::NegativeSqrt => "square root of a negative operand",
            Exception::NonPositiveLog => "logarithm of a non-positive operand",
            Exception::Overflow => "result is out of the representable range",
            Exception::InvalidOperation => "invalid decimal operation",
        };
        f.write_str(msg)
    }
}

impl error::Error for Exception {}

/// An operation the emulator can execute.
///
/// The binary arithmetic operations and the comparisons consume both operands;
/// `Sqrt` and `Ln` are unary and ignore the second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `sqrt(a)`
    Sqrt,
    /// `ln(a)`
    Ln,
    /// `a <= b`
    Le,
    /// `a < b`
    Lt,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
}

impl Op {
    /// Returns `true` for the comparison operations, whose 0/1 verdict is
    /// already canonical and skips normalization.
    pub fn is_comparison(&self) -> bool {
        match self {
            Op::Le | Op::Lt | Op::Gt | Op::Ge => true,
            _ => false,
        }
    }

    /// The operation mnemonic as spelled on the command line.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Sqrt => "sqrt",
            Op::Ln => "ln",
            Op::Le => "le",
            Op::Lt => "lt",
            Op::Gt => "gt",
            Op::Ge => "ge",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Unknown operation mnemonics are rejected at the parsing boundary rather
/// than falling through to a zero result, which would be indistinguishable
/// from a genuine zero.
impl FromStr for Op {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, ParseOpError> {
        match s {
            "mul" => Ok(Op::Mul),
            "div" => Ok(Op::Div),
            "add" => Ok(Op::Add),
            "sub" => Ok(Op::Sub),
            "sqrt" => Ok(Op::Sqrt),
            "ln" => Ok(Op::Ln),
            "le" => Ok(Op::Le),
            "lt" => Ok(Op::Lt),
            "gt" => Ok(Op::Gt),
            "ge" => Ok(Op::Ge),
            _ => Err(ParseOpError { op: s.to_string() }),
        }
    }
}

/// An operation mnemonic that is not in the recognized set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOpError {
    op: String,
}

impl fmt::Display for ParseOpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unsupported operation `{}`", self.op)
    }
}

impl error::Error for ParseOpError {}
