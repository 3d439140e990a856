//! Command-line surface for the `guc` binary.

use clap::Parser;
use std::num::IntErrorKind;
use thiserror::Error;

/// Add two 32-bit signed integers, wrapping on overflow.
#[derive(Parser, Debug)]
#[clap(name = "guc", version, allow_negative_numbers = true)]
pub struct Opts {
    /// First integer to add
    #[clap(value_parser = parse_operand)]
    pub a: i32,

    /// Second integer to add
    #[clap(value_parser = parse_operand)]
    pub b: i32,

    /// Log operands and result to stderr
    #[clap(long, short)]
    pub verbose: bool,
}

impl Opts {
    /// The sum of both operands.
    pub fn sum(&self) -> i32 {
        crate::add(self.a, self.b)
    }

    /// Log filter to use when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// An operand that could not be read as an `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("operand is empty")]
    Empty,
    #[error("operand {value:?} does not fit in a 32-bit signed integer")]
    OutOfRange { value: String },
    #[error("operand {value:?} is not a decimal integer")]
    Invalid { value: String },
}

/// Parses a decimal operand, ignoring surrounding whitespace.
pub fn parse_operand(s: &str) -> Result<i32, OperandError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(OperandError::Empty);
    }
    trimmed.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OperandError::OutOfRange {
            value: trimmed.to_string(),
        },
        _ => OperandError::Invalid {
            value: trimmed.to_string(),
        },
    })
}
