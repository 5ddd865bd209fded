//! Four-function arithmetic, divide-by-zero policies, and parity.
//!
//! Every operation takes `f64` operands and never fails fatally. Division by
//! zero is intercepted explicitly: a diagnostic is reported and the NaN
//! sentinel is returned, instead of letting IEEE division yield infinity.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::models::CalculationReport;

/// Errors raised by arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

/// How [`Calculator::divide`] handles a zero divisor.
///
/// Both policies report one diagnostic and return NaN; they differ in how the
/// condition travels and in the wording of the diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// Raise [`ArithmeticError::DivisionByZero`], catch it, report its message.
    #[default]
    Recovered,
    /// Branch on the divisor and report a fixed error line.
    Checked,
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionPolicy::Recovered => write!(f, "recovered"),
            DivisionPolicy::Checked => write!(f, "checked"),
        }
    }
}

impl std::str::FromStr for DivisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recovered" => Ok(DivisionPolicy::Recovered),
            "checked" => Ok(DivisionPolicy::Checked),
            other => Err(format!(
                "unknown division policy: '{other}'. Supported: recovered, checked"
            )),
        }
    }
}

/// Parity of a value under floating-point remainder semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `value` with [`is_even`].
    pub fn of(value: f64) -> Self {
        if is_even(value) { Parity::Even } else { Parity::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, refusing a zero divisor (`0.0` and `-0.0`).
pub fn try_divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// `true` when `value % 2.0 == 0.0`.
///
/// Rust's `%` on floats keeps the sign of the dividend, so `-4.0` is even
/// (remainder `-0.0`). Non-integral values are simply odd unless their
/// remainder happens to be zero: `4.5 % 2.0 == 0.5`. NaN and infinities are
/// never even.
pub fn is_even(value: f64) -> bool {
    value % 2.0 == 0.0
}

/// Calculator configured with a divide-by-zero policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    policy: DivisionPolicy,
}

impl Calculator {
    pub fn new(policy: DivisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DivisionPolicy {
        self.policy
    }

    /// Divide `a` by `b`. A zero divisor reports one diagnostic and yields NaN.
    pub fn divide(&self, a: f64, b: f64, diagnostics: &Diagnostics) -> f64 {
        match self.policy {
            DivisionPolicy::Recovered => match try_divide(a, b) {
                Ok(quotient) => quotient,
                Err(e) => {
                    diagnostics.report(&e.to_string());
                    f64::NAN
                }
            },
            DivisionPolicy::Checked => {
                if b == 0.0 {
                    diagnostics.report("Error: Cannot divide by zero.");
                    return f64::NAN;
                }
                a / b
            }
        }
    }

    /// Run all four operations on one operand pair, plus the parity of the sum.
    pub fn evaluate(&self, a: f64, b: f64, diagnostics: &Diagnostics) -> CalculationReport {
        let already_reported = diagnostics.lines().len();

        let sum = add(a, b);
        let quotient = self.divide(a, b, diagnostics);

        CalculationReport {
            a,
            b,
            sum,
            difference: subtract(a, b),
            product: multiply(a, b),
            quotient,
            parity: Parity::of(sum),
            diagnostics: diagnostics.lines().split_off(already_reported),
        }
    }
}
