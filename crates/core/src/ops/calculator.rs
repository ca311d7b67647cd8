// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic over `f64` pairs.
//!
//! Four independent operations. Only division carries a failure case; the
//! other three are total and follow IEEE 754 arithmetic untouched.

use thiserror::Error;

/// Arithmetic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor compared equal to zero.
    #[error("Error: Division by zero")]
    DivisionByZero,
}

/// Add `b` to `a`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply `a` by `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Returns [`CalcError::DivisionByZero`] when `b` compares equal to zero
/// (IEEE comparison, so `-0.0` counts too). The error's `Display` form is
/// the fixed sentinel `"Error: Division by zero"`.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod tests;
