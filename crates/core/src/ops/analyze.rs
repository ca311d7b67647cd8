// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary statistics for numeric slices.

use serde::Serialize;

/// Summary of a non-empty numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Arithmetic mean of all elements.
    pub average: f64,
    /// Smallest element.
    pub min: f64,
    /// Largest element.
    pub max: f64,
    /// Element count.
    pub length: usize,
}

/// Compute [`Summary`] statistics for `values`.
///
/// Returns `None` for an empty slice; the emptiness check runs before the
/// mean so no division by zero can occur. NaN and infinite elements are
/// not special-cased.
///
/// ```
/// use temper::{Summary, analyze};
///
/// assert_eq!(
///     analyze(&[5.0, 10.0, 15.0]),
///     Some(Summary { average: 10.0, min: 5.0, max: 15.0, length: 3 })
/// );
/// assert_eq!(analyze(&[]), None);
/// ```
pub fn analyze(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    Some(Summary {
        average: sum / values.len() as f64,
        min,
        max,
        length: values.len(),
    })
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
