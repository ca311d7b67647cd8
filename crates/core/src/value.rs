// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loosely typed entry points.
//!
//! Callers holding dynamically shaped data (decoded JSON, scripting
//! bridges) get the same transformations with guard behavior instead of
//! type errors: input of the wrong shape maps to a neutral empty result.
//! The typed functions in [`crate::ops`] do the actual work.

use serde_json::{Value, json};

use crate::ops;

/// Upper-case the first character of a string value.
///
/// Returns the empty string when `input` is not a string.
pub fn capitalize(input: &Value) -> String {
    as_text(input, "capitalize").map(ops::capitalize).unwrap_or_default()
}

/// Reverse a string value one Unicode scalar value at a time.
///
/// Returns the empty string when `input` is not a string.
pub fn reverse(input: &Value) -> String {
    as_text(input, "reverse").map(ops::reverse).unwrap_or_default()
}

/// Rotate the ASCII letters of a string value by `shift` positions.
///
/// Returns the empty string when `input` is not a string.
pub fn caesar_cipher(input: &Value, shift: i32) -> String {
    as_text(input, "caesar_cipher")
        .map(|s| ops::caesar_cipher(s, shift))
        .unwrap_or_default()
}

/// Summarize a numeric array value as a JSON object.
///
/// Returns `{"average": .., "min": .., "max": .., "length": ..}` for a
/// non-empty array whose elements are all numbers, and the empty object for
/// everything else: non-arrays, arrays with non-numeric elements, and the
/// empty array. Numeric elements are widened to `f64`.
pub fn analyze_array(input: &Value) -> Value {
    let Some(items) = input.as_array() else {
        tracing::debug!("analyze_array: input is not an array, returning empty object");
        return json!({});
    };

    let mut numbers = Vec::with_capacity(items.len());
    for item in items {
        let Some(n) = item.as_f64() else {
            tracing::debug!("analyze_array: non-numeric element, returning empty object");
            return json!({});
        };
        numbers.push(n);
    }

    match ops::analyze(&numbers) {
        Some(summary) => json!({
            "average": summary.average,
            "min": summary.min,
            "max": summary.max,
            "length": summary.length,
        }),
        None => json!({}),
    }
}

/// Extract text from a value, logging the rejection when the shape is wrong.
fn as_text<'a>(input: &'a Value, op: &str) -> Option<&'a str> {
    let text = input.as_str();
    if text.is_none() {
        tracing::debug!("{}: input is not a string, returning empty output", op);
    }
    text
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
