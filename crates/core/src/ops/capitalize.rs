// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String capitalization.

/// Upper-case the first character of `s`, leaving the rest unchanged.
///
/// The uppercase mapping is the full Unicode one, so a single character may
/// expand (`"ßeta"` becomes `"SSeta"`). The tail is never lower-cased.
/// Empty input yields an empty string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[path = "capitalize_tests.rs"]
mod tests;
