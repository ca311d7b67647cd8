// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String reversal.

/// Reverse `s` one Unicode scalar value at a time.
///
/// Reversal is not grapheme-aware: a combining mark is reordered
/// independently of its base character and ends up attached to the
/// neighboring one. Reversing twice restores the original input.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
#[path = "reverse_tests.rs"]
mod tests;
