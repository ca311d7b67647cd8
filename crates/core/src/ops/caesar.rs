// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caesar cipher over ASCII letters.
//!
//! Behavior contract in docs/specs/03-caesar.md.

/// Rotate every ASCII letter in `s` by `shift` positions within its own
/// case's 26-letter alphabet, wrapping at the end. Anything that is not an
/// ASCII letter (digits, punctuation, whitespace, accented letters) passes
/// through verbatim.
///
/// Any `i32` shift is accepted. It is reduced with a Euclidean remainder
/// first, so negative and out-of-range shifts wrap exactly like
/// `shift mod 26` done by hand:
///
/// ```
/// use temper::caesar_cipher;
///
/// assert_eq!(caesar_cipher("hello, world!", 5), "mjqqt, btwqi!");
/// assert_eq!(caesar_cipher("bcd", -1), "abc");
/// assert_eq!(caesar_cipher("abc", 27), caesar_cipher("abc", 1));
/// ```
pub fn caesar_cipher(s: &str, shift: i32) -> String {
    // rem_euclid keeps the offset in 0..26 even for negative shifts
    let offset = shift.rem_euclid(26) as u8;
    s.chars().map(|c| rotate(c, offset)).collect()
}

/// Rotate one character, or return it untouched when it is not an ASCII
/// letter. `offset` must already be reduced to `0..26`.
fn rotate(c: char, offset: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    // 'a'..='z' sits entirely above 'A'..='Z' in ASCII
    let base = if c >= 'a' { b'a' } else { b'A' };
    ((c as u8 - base + offset) % 26 + base) as char
}

#[cfg(test)]
#[path = "caesar_tests.rs"]
mod tests;
