//! Property-based laws for the pure operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEXT LAWS
// =============================================================================

proptest! {
    /// Spec: docs/specs/01-text.md#reverse
    ///
    /// > Reversal is an involution: reversing twice restores the input.
    #[test]
    fn reversing_twice_restores_any_string(s in ".*") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    /// Spec: docs/specs/01-text.md#capitalize
    ///
    /// > every remaining character is passed through unchanged.
    #[test]
    fn capitalize_only_touches_the_first_char(s in "[ -~]{1,64}") {
        let out = capitalize(&s);
        prop_assert_eq!(out.chars().count(), s.chars().count());
        prop_assert_eq!(&out[1..], &s[1..]);
    }

    /// Spec: docs/specs/01-text.md#capitalize
    ///
    /// > The first character is upper-cased with the full Unicode mapping
    #[test]
    fn lowercase_leads_become_uppercase(s in "[a-z][ -~]{0,32}") {
        let first = capitalize(&s).chars().next().unwrap();
        prop_assert!(first.is_ascii_uppercase());
    }
}

// =============================================================================
// CIPHER LAWS
// =============================================================================

proptest! {
    /// Spec: docs/specs/03-caesar.md#shift-normalization
    ///
    /// > Negative shifts wrap downward; shifts beyond 26 reduce to their
    /// > remainder.
    #[test]
    fn shifting_back_undoes_any_shift(s in ".*", k in -1_000i32..1_000) {
        prop_assert_eq!(caesar_cipher(&caesar_cipher(&s, k), -k), s);
    }

    /// Spec: docs/specs/03-caesar.md#shift-normalization
    ///
    /// > A shift congruent to zero is the identity.
    #[test]
    fn shifts_are_congruent_modulo_26(s in ".*", k in -1_000i32..1_000) {
        prop_assert_eq!(caesar_cipher(&s, k), caesar_cipher(&s, k + 26));
    }

    /// Spec: docs/specs/03-caesar.md#rotation
    ///
    /// > Every character maps to exactly one character, so rotation
    /// > preserves length.
    #[test]
    fn rotation_never_changes_the_char_count(s in ".*", k in any::<i32>()) {
        prop_assert_eq!(caesar_cipher(&s, k).chars().count(), s.chars().count());
    }
}

// =============================================================================
// CALCULATOR LAWS
// =============================================================================

proptest! {
    /// Spec: docs/specs/02-calculator.md#division
    ///
    /// > For any nonzero divisor the result is the plain IEEE 754 quotient.
    #[test]
    fn divide_agrees_with_the_operator(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        prop_assume!(b != 0.0);
        prop_assert_eq!(divide(a, b), Ok(a / b));
    }

    /// Spec: docs/specs/02-calculator.md#division
    ///
    /// > A zero divisor is reported as a tagged error, never a panic and
    /// > never an infinity.
    #[test]
    fn any_numerator_over_zero_is_an_error(a in -1e9f64..1e9) {
        prop_assert_eq!(divide(a, 0.0), Err(CalcError::DivisionByZero));
    }
}

// =============================================================================
// ANALYSIS LAWS
// =============================================================================

proptest! {
    /// Spec: docs/specs/04-analysis.md#summary
    ///
    /// > The mean always lies between the extremes, and both extremes are
    /// > elements of the input.
    #[test]
    fn summaries_bound_their_inputs(xs in prop::collection::vec(-1_000i32..1_000, 1..50)) {
        let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
        let s = analyze(&xs).unwrap();

        prop_assert_eq!(s.length, xs.len());
        prop_assert!(s.min <= s.average && s.average <= s.max);
        prop_assert!(xs.contains(&s.min) && xs.contains(&s.max));
    }
}
