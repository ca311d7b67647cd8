//! Small pure text and number utilities with explicit failure contracts.
//!
//! Five independent operations, no shared state, no I/O:
//!
//! - [`capitalize`]: upper-case the first character, leave the rest alone
//! - [`reverse`]: reverse a string one Unicode scalar value at a time
//! - [`ops::calculator`]: arithmetic over `f64` with a typed division error
//! - [`caesar_cipher`]: rotate ASCII letters, pass everything else through
//! - [`analyze`]: summary statistics for a slice of numbers
//!
//! Every operation resolves failure inside the call instead of panicking.
//! Invalid input maps to a neutral empty value or a typed error, so callers
//! branch on the return value and nothing unwinds.
//!
//! # Examples
//!
//! ```
//! use temper::{CalcError, Summary, analyze, caesar_cipher, capitalize, divide};
//!
//! assert_eq!(capitalize("hello"), "Hello");
//! assert_eq!(caesar_cipher("xyz", 2), "zab");
//! assert_eq!(divide(6.0, 0.0), Err(CalcError::DivisionByZero));
//! assert_eq!(
//!     analyze(&[1.0, 2.0, 3.0, 4.0]),
//!     Some(Summary { average: 2.5, min: 1.0, max: 4.0, length: 4 })
//! );
//! ```
//!
//! Callers holding dynamically shaped data can go through the [`value`]
//! module instead, which accepts [`serde_json::Value`] and maps input of the
//! wrong shape to the same empty results rather than failing.

pub mod ops;
pub mod value;

pub use ops::calculator::{CalcError, add, divide, multiply, subtract};
pub use ops::{Summary, analyze, caesar_cipher, capitalize, reverse};
