// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The five core operations.
//!
//! One module per operation, nothing shared between them. Each is a pure
//! single-step transformation, so every function here is reentrant and
//! thread-safe by construction.

pub mod analyze;
pub mod caesar;
pub mod calculator;
pub mod capitalize;
pub mod reverse;

pub use analyze::{Summary, analyze};
pub use caesar::caesar_cipher;
pub use calculator::{CalcError, add, divide, multiply, subtract};
pub use capitalize::capitalize;
pub use reverse::reverse;
