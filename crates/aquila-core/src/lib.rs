// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Aquila Core
//!
//! **Rule-based decimal→Roman numeral conversion.**
//!
//! This crate converts positive integers in `1..=3999` into their Roman
//! numeral representation, optionally in the purely additive form that
//! predates the subtraction convention (4 as `IIII` instead of `IV`).
//!
//! ## Architecture
//!
//! The crate is deliberately table-driven. All behavior flows from one
//! seven-entry constant:
//!
//! * **`digit`**: The digit alphabet — symbol, value, and optional
//!   subtraction targets per entry, ordered by strictly decreasing value.
//! * **`rewrite`**: The six contraction rules (`IIII` → `IV`, `VIIII` →
//!   `IX`, …), *derived* from the digit table rather than written out, and
//!   applied as prioritized literal replacements.
//! * **`convert`**: The two-phase algorithm — greedy largest-denomination
//!   reduction per decimal digit place, interleaved with the contraction
//!   pass — behind a small config struct and two convenience functions.
//! * **`error`**: The flat error enum for the two precondition violations.
//!
//! ## Design Philosophy
//!
//! 1.  **Derive, don't duplicate**: The subtractive pairs are computed from
//!     the digit table, so the two never drift apart.
//! 2.  **Fail-fast**: Inputs are validated eagerly with distinct error
//!     kinds; conversion never returns a partial numeral.
//! 3.  **Share freely**: All tables are immutable after construction, so
//!     conversion is a pure function that any number of threads may call
//!     without locking.
//!
//! ## Example
//!
//! ```rust
//! use aquila_core::{to_roman, to_roman_additive, RomanError};
//!
//! assert_eq!(to_roman(1984).unwrap(), "MCMLXXXIV");
//! assert_eq!(to_roman_additive(1984).unwrap(), "MDCCCCLXXXIIII");
//! assert_eq!(to_roman(4000), Err(RomanError::OutOfRange(4000)));
//! ```

pub mod convert;
pub mod digit;
pub mod error;
pub mod rewrite;

pub use convert::{to_roman, to_roman_additive, RomanConverter, MAX_VALUE, MIN_VALUE};
pub use digit::{DigitRule, DIGIT_TABLE};
pub use error::RomanError;
pub use rewrite::{subtraction_rules, RewriteRule};
