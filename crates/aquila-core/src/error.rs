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

//! Error types for Roman numeral conversion.

/// The error type for the conversion process.
///
/// Both variants are precondition violations: conversion either fully
/// succeeds or fails before any output is produced, and there is nothing
/// to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanError {
    /// The value lies outside the representable range `1..=3999`. Carries
    /// the offending value, clamped to `i64` for inputs too large to
    /// represent exactly.
    OutOfRange(i64),
    /// The value has a fractional part, or is not numerically
    /// representable at all.
    NotInteger,
}

impl std::fmt::Display for RomanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(f, "number {value} out of range (must be 1..3999)")
            }
            Self::NotInteger => write!(f, "decimals can not be converted"),
        }
    }
}

impl std::error::Error for RomanError {}
