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

//! Demonstration driver for the aquila converter.
//!
//! Running with no arguments cross-checks the rule-based converter against
//! the independent [`reference`] implementation over the whole working
//! range, printing a line per mismatch and a final verdict, then shows a
//! handful of fixed conversions. The exit code reflects the self-check.

mod reference;

use aquila_core::{to_roman, to_roman_additive, RomanError};
use std::process::ExitCode;

/// Cross-checks the rule-based converter against the reference table
/// converter. Returns true when every value agrees.
fn self_check() -> Result<bool, RomanError> {
    let mut errors = 0u32;
    for n in 1..3999u16 {
        let expected = reference::to_roman(n);
        let converted = to_roman(n)?;
        if converted != expected {
            errors += 1;
            println!("error convert {n} to roman number {expected}");
        }
    }
    Ok(errors == 0)
}

fn run() -> Result<bool, RomanError> {
    let passed = self_check()?;
    if passed {
        println!("test succeed");
    } else {
        println!("test failed");
    }
    println!("1984 => {} (no subtraction rule)", to_roman_additive(1984)?);
    println!("1984 => {}", to_roman(1984)?);
    println!("3991 => {}", to_roman(3991)?);
    println!("399 => {}", to_roman(399)?);
    Ok(passed)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("conversion failed unexpectedly: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        assert!(self_check().unwrap());
    }
}
