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

//! The two-phase decimal→Roman conversion.
//!
//! Phase one decomposes the input into decimal digit places and reduces
//! each place value greedily over the digit table, appending one symbol
//! per step. Phase two is the contraction pass from [`crate::rewrite`],
//! re-applied after every appended symbol, which folds four-fold
//! repetitions into their subtractive pairs (`IIII` → `IV`). Disabling the
//! second phase yields the purely additive form
//! (1984 → `MDCCCCLXXXIIII` instead of `MCMLXXXIV`).
//!
//! The conversion is a pure function over its input and the static tables:
//! no state survives a call, and concurrent callers need no locking.
//!
//! # Examples
//!
//! ```rust
//! use aquila_core::convert::{to_roman, to_roman_additive};
//!
//! assert_eq!(to_roman(1984).unwrap(), "MCMLXXXIV");
//! assert_eq!(to_roman_additive(1984).unwrap(), "MDCCCCLXXXIIII");
//! ```

use crate::{digit::largest_fitting, error::RomanError, rewrite::contract};
use num_traits::ToPrimitive;
use smallvec::SmallVec;

/// The smallest convertible value.
pub const MIN_VALUE: u16 = 1;

/// The largest convertible value.
pub const MAX_VALUE: u16 = 3999;

/// A configurable decimal→Roman converter.
///
/// The only knob is whether the subtraction contractions run; the default
/// produces standard subtractive numerals.
///
/// # Examples
///
/// ```rust
/// use aquila_core::convert::RomanConverter;
///
/// let additive = RomanConverter::new().ignore_subtraction(true);
/// assert_eq!(additive.convert(399).unwrap(), "CCCLXXXXVIIII");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RomanConverter {
    ignore_subtraction: bool,
}

impl RomanConverter {
    /// Creates a converter producing standard subtractive numerals.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the contraction pass is skipped. When skipped,
    /// the output is the maximal additive expansion (only repeated
    /// symbols, e.g. `VIIII` for 9).
    #[inline]
    pub fn ignore_subtraction(mut self, ignore: bool) -> Self {
        self.ignore_subtraction = ignore;
        self
    }

    /// Converts `value` to a Roman numeral.
    ///
    /// Accepts any numeric type. The preconditions of the original
    /// contract stay observable regardless of the input type: values
    /// outside `1..=3999` fail with [`RomanError::OutOfRange`], and values
    /// with a fractional part fail with [`RomanError::NotInteger`].
    pub fn convert<T>(&self, value: T) -> Result<String, RomanError>
    where
        T: ToPrimitive,
    {
        let n = checked_value(value)?;

        // Decimal digits of n, most significant first.
        let mut digits: SmallVec<[u16; 4]> = SmallVec::new();
        let mut rest = n;
        while rest > 0 {
            digits.push(rest % 10);
            rest /= 10;
        }
        digits.reverse();

        let mut roman = String::new();
        for (index, digit) in digits.iter().enumerate() {
            let exponent = (digits.len() - index - 1) as u32;
            let mut place = digit * 10u16.pow(exponent);
            while place > 0 {
                let rule = largest_fitting(place);
                place -= rule.value();
                roman.push(rule.symbol());
                if !self.ignore_subtraction {
                    contract(&mut roman);
                }
            }
        }
        Ok(roman)
    }
}

/// Validates the conversion preconditions and narrows the input.
///
/// The range check runs first, then the integrality check, matching the
/// documented precondition order (4000.5 is out of range, 1.5 is not an
/// integer).
fn checked_value<T>(value: T) -> Result<u16, RomanError>
where
    T: ToPrimitive,
{
    let wide = match value.to_f64() {
        Some(wide) => wide,
        None => return Err(RomanError::NotInteger),
    };
    // Open interval (0, 4000): fractional values inside it fall through to
    // the integrality check. NaN lands here as well; the saturating cast
    // keeps the payload finite.
    if !(wide > 0.0 && wide < 4000.0) {
        return Err(RomanError::OutOfRange(wide as i64));
    }
    if wide.fract() != 0.0 {
        return Err(RomanError::NotInteger);
    }
    Ok(wide as u16)
}

/// Converts `value` to a standard subtractive Roman numeral.
///
/// # Examples
///
/// ```rust
/// use aquila_core::convert::to_roman;
///
/// assert_eq!(to_roman(3991).unwrap(), "MMMCMXCI");
/// ```
#[inline]
pub fn to_roman<T>(value: T) -> Result<String, RomanError>
where
    T: ToPrimitive,
{
    RomanConverter::new().convert(value)
}

/// Converts `value` to the purely additive form, with no subtraction
/// contractions applied.
#[inline]
pub fn to_roman_additive<T>(value: T) -> Result<String, RomanError>
where
    T: ToPrimitive,
{
    RomanConverter::new().ignore_subtraction(true).convert(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::symbol_value;
    use crate::rewrite::subtraction_rules;

    /// Independent decoder used only for cross-checking: a smaller symbol
    /// before a larger one subtracts, everything else adds.
    fn decode(roman: &str) -> i64 {
        let values: Vec<i64> = roman
            .chars()
            .map(|c| i64::from(symbol_value(c).expect("output uses digit symbols only")))
            .collect();
        let mut total = 0;
        for (i, &v) in values.iter().enumerate() {
            if values[i + 1..].first().is_some_and(|&next| next > v) {
                total -= v;
            } else {
                total += v;
            }
        }
        total
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(to_roman_additive(1984).unwrap(), "MDCCCCLXXXIIII");
        assert_eq!(to_roman(1984).unwrap(), "MCMLXXXIV");
        assert_eq!(to_roman(3991).unwrap(), "MMMCMXCI");
        assert_eq!(to_roman(399).unwrap(), "CCCXCIX");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(to_roman(0), Err(RomanError::OutOfRange(0)));
        assert_eq!(to_roman(4000), Err(RomanError::OutOfRange(4000)));
        assert_eq!(to_roman(-7), Err(RomanError::OutOfRange(-7)));
    }

    #[test]
    fn test_not_integer() {
        assert_eq!(to_roman(1.5), Err(RomanError::NotInteger));
        assert_eq!(to_roman(3999.0001), Err(RomanError::NotInteger));
        // Range is checked before integrality.
        assert_eq!(to_roman(4000.5), Err(RomanError::OutOfRange(4000)));
        assert_eq!(to_roman(f64::NAN), Err(RomanError::OutOfRange(0)));
    }

    #[test]
    fn test_whole_floats_convert() {
        assert_eq!(to_roman(1984.0).unwrap(), "MCMLXXXIV");
    }

    #[test]
    fn test_generic_integer_inputs() {
        assert_eq!(to_roman(42u8).unwrap(), "XLII");
        assert_eq!(to_roman(42i16).unwrap(), "XLII");
        assert_eq!(to_roman(42u64).unwrap(), "XLII");
        assert_eq!(to_roman(42i128).unwrap(), "XLII");
    }

    #[test]
    fn test_alphabet_closure() {
        for n in 1..=3999u16 {
            let roman = to_roman(n).unwrap();
            assert!(
                roman.chars().all(|c| "MDCLXVI".contains(c)),
                "{n} produced a foreign symbol: {roman}"
            );
        }
    }

    #[test]
    fn test_round_trip_full_range() {
        for n in 1..=3999u16 {
            let roman = to_roman(n).unwrap();
            assert_eq!(decode(&roman), i64::from(n), "round trip failed for {roman}");
        }
    }

    #[test]
    fn test_additive_form_is_maximal() {
        for n in 1..=3999u16 {
            let additive = to_roman_additive(n).unwrap();
            for rule in subtraction_rules() {
                assert!(
                    !additive.contains(rule.from_pattern()),
                    "{n}: additive form {additive} still contains {}",
                    rule.from_pattern()
                );
            }
        }
    }

    #[test]
    fn test_additive_form_decodes_too() {
        for n in 1..=3999u16 {
            let additive = to_roman_additive(n).unwrap();
            assert_eq!(decode(&additive), i64::from(n));
        }
    }

    #[test]
    fn test_monotone_in_decoded_value() {
        let mut previous = 0;
        for n in 1..=3999u16 {
            let decoded = decode(&to_roman(n).unwrap());
            assert!(decoded > previous, "ordering broken at {n}");
            previous = decoded;
        }
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (1..=3999u16)
                        .map(|n| to_roman(n).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for pair in results.windows(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }
}
