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

//! The fixed digit alphabet of the Roman numeral system.
//!
//! The entire system is driven by [`DIGIT_TABLE`], a seven-entry constant
//! mapping each Roman symbol to its decimal value. Entries are ordered by
//! strictly decreasing value so that the greedy reduction in the converter
//! can pick the largest fitting denomination with a single linear scan.
//!
//! Three entries additionally carry a pair of *subtraction targets*: the
//! symbols that absorb a four-fold repetition of the entry into a
//! subtractive pair (`IIII` → `IV`, `VIIII` → `IX`, and so on for `X` and
//! `C`). Only the powers of ten below the table maximum (`C`, `X`, `I`) may
//! legally repeat four times before contraction; `V`, `L` and `D` never
//! appear subtractively, and `M` has nothing larger to attach to.

/// A single entry of the Roman digit alphabet.
///
/// The type is a plain value: a symbol, its decimal value, and an optional
/// ordered pair of subtraction targets `(four, nine)` — the symbol combined
/// with this one in the "four" contraction and the symbol combined in the
/// "nine" contraction. For `I` that pair is `('V', 'X')`, yielding `IV`
/// and `IX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRule {
    symbol: char,
    value: u16,
    targets: Option<(char, char)>,
}

impl DigitRule {
    #[inline]
    const fn new(symbol: char, value: u16, targets: Option<(char, char)>) -> Self {
        Self {
            symbol,
            value,
            targets,
        }
    }

    /// The Roman symbol of this entry.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The decimal value of this entry.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// The subtraction targets `(four, nine)` of this entry, if it has any.
    #[inline]
    pub const fn targets(&self) -> Option<(char, char)> {
        self.targets
    }
}

/// The seven digit rules, ordered by strictly decreasing value.
///
/// The ordering is load-bearing: [`largest_fitting`] relies on the first
/// fitting entry being the largest one. Read-only after construction, so
/// the table is safe to share across any number of concurrent callers.
pub static DIGIT_TABLE: [DigitRule; 7] = [
    DigitRule::new('M', 1000, None),
    DigitRule::new('D', 500, None),
    DigitRule::new('C', 100, Some(('D', 'M'))),
    DigitRule::new('L', 50, None),
    DigitRule::new('X', 10, Some(('L', 'C'))),
    DigitRule::new('V', 5, None),
    DigitRule::new('I', 1, Some(('V', 'X'))),
];

/// Looks up the decimal value of a digit symbol.
#[inline]
pub(crate) fn symbol_value(symbol: char) -> Option<u16> {
    DIGIT_TABLE
        .iter()
        .find(|rule| rule.symbol() == symbol)
        .map(|rule| rule.value())
}

/// Returns the digit rule with the largest value not exceeding `remaining`.
///
/// # Panics
///
/// Panics if `remaining` is zero. Every positive remainder is covered
/// because the table ends with `I = 1`.
#[inline]
pub(crate) fn largest_fitting(remaining: u16) -> &'static DigitRule {
    DIGIT_TABLE
        .iter()
        .find(|rule| rule.value() <= remaining)
        .expect("digit table covers every positive remainder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_strictly_decrease() {
        for pair in DIGIT_TABLE.windows(2) {
            assert!(
                pair[0].value() > pair[1].value(),
                "{} must outrank {}",
                pair[0].symbol(),
                pair[1].symbol()
            );
        }
    }

    #[test]
    fn test_symbols_unique() {
        for (i, a) in DIGIT_TABLE.iter().enumerate() {
            for b in &DIGIT_TABLE[i + 1..] {
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn test_targets_only_on_repeatable_powers_of_ten() {
        for rule in &DIGIT_TABLE {
            match rule.symbol() {
                'C' => assert_eq!(rule.targets(), Some(('D', 'M'))),
                'X' => assert_eq!(rule.targets(), Some(('L', 'C'))),
                'I' => assert_eq!(rule.targets(), Some(('V', 'X'))),
                _ => assert_eq!(rule.targets(), None),
            }
        }
    }

    #[test]
    fn test_symbol_value() {
        assert_eq!(symbol_value('M'), Some(1000));
        assert_eq!(symbol_value('V'), Some(5));
        assert_eq!(symbol_value('Q'), None);
    }

    #[test]
    fn test_largest_fitting() {
        assert_eq!(largest_fitting(1).symbol(), 'I');
        assert_eq!(largest_fitting(4).symbol(), 'I');
        assert_eq!(largest_fitting(5).symbol(), 'V');
        assert_eq!(largest_fitting(9).symbol(), 'V');
        assert_eq!(largest_fitting(40).symbol(), 'X');
        assert_eq!(largest_fitting(999).symbol(), 'D');
        assert_eq!(largest_fitting(3999).symbol(), 'M');
    }

    #[test]
    #[should_panic(expected = "positive remainder")]
    fn test_largest_fitting_zero_panics() {
        largest_fitting(0);
    }
}
