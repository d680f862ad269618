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

//! Independent reference converter for the self-check.
//!
//! Deliberately written with a different algorithm than the library: a
//! flat thirteen-pair table including the subtractive digraphs, reduced
//! greedily in one pass. It shares no code with `aquila-core`, which is
//! the point — agreement between the two is the evidence the self-check
//! produces.

/// The thirteen numeral/value pairs, subtractive digraphs included,
/// ordered by descending value.
const NUMERAL_MAP: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Converts `n` to a subtractive Roman numeral by greedy table reduction.
///
/// Callers must pass a value in `1..=3999`; the driver only feeds it the
/// range it iterates.
pub fn to_roman(mut n: u16) -> String {
    let mut roman = String::new();
    for (numeral, value) in NUMERAL_MAP {
        while n >= value {
            roman.push_str(numeral);
            n -= value;
        }
    }
    roman
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(399), "CCCXCIX");
        assert_eq!(to_roman(1984), "MCMLXXXIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
    }
}
