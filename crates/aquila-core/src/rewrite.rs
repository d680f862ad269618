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

//! Subtraction-rule derivation and the contraction pass.
//!
//! The six rewrite rules are not written out by hand; they are derived from
//! the digit rules that carry subtraction targets. For a digit `ch` with
//! value `v` and targets `(four, nine)`, two rules fall out:
//!
//! - `chchchch` → `ch·four` at priority `value(four)` (e.g. `IIII` → `IV`),
//! - `four·chchchch` → `ch·nine` at priority `value(nine)` (e.g. `VIIII` → `IX`).
//!
//! Rules are sorted by descending priority before use. The ordering is a
//! correctness invariant, not a tuning knob: the `CM` contraction must run
//! before `CD` could misread `DCCCC`, and likewise down the table. The
//! table is derived once per process and shared read-only afterwards.

use crate::digit::{symbol_value, DIGIT_TABLE};
use std::sync::OnceLock;

/// A single contraction of a four-fold symbol repetition into its
/// subtractive pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    from: String,
    to: String,
    priority: u16,
}

impl RewriteRule {
    /// The literal substring this rule replaces.
    #[inline]
    pub fn from_pattern(&self) -> &str {
        &self.from
    }

    /// The replacement text.
    #[inline]
    pub fn to_pattern(&self) -> &str {
        &self.to
    }

    /// The decimal value of the contracted pair, used for ordering.
    #[inline]
    pub const fn priority(&self) -> u16 {
        self.priority
    }
}

impl std::fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.from, self.to)
    }
}

static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();

/// The derived subtraction rules, highest priority first.
///
/// Built lazily on first use and cached for the lifetime of the process;
/// the slice is immutable and safe to read from any thread.
pub fn subtraction_rules() -> &'static [RewriteRule] {
    RULES.get_or_init(build_rules).as_slice()
}

fn build_rules() -> Vec<RewriteRule> {
    let mut rules = Vec::with_capacity(6);
    for digit in DIGIT_TABLE.iter() {
        let Some((four, nine)) = digit.targets() else {
            continue;
        };
        let symbol = digit.symbol();
        let run: String = std::iter::repeat(symbol).take(4).collect();
        rules.push(RewriteRule {
            from: run.clone(),
            to: format!("{symbol}{four}"),
            priority: symbol_value(four).expect("subtraction targets are digit symbols"),
        });
        rules.push(RewriteRule {
            from: format!("{four}{run}"),
            to: format!("{symbol}{nine}"),
            priority: symbol_value(nine).expect("subtraction targets are digit symbols"),
        });
    }
    rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    rules
}

/// Applies every subtraction rule, in descending priority order, as a
/// global literal replacement over the accumulated numeral.
pub(crate) fn contract(roman: &mut String) {
    for rule in subtraction_rules() {
        if roman.contains(rule.from_pattern()) {
            *roman = roman.replace(rule.from_pattern(), rule.to_pattern());
        }
    }
}
