//! Expression clean-up before evaluation.
//!
//! Display glyphs are rewritten to their evaluable spelling, then anything
//! outside the arithmetic allow-list is dropped. This is a filter, not a
//! grammar check: the evaluator still rejects malformed input.

use super::operator::Operator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches every character outside the allow-list.
    /// Allows: digits, the four basic operators, dots, parentheses, spaces.
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^0-9+\-*/.() ]").unwrap();
}

/// Replace display glyphs (`×`, `÷`, `−`, `^`) with evaluable operators.
pub fn translate_operators(expression: &str) -> String {
    let mut result = String::with_capacity(expression.len());
    for c in expression.chars() {
        match Operator::from_glyph(c) {
            Some(op) => result.push_str(op.symbol()),
            None => result.push(c),
        }
    }
    result
}

/// Strip every character outside the allow-list.
pub fn strip_disallowed(expression: &str) -> String {
    DISALLOWED_CHARS.replace_all(expression, "").into_owned()
}

/// Translate glyphs and strip disallowed characters.
pub fn sanitize(expression: &str) -> String {
    strip_disallowed(&translate_operators(expression))
}
