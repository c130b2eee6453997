//! Evaluation of the single pending operation.
//!
//! The session never holds more than one operator at a time, so instead of a
//! general expression parser this evaluates exactly `lhs op rhs` after the
//! expression has been sanitized.

use super::error::{CalcError, CalcResult};
use super::operator::Operator;
use super::sanitize::sanitize;

/// A parsed binary operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinaryOperation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
}

impl BinaryOperation {
    /// Parse a sanitized expression of the form `lhs op rhs`.
    ///
    /// Operands may carry a leading sign, except a power's base: `-2 ** 2`
    /// has no agreed reading and is rejected. Returns `None` for anything
    /// else.
    pub fn parse(expression: &str) -> Option<Self> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        let [lhs, operator, rhs] = tokens.as_slice() else {
            return None;
        };

        let operator = Operator::from_symbol(operator)?;
        if operator == Operator::Power && lhs.starts_with('-') {
            return None;
        }

        Some(Self {
            lhs: parse_operand(lhs)?,
            operator,
            rhs: parse_operand(rhs)?,
        })
    }

    pub fn value(&self) -> f64 {
        self.operator.apply(self.lhs, self.rhs)
    }
}

/// Parse one operand. Only digits, one dot and a leading sign are accepted.
fn parse_operand(token: &str) -> Option<f64> {
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);

    let valid = !unsigned.is_empty()
        && unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;

    if valid { token.parse().ok() } else { None }
}

/// Evaluate the pending operation.
///
/// `previous_input` is the staged `"<operand> <glyph>"` string and
/// `current_input` the operand on screen. Returns the raw (unrounded) value,
/// or [`CalcError::InvalidCalculation`] if the expression is malformed or
/// the result is not finite.
pub fn evaluate(previous_input: &str, current_input: &str) -> CalcResult<f64> {
    let expression = format!("{} {}", previous_input, current_input);
    let sanitized = sanitize(&expression);

    tracing::debug!(expression = %sanitized, "Evaluating");

    let operation =
        BinaryOperation::parse(&sanitized).ok_or_else(|| CalcError::invalid(&expression))?;
    let value = operation.value();

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(expression))
    }
}
