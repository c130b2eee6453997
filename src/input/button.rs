//! Calculator pad buttons.

use crate::calculator::{Command, Operator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a pad button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    Number,
    Operator,
    Equals,
    Clear,
    Percentage,
    Sign,
    History,
    CloseHistory,
    ClearHistory,
}

impl FromStr for ButtonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "operator" => Ok(Self::Operator),
            "equals" => Ok(Self::Equals),
            "clear" => Ok(Self::Clear),
            "percentage" => Ok(Self::Percentage),
            "sign" => Ok(Self::Sign),
            "history" => Ok(Self::History),
            "close-history" => Ok(Self::CloseHistory),
            "clear-history" => Ok(Self::ClearHistory),
            other => Err(format!("Unknown button kind: {}", other)),
        }
    }
}

/// A pressed pad button: its kind plus the label value for number and
/// operator buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub kind: ButtonKind,
    #[serde(default)]
    pub value: Option<String>,
}

impl Button {
    pub fn new(kind: ButtonKind) -> Self {
        Self { kind, value: None }
    }

    pub fn with_value(kind: ButtonKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }

    pub fn number(digit: char) -> Self {
        Self::with_value(ButtonKind::Number, digit)
    }

    pub fn operator(op: Operator) -> Self {
        Self::with_value(ButtonKind::Operator, op.glyph())
    }
}

/// Map a pad button to a command.
///
/// Number and operator buttons need a single-character value: a digit or
/// `.` for numbers, an operator glyph for operators.
pub fn command_for_button(button: &Button) -> Option<Command> {
    match button.kind {
        ButtonKind::Number => {
            let c = single_char(button.value.as_deref()?)?;
            (c.is_ascii_digit() || c == '.').then_some(Command::Digit(c))
        }
        ButtonKind::Operator => {
            let glyph = single_char(button.value.as_deref()?)?;
            Operator::from_glyph(glyph).map(Command::Operator)
        }
        ButtonKind::Equals => Some(Command::Equals),
        ButtonKind::Clear => Some(Command::Clear),
        ButtonKind::Percentage => Some(Command::Percent),
        ButtonKind::Sign => Some(Command::ToggleSign),
        ButtonKind::History => Some(Command::OpenHistory),
        ButtonKind::CloseHistory => Some(Command::CloseHistory),
        ButtonKind::ClearHistory => Some(Command::ClearHistory),
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
