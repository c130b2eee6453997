//! Keyboard key classification.

use crate::calculator::{Command, Operator};

/// A key as reported by the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    /// Any other named key (`Tab`, `ArrowUp`, ...). Never mapped.
    Named(String),
}

impl Key {
    /// Parse a key name. Single characters become [`Key::Char`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" | "Return" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Named(name.to_string()),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Set for auto-repeat events while a key is held.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, repeat: false }
    }

    pub fn repeated(key: Key) -> Self {
        Self { key, repeat: true }
    }
}

/// Map a key event to a command.
///
/// Auto-repeat is ignored. Escape closes an open history view, otherwise it
/// clears. While the history view is open no other key does anything.
pub fn command_for_key(event: &KeyEvent, history_open: bool) -> Option<Command> {
    if event.repeat {
        return None;
    }

    if event.key == Key::Escape {
        return Some(if history_open {
            Command::CloseHistory
        } else {
            Command::Clear
        });
    }

    if history_open {
        return None;
    }

    match &event.key {
        Key::Enter => Some(Command::Equals),
        Key::Char(c) => command_for_char(*c),
        Key::Escape | Key::Named(_) => None,
    }
}

fn command_for_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' | '.' => Some(Command::Digit(c)),
        '+' => Some(Command::Operator(Operator::Add)),
        '-' => Some(Command::Operator(Operator::Subtract)),
        '*' | 'x' => Some(Command::Operator(Operator::Multiply)),
        '/' => Some(Command::Operator(Operator::Divide)),
        '^' => Some(Command::Operator(Operator::Power)),
        '=' => Some(Command::Equals),
        'c' => Some(Command::Clear),
        '%' => Some(Command::Percent),
        _ => None,
    }
}
