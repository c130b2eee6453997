//! The calculator's input state machine.
//!
//! A [`Session`] holds the operand being typed, the staged operation and the
//! reset-next-keystroke flag. [`Session::apply`] is a pure transition: it
//! returns the next session and, when a calculation completes, the entry to
//! append to the history log.

use super::command::Command;
use super::evaluation::evaluate;
use super::format::{number_to_string, round_result};
use super::history::HistoryEntry;
use super::operator::Operator;

/// Display value that blocks further input until cleared.
pub const ERROR_SENTINEL: &str = "Error";

/// Default cap on typed characters, not counting `.` or `,`.
pub const DEFAULT_MAX_DIGITS: usize = 12;

const INITIAL_INPUT: &str = "0";
const NEGATIVE_ZERO: &str = "-0";

/// An operand and operator waiting for the right-hand side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    pub operand: String,
    pub operator: Operator,
}

impl Pending {
    /// The staged operation as shown above the display, e.g. `"2 +"`.
    pub fn previous_input(&self) -> String {
        format!("{} {}", self.operand, self.operator.glyph())
    }
}

/// Result of applying a command to a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub session: Session,
    /// Set when a calculation completed successfully.
    pub record: Option<HistoryEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    current_input: String,
    pending: Option<Pending>,
    should_reset_screen: bool,
    max_digits: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl Session {
    pub fn new(max_digits: usize) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            pending: None,
            should_reset_screen: false,
            max_digits,
        }
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The staged `"<operand> <glyph>"`, or an empty string.
    pub fn previous_input(&self) -> String {
        self.pending
            .as_ref()
            .map(Pending::previous_input)
            .unwrap_or_default()
    }

    pub fn operation(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn should_reset_screen(&self) -> bool {
        self.should_reset_screen
    }

    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_SENTINEL
    }

    /// Compute the session that follows `command`.
    ///
    /// History commands do not affect the session and return it unchanged.
    pub fn apply(&self, command: Command) -> Transition {
        let mut session = self.clone();
        let record = session.update(command);
        Transition { session, record }
    }

    fn update(&mut self, command: Command) -> Option<HistoryEntry> {
        match command {
            Command::Digit(digit) => {
                self.push_digit(digit);
                None
            }
            Command::Operator(op) => self.choose_operator(op),
            Command::Equals => self.equals(),
            Command::Clear => {
                *self = Self::new(self.max_digits);
                None
            }
            Command::Percent => {
                self.percent();
                None
            }
            Command::ToggleSign => {
                self.toggle_sign();
                None
            }
            Command::OpenHistory | Command::CloseHistory | Command::ClearHistory => None,
        }
    }

    fn push_digit(&mut self, digit: char) {
        if self.is_error() || !(digit.is_ascii_digit() || digit == '.') {
            return;
        }

        if self.should_reset_screen {
            self.current_input.clear();
            self.should_reset_screen = false;
        }

        let typed = self
            .current_input
            .chars()
            .filter(|&c| c != '.' && c != ',')
            .count();
        if typed >= self.max_digits {
            return;
        }

        if digit == '.' && self.current_input.contains('.') {
            return;
        }

        if self.current_input == INITIAL_INPUT && digit != '.' {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }
    }

    fn choose_operator(&mut self, op: Operator) -> Option<HistoryEntry> {
        if self.is_error() {
            return None;
        }

        let record = if self.pending.is_some() {
            self.equals()
        } else {
            None
        };

        // A failed chained calculation leaves nothing to stage.
        if self.is_error() {
            return record;
        }

        if self.current_input == INITIAL_INPUT && op == Operator::Subtract {
            self.current_input = NEGATIVE_ZERO.to_string();
            return record;
        }

        self.pending = Some(Pending {
            operand: self.current_input.clone(),
            operator: op,
        });
        self.should_reset_screen = true;
        record
    }

    fn equals(&mut self) -> Option<HistoryEntry> {
        if self.is_error() {
            return None;
        }
        let pending = self.pending.take()?;
        let previous = pending.previous_input();

        match evaluate(&previous, &self.current_input) {
            Ok(value) => {
                let result = number_to_string(round_result(value));
                let entry = HistoryEntry::new(previous, self.current_input.clone(), result.clone());
                self.current_input = result;
                self.should_reset_screen = true;
                Some(entry)
            }
            Err(err) => {
                tracing::warn!(%err, "Calculation failed");
                self.current_input = ERROR_SENTINEL.to_string();
                None
            }
        }
    }

    fn percent(&mut self) {
        if self.is_error() {
            return;
        }

        if let Ok(value) = self.current_input.parse::<f64>() {
            self.current_input = number_to_string(round_result(value / 100.0));
        }
    }

    fn toggle_sign(&mut self) {
        if self.is_error() || self.current_input == INITIAL_INPUT {
            return;
        }

        if let Ok(value) = self.current_input.parse::<f64>() {
            self.current_input = number_to_string(-value);
        }
    }
}
