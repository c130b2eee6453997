//! The calculator controller.
//!
//! Owns the session, the history log and the history-view flag, applies
//! commands one at a time and produces what the front end should show.

use crate::calculator::{Command, History, Session, Transition, format_display_with};
use crate::config::Config;
use crate::input::{Button, Input, KeyEvent, command_for_button, command_for_key};
use serde::Serialize;
use std::fmt;

/// Everything a front end needs to draw after a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Render {
    /// The current operand with thousands separators.
    pub display: String,
    /// The staged operation, e.g. `"12 ×"`, or empty.
    pub previous_operation: String,
    pub history_open: bool,
    /// Recent history entries joined by newlines (or the placeholder).
    /// Only present while the history view is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

impl fmt::Display for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.previous_operation.is_empty() {
            writeln!(f, "{}", self.previous_operation)?;
        }
        write!(f, "{}", self.display)?;
        if let Some(history) = &self.history {
            write!(f, "\n--- history ---\n{}", history)?;
        }
        Ok(())
    }
}

pub struct Calculator {
    session: Session,
    history: History,
    history_open: bool,
    config: Config,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::new(config.max_digits),
            history: History::new(),
            history_open: false,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply a command and return the new render output.
    pub fn dispatch(&mut self, command: Command) -> Render {
        tracing::debug!(?command, "Dispatching command");

        match command {
            Command::OpenHistory => self.history_open = true,
            Command::CloseHistory => self.history_open = false,
            Command::ClearHistory => self.history.clear(),
            _ => {
                let Transition { session, record } = self.session.apply(command);
                self.session = session;
                if let Some(entry) = record {
                    tracing::debug!(entry = %entry, "Calculation complete");
                    self.history.push(entry);
                }
            }
        }

        self.render()
    }

    /// Handle a key event. Returns `None` when the key maps to nothing.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Render> {
        let command = command_for_key(event, self.history_open)?;
        Some(self.dispatch(command))
    }

    /// Handle a pad button. Returns `None` for a malformed button.
    pub fn handle_button(&mut self, button: &Button) -> Option<Render> {
        let command = command_for_button(button)?;
        Some(self.dispatch(command))
    }

    pub fn handle_input(&mut self, input: &Input) -> Option<Render> {
        match input {
            Input::Key(event) => self.handle_key(event),
            Input::Button(button) => self.handle_button(button),
        }
    }

    pub fn render(&self) -> Render {
        let history = self.history_open.then(|| {
            self.history
                .render(self.config.history_limit, &self.config.history_placeholder)
        });

        Render {
            display: format_display_with(
                self.session.current_input(),
                self.config.thousands_separator,
            ),
            previous_operation: self.session.previous_input(),
            history_open: self.history_open,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::input::Key;

    fn press(calculator: &mut Calculator, keys: &str) -> Render {
        let mut render = calculator.render();
        for c in keys.chars() {
            if let Some(next) = calculator.handle_key(&KeyEvent::new(Key::Char(c))) {
                render = next;
            }
        }
        render
    }

    #[test]
    fn test_initial_render() {
        let render = Calculator::default().render();
        assert_eq!(render.display, "0");
        assert_eq!(render.previous_operation, "");
        assert!(!render.history_open);
        assert_eq!(render.history, None);
    }

    #[test]
    fn test_display_is_grouped() {
        let mut calculator = Calculator::default();
        let render = press(&mut calculator, "1234567");
        assert_eq!(render.display, "1,234,567");
        assert_eq!(calculator.session().current_input(), "1234567");
    }

    #[test]
    fn test_previous_operation_shown() {
        let mut calculator = Calculator::default();
        let render = press(&mut calculator, "12*");
        assert_eq!(render.previous_operation, "12 ×");
        assert_eq!(render.display, "12");
    }

    #[test]
    fn test_equals_appends_history() {
        let mut calculator = Calculator::default();
        let render = press(&mut calculator, "2+3=");
        assert_eq!(render.display, "5");
        assert_eq!(calculator.history().len(), 1);
        assert_eq!(calculator.history().entries()[0].to_string(), "2 + 3 = 5");
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut calculator = Calculator::default();
        press(&mut calculator, "2+3=");
        let render = calculator.dispatch(Command::Clear);
        assert_eq!(render.display, "0");
        assert_eq!(calculator.history().len(), 1);
    }

    #[test]
    fn test_history_view() {
        let mut calculator = Calculator::default();
        let render = calculator.dispatch(Command::OpenHistory);
        assert_eq!(render.history.as_deref(), Some("No history"));

        calculator.dispatch(Command::CloseHistory);
        press(&mut calculator, "6*7=");
        let render = calculator.dispatch(Command::OpenHistory);
        assert_eq!(render.history.as_deref(), Some("6 × 7 = 42"));

        let render = calculator.dispatch(Command::ClearHistory);
        assert_eq!(render.history.as_deref(), Some("No history"));
        assert_eq!(render.display, "42");
    }

    #[test]
    fn test_history_view_is_capped() {
        let config = Config {
            history_limit: 2,
            ..Config::default()
        };
        let mut calculator = Calculator::new(config);
        press(&mut calculator, "1+1=");
        press(&mut calculator, "2+2=");
        press(&mut calculator, "3+3=");
        let render = calculator.dispatch(Command::OpenHistory);
        assert_eq!(render.history.as_deref(), Some("2 + 2 = 4\n3 + 3 = 6"));
        assert_eq!(calculator.history().len(), 3);
    }

    #[test]
    fn test_escape_closes_history_before_clearing() {
        let mut calculator = Calculator::default();
        press(&mut calculator, "9");
        calculator.dispatch(Command::OpenHistory);

        // Keys other than Escape are swallowed while the view is open.
        assert_eq!(calculator.handle_key(&KeyEvent::new(Key::Char('5'))), None);

        let render = calculator.handle_key(&KeyEvent::new(Key::Escape)).unwrap();
        assert!(!render.history_open);
        assert_eq!(render.display, "9");

        let render = calculator.handle_key(&KeyEvent::new(Key::Escape)).unwrap();
        assert_eq!(render.display, "0");
    }

    #[test]
    fn test_buttons() {
        let mut calculator = Calculator::default();
        calculator.handle_button(&Button::number('8'));
        calculator.handle_button(&Button::operator(Operator::Divide));
        calculator.handle_button(&Button::number('2'));
        let render = calculator
            .handle_button(&Button::new(crate::input::ButtonKind::Equals))
            .unwrap();
        assert_eq!(render.display, "4");
    }

    #[test]
    fn test_error_render() {
        let mut calculator = Calculator::default();
        let render = press(&mut calculator, "1/0=");
        assert_eq!(render.display, "Error");
        assert_eq!(render.previous_operation, "");
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn test_custom_separator() {
        let config = Config {
            thousands_separator: '_',
            ..Config::default()
        };
        let mut calculator = Calculator::new(config);
        let render = press(&mut calculator, "1234.5");
        assert_eq!(render.display, "1_234.5");
    }

    #[test]
    fn test_render_text() {
        let mut calculator = Calculator::default();
        let render = press(&mut calculator, "1000+");
        assert_eq!(render.to_string(), "1000 +\n1,000");
    }

    #[test]
    fn test_render_json() {
        let render = Calculator::default().render();
        let json = serde_json::to_value(&render).unwrap();
        assert_eq!(json["display"], "0");
        assert!(json.get("history").is_none());
    }
}
