//! Event adapter: turns key presses and pad buttons into commands.

mod button;
mod keyboard;

pub use button::{Button, ButtonKind, command_for_button};
pub use keyboard::{Key, KeyEvent, command_for_key};

/// One event delivered by a front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Button(Button),
}

/// Split a line of text into input events.
///
/// Tokens are whitespace separated. Named keys (`Enter`, `Escape`) and button
/// names (`history`, `clear-history`, `sign`, ...) are taken whole; every
/// other token is typed one character at a time, so `12+3` is four key
/// presses.
pub fn parse_tokens(line: &str) -> Vec<Input> {
    let mut inputs = Vec::new();

    for token in line.split_whitespace() {
        match token {
            "Enter" | "Return" | "Escape" | "Esc" => {
                inputs.push(Input::Key(KeyEvent::new(Key::from_name(token))));
            }
            "neg" => inputs.push(Input::Button(Button::new(ButtonKind::Sign))),
            "sign" | "history" | "close-history" | "clear-history" => {
                if let Ok(kind) = token.parse::<ButtonKind>() {
                    inputs.push(Input::Button(Button::new(kind)));
                }
            }
            _ => {
                inputs.extend(token.chars().map(|c| Input::Key(KeyEvent::new(Key::Char(c)))));
            }
        }
    }

    inputs
}
