//! A keyboard-driven arithmetic calculator.
//!
//! The [`calculator`] module holds the state machine, evaluator and
//! formatter; [`input`] classifies key presses and pad buttons into
//! commands; [`app::Calculator`] ties them together with the history log.

pub mod app;
pub mod calculator;
pub mod config;
pub mod input;

pub use app::{Calculator, Render};
pub use calculator::{Command, Operator};
pub use config::Config;
