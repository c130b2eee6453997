//! Calculator core.
//!
//! This module provides:
//! - The input state machine ([`Session`]) driven by [`Command`]s
//! - Sanitizing and evaluating the pending operation
//! - Rounding and display formatting of results
//! - The history log of completed calculations

mod command;
mod error;
mod evaluation;
mod format;
mod history;
mod operator;
mod sanitize;
mod session;

pub use command::Command;
pub use error::{CalcError, CalcResult};
pub use evaluation::{BinaryOperation, evaluate};
pub use format::{
    PRECISION, THOUSANDS_SEPARATOR, format_display, format_display_with, number_to_string,
    round_result,
};
pub use history::{DEFAULT_HISTORY_LIMIT, EMPTY_HISTORY_PLACEHOLDER, History, HistoryEntry};
pub use operator::Operator;
pub use sanitize::sanitize;
pub use session::{DEFAULT_MAX_DIGITS, ERROR_SENTINEL, Session, Transition};
