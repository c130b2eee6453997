//! Log of completed calculations.

use serde::Serialize;
use std::fmt;

/// Default number of entries shown in the history view.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Placeholder shown when there is nothing in the log.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No history";

/// A completed calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The staged operation, e.g. `"2 +"`.
    pub previous: String,
    /// The right-hand operand as it was typed.
    pub operand: String,
    /// The rounded result.
    pub result: String,
}

impl HistoryEntry {
    pub fn new(
        previous: impl Into<String>,
        operand: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            previous: previous.into(),
            operand: operand.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {}", self.previous, self.operand, self.result)
    }
}

/// Append-only history.
///
/// Storage is unbounded; only [`History::recent`] applies a limit.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Render the most recent `limit` entries one per line, or `placeholder`
    /// when the log is empty.
    pub fn render(&self, limit: usize, placeholder: &str) -> String {
        if self.entries.is_empty() {
            return placeholder.to_string();
        }

        self.recent(limit)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
