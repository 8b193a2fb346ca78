//! Calculator session: the pending expression, the entry being typed,
//! the memory register and a bounded log of finished calculations.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::action::Action;
use crate::calc_engine::{self, EvaluationTrace, Operator, Step};
use crate::error::Result;

pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Separator used when the history is rendered as one line.
pub const HISTORY_SEPARATOR: &str = "  •  ";

const EMPTY_ENTRY: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of finished calculations kept; older ones are evicted.
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

pub struct Session {
    entry: String,
    buffer: Vec<String>,
    memory: f64,
    history: VecDeque<HistoryEntry>,
    history_limit: usize,
    last_steps: Vec<Step>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let history_limit = config.history_limit.max(1);
        Session {
            entry: EMPTY_ENTRY.to_string(),
            buffer: Vec::new(),
            memory: 0.0,
            history: VecDeque::new(),
            history_limit,
            last_steps: Vec::new(),
        }
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "apply");
        match action {
            Action::Digit(c) => self.append_digit_or_point(c),
            Action::Operator(op) => self.commit_operator(op),
            Action::Equals => {
                let _ = self.finalize();
            }
            Action::ClearAll => self.clear_all(),
            Action::ClearEntry => self.clear_entry(),
            Action::Backspace => self.backspace(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySub => self.memory_sub(),
        }
    }

    pub fn append_digit_or_point(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            debug!(%c, "ignored non-numeric input");
            return;
        }
        if self.entry == EMPTY_ENTRY && c != '.' {
            self.entry = c.to_string();
        } else if c == '.' && self.entry.contains('.') {
            return;
        } else {
            self.entry.push(c);
        }
    }

    pub fn commit_operator(&mut self, op: Operator) {
        let operand = std::mem::replace(&mut self.entry, EMPTY_ENTRY.to_string());
        self.buffer.push(operand);
        self.buffer.push(op.symbol().to_string());
    }

    pub fn clear_all(&mut self) {
        self.reset_entry();
        self.buffer.clear();
    }

    pub fn clear_entry(&mut self) {
        self.reset_entry();
    }

    pub fn backspace(&mut self) {
        if self.entry.chars().count() <= 1 {
            self.reset_entry();
        } else {
            self.entry.pop();
        }
    }

    /// Evaluates buffer + entry. The session always ends in a usable state:
    /// the buffer is emptied and the entry holds either the result or an
    /// error marker. The outcome is returned for callers that want it.
    pub fn finalize(&mut self) -> Result<f64> {
        let mut entries = std::mem::take(&mut self.buffer);
        entries.push(self.entry.clone());

        let mut trace = EvaluationTrace::new(true);
        let outcome = calc_engine::evaluate(&entries, &mut trace);

        match &outcome {
            Ok(value) => {
                let result = calc_engine::format_result(*value);
                let record = HistoryEntry {
                    expression: entries.join(" ").trim().to_string(),
                    result: result.clone(),
                };
                debug!(%record, "calculated");
                self.push_history(record);
                self.entry = result;
                self.last_steps = trace.steps;
            }
            Err(e) => {
                debug!(error = %e, expression = %entries.join(" "), "calculation failed");
                self.entry = e.marker().to_string();
                self.last_steps.clear();
            }
        }
        outcome
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub fn memory_recall(&mut self) {
        self.entry = calc_engine::format_number(self.memory);
    }

    pub fn memory_add(&mut self) {
        self.memory += self.entry_value();
    }

    pub fn memory_sub(&mut self) {
        self.memory -= self.entry_value();
    }

    pub fn current_entry(&self) -> &str {
        &self.entry
    }

    pub fn buffer(&self) -> &[String] {
        &self.buffer
    }

    pub fn pending_expression(&self) -> String {
        self.buffer.join(" ")
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn memory_display(&self) -> String {
        format!("M: {}", calc_engine::format_number(self.memory))
    }

    /// History in append order, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// History rendered most-recent-first on one line.
    pub fn history_display(&self) -> String {
        self.history
            .iter()
            .rev()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(HISTORY_SEPARATOR)
    }

    /// Reduction steps of the last successful calculation.
    pub fn last_steps(&self) -> &[Step] {
        &self.last_steps
    }

    fn reset_entry(&mut self) {
        self.entry.clear();
        self.entry.push_str(EMPTY_ENTRY);
    }

    fn entry_value(&self) -> f64 {
        let value = calc_engine::parse_operand(&self.entry);
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    fn push_history(&mut self, record: HistoryEntry) {
        self.history.push_back(record);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
