//! Calculator session state machine.
//!
//! A session moves between three logical states:
//! - entering: no operator pending
//! - operator pending: `operation` and `previous_input` set, input resets
//!   on the next digit
//! - result shown: right after an evaluation, input resets on the next digit
//!
//! Expressions are evaluated strictly left to right. Pressing a second
//! operator after typing a new operand first evaluates the pending one.

use super::format::{format_number, is_sentinel, parse_number};
use super::input::InputEvent;
use super::operator::Operator;
use crate::history::{History, HistoryEntry, KeyValueStore, load_history};

/// All state of one calculator session.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorSession {
    current_input: String,
    previous_input: Option<String>,
    operation: Option<Operator>,
    should_reset_input: bool,
    expression: String,
    history: History,
    /// Scratch register. Reserved; no input event mutates it yet.
    memory: f64,
    error: Option<String>,
    last_result: Option<String>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Create a session with an empty display and no history.
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Create a session seeded with an existing history log.
    pub fn with_history(history: History) -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: None,
            operation: None,
            should_reset_input: false,
            expression: String::new(),
            history,
            memory: 0.0,
            error: None,
            last_result: None,
        }
    }

    /// Create a session and seed its history from `store`.
    ///
    /// Storage problems are logged and leave the history empty.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self::with_history(load_history(store))
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn previous_input(&self) -> Option<&str> {
        self.previous_input.as_deref()
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn should_reset_input(&self) -> bool {
        self.should_reset_input
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Dispatch one input event.
    ///
    /// Returns `true` when the event changed the history log, i.e. when the
    /// host should persist it.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        tracing::debug!(?event, "Calculator input");
        let revision = self.history.revision();

        match event {
            InputEvent::Digit(d) => self.digit(d),
            InputEvent::DecimalPoint => self.decimal_point(),
            InputEvent::Operator(op) => self.apply_operator(op),
            InputEvent::Equals => self.evaluate(),
            InputEvent::Clear => self.clear(),
            InputEvent::ClearEntry => self.clear_entry(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Negate => self.negate(),
            InputEvent::ClearHistory => self.clear_history(),
            InputEvent::RecallHistory(result) => self.recall_history(result),
        }

        self.history.revision() != revision
    }

    /// Type a digit.
    pub fn digit(&mut self, d: u8) {
        if d > 9 {
            tracing::warn!("Ignoring invalid digit {}", d);
            return;
        }
        let c = char::from(b'0' + d);

        if self.should_reset_input {
            self.current_input = c.to_string();
            self.should_reset_input = false;
        } else if self.current_input == "0" || is_sentinel(&self.current_input) {
            self.current_input = c.to_string();
        } else {
            self.current_input.push(c);
        }
    }

    /// Type a decimal point. Does nothing if the operand already has one.
    pub fn decimal_point(&mut self) {
        if self.should_reset_input || is_sentinel(&self.current_input) {
            self.current_input = "0.".to_string();
            self.should_reset_input = false;
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Press an operator key.
    ///
    /// When an operator is already pending and a new operand has been typed
    /// since, the pending operation is evaluated first so chains run left
    /// to right.
    pub fn apply_operator(&mut self, op: Operator) {
        if self.operation.is_some() && !self.should_reset_input {
            self.evaluate();
        }

        self.expression = format!("{} {}", self.current_input, op);
        self.previous_input = Some(self.current_input.clone());
        self.operation = Some(op);
        self.should_reset_input = true;
    }

    /// Press equals.
    pub fn evaluate(&mut self) {
        let Some(op) = self.operation else {
            // No pending operation: nothing to evaluate.
            return;
        };

        let prev_text = self
            .previous_input
            .clone()
            .unwrap_or_else(|| self.current_input.clone());
        let prev = parse_number(&prev_text);
        let cur = parse_number(&self.current_input);

        let (trace, value, fresh) = if op.is_unary() {
            (
                format!("{}{}", op, prev_text),
                op.apply(prev, prev),
                true,
            )
        } else {
            (
                format!("{} {} {}", prev_text, op, self.current_input),
                op.apply(prev, cur),
                !self.should_reset_input,
            )
        };

        let result = format_number(value);

        if value.is_finite() {
            self.error = None;
        } else {
            let message = op.failure_message(cur);
            tracing::debug!(%trace, message, "Undefined result");
            self.error = Some(message.to_string());
        }

        if fresh {
            self.history.push(HistoryEntry::new(trace.clone(), result.clone()));
        }

        self.expression = format!("{} =", trace);
        self.current_input = result.clone();
        self.last_result = Some(result);
        self.previous_input = None;
        self.operation = None;
        self.should_reset_input = true;
    }

    /// Reset the display and any pending operation. History is kept.
    pub fn clear(&mut self) {
        self.current_input = "0".to_string();
        self.previous_input = None;
        self.operation = None;
        self.should_reset_input = false;
        self.expression.clear();
    }

    /// Reset only the operand being typed.
    pub fn clear_entry(&mut self) {
        self.current_input = "0".to_string();
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.current_input.len() <= 1 || is_sentinel(&self.current_input) {
            self.current_input = "0".to_string();
            return;
        }

        self.current_input.pop();
        if matches!(self.current_input.as_str(), "" | "-" | "-0") {
            self.current_input = "0".to_string();
        }
    }

    /// Flip the sign of the displayed operand.
    pub fn negate(&mut self) {
        self.current_input = format_number(-parse_number(&self.current_input));
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Put a previous result back on the display for further editing.
    pub fn recall_history(&mut self, result: String) {
        self.current_input = result;
        self.previous_input = None;
        self.operation = None;
        self.expression.clear();
        self.should_reset_input = false;
    }
}
