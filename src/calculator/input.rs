//! Input events and keystroke tokenizing.
//!
//! The keypad produces discrete [`InputEvent`]s. Text front-ends describe
//! keystrokes as words (`sqrt`, `ce`, `r2`) or runs of key characters
//! (`7+3=`), which [`parse_line`] turns into events.

use super::operator::Operator;
use crate::error::{Error, Result};
use crate::history::History;
use lazy_static::lazy_static;
use regex::Regex;

/// One keypad event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit key, 0 through 9.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// Clear everything except history.
    Clear,
    /// Clear the operand being typed.
    ClearEntry,
    Backspace,
    Negate,
    ClearHistory,
    /// Put a previous result back on the display.
    RecallHistory(String),
}

lazy_static! {
    /// `r<N>`: recall the Nth most recent history result (1-based).
    static ref RECALL: Regex = Regex::new(r"^(?i)r(\d+)$").unwrap();
}

/// Map a keyword to its event.
fn keyword(word: &str) -> Option<InputEvent> {
    let event = match word.to_lowercase().as_str() {
        "c" | "clear" | "ac" => InputEvent::Clear,
        "ce" => InputEvent::ClearEntry,
        "bs" | "back" | "backspace" | "del" => InputEvent::Backspace,
        "neg" | "negate" | "±" | "+/-" => InputEvent::Negate,
        "hc" | "clear-history" => InputEvent::ClearHistory,
        "sqr" | "square" | "x²" => InputEvent::Operator(Operator::Square),
        "sqrt" => InputEvent::Operator(Operator::Sqrt),
        "inv" | "1/x" | "recip" => InputEvent::Operator(Operator::Reciprocal),
        "pow" => InputEvent::Operator(Operator::Power),
        "mod" | "percent" => InputEvent::Operator(Operator::Percent),
        _ => return None,
    };
    Some(event)
}

/// Map a single key character to its event.
fn key(c: char) -> Option<InputEvent> {
    let event = match c {
        '0'..='9' => InputEvent::Digit(c as u8 - b'0'),
        '.' | ',' => InputEvent::DecimalPoint,
        '+' => InputEvent::Operator(Operator::Add),
        '-' | '−' => InputEvent::Operator(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => InputEvent::Operator(Operator::Multiply),
        '/' | '÷' => InputEvent::Operator(Operator::Divide),
        '%' => InputEvent::Operator(Operator::Percent),
        '^' => InputEvent::Operator(Operator::Power),
        '√' => InputEvent::Operator(Operator::Sqrt),
        '=' => InputEvent::Equals,
        _ => return None,
    };
    Some(event)
}

/// Tokenize a line of keystrokes into events.
///
/// Recall words resolve against `history` so the event carries the
/// recalled value. Unknown words or characters fail the whole line and
/// leave no partial events behind.
pub fn parse_line(line: &str, history: &History) -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();

    for word in line.split_whitespace() {
        if let Some(event) = keyword(word) {
            events.push(event);
            continue;
        }

        if let Some(caps) = RECALL.captures(word) {
            let index: usize = caps[1]
                .parse()
                .map_err(|_| Error::UnknownInput(word.to_string()))?;
            let entry = index
                .checked_sub(1)
                .and_then(|i| history.get(i))
                .ok_or_else(|| Error::UnknownInput(format!("no history entry {}", index)))?;
            events.push(InputEvent::RecallHistory(entry.result.clone()));
            continue;
        }

        for c in word.chars() {
            let event = key(c).ok_or_else(|| Error::UnknownInput(format!("'{}' in {}", c, word)))?;
            events.push(event);
        }
    }

    Ok(events)
}
