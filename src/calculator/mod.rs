//! Keypad calculator engine.
//!
//! This module provides functionality to:
//! - Interpret keypad input events and evaluate chained expressions
//! - Tokenize keystroke text into input events
//! - Format operands for display
//! - Copy values to the clipboard

mod clipboard;
mod format;
mod input;
mod operator;
mod session;

pub use clipboard::copy_to_clipboard;
pub use format::{format_display, format_number, is_sentinel, parse_number};
pub use input::{InputEvent, parse_line};
pub use operator::Operator;
pub use session::CalculatorSession;
