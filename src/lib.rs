pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod logging;

pub use calculator::{CalculatorSession, InputEvent, Operator};
pub use error::{Error, Result};
pub use history::{History, HistoryEntry};
