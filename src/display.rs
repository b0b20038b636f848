//! Text rendering of the calculator display.
//!
//! The display shows the expression trace as a muted first line and the
//! current operand below it. An error message, if any, follows the operand.

use crate::calculator::{CalculatorSession, format_display};
use crate::history::History;

/// Render the display for `session`.
pub fn render(session: &CalculatorSession, group_digits: bool) -> String {
    let value = if group_digits {
        format_display(session.current_input())
    } else {
        session.current_input().to_string()
    };

    let mut out = String::new();
    if !session.expression().is_empty() {
        out.push_str(&format!("  {}\n", session.expression()));
    }
    out.push_str(&format!("= {}", value));

    // Only flag the error while its result is still on the display.
    if let Some(error) = session.error()
        && session.last_result() == Some(session.current_input())
    {
        out.push_str(&format!("  ({})", error));
    }

    out
}

/// Render the history log, numbered for recall (`r1` is the newest).
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "No calculation history".to_string();
    }

    history
        .entries()
        .enumerate()
        .map(|(i, entry)| format!("r{:<3} {} = {}", i + 1, entry.expression, entry.result))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{InputEvent, Operator};
    use crate::history::HistoryEntry;

    #[test]
    fn test_render_fresh_session() {
        let session = CalculatorSession::new();
        assert_eq!(render(&session, true), "= 0");
    }

    #[test]
    fn test_render_result_with_grouping() {
        let mut session = CalculatorSession::new();
        for event in [
            InputEvent::Digit(1),
            InputEvent::Digit(2),
            InputEvent::Digit(3),
            InputEvent::Digit(4),
            InputEvent::Operator(Operator::Multiply),
            InputEvent::Digit(2),
            InputEvent::Equals,
        ] {
            session.apply(event);
        }

        assert_eq!(render(&session, true), "  1234 × 2 =\n= 2,468");
        assert_eq!(render(&session, false), "  1234 × 2 =\n= 2468");
    }

    #[test]
    fn test_render_error_only_while_shown() {
        let mut session = CalculatorSession::new();
        for event in [
            InputEvent::Digit(5),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit(0),
            InputEvent::Equals,
        ] {
            session.apply(event);
        }
        assert_eq!(
            render(&session, true),
            "  5 ÷ 0 =\n= Infinity  (Cannot divide by zero)"
        );

        session.apply(InputEvent::Digit(4));
        assert_eq!(render(&session, true), "  5 ÷ 0 =\n= 4");
    }

    #[test]
    fn test_render_history() {
        assert_eq!(render_history(&History::new()), "No calculation history");

        let history = History::from_entries([
            HistoryEntry::new("√9", "3"),
            HistoryEntry::new("7 + 3", "10"),
        ]);
        assert_eq!(render_history(&history), "r1   √9 = 3\nr2   7 + 3 = 10");
    }
}
