//! Number parsing and formatting for the display.
//!
//! Operands travel through the session as text. These helpers convert
//! between that text and `f64` and render values for display.

/// Display text for positive infinity.
pub const INFINITY: &str = "Infinity";
/// Display text for negative infinity.
pub const NEG_INFINITY: &str = "-Infinity";
/// Display text for an undefined result.
pub const NAN: &str = "NaN";

/// Parse operand text into a number.
///
/// Empty text is zero, the display sentinels map back to their values,
/// and anything else that fails to parse is NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        INFINITY | "+Infinity" => f64::INFINITY,
        NEG_INFINITY => f64::NEG_INFINITY,
        NAN => f64::NAN,
        _ if is_literal(trimmed) => trimmed.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Format a number as operand text.
///
/// Finite values use the shortest decimal form that reads back to the
/// same value. Negative zero is shown as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        NAN.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY.to_string()
        } else {
            NEG_INFINITY.to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Whether `text` is one of the non-finite display sentinels.
pub fn is_sentinel(text: &str) -> bool {
    matches!(text, INFINITY | NEG_INFINITY | NAN)
}

/// Whether `text` is a plain decimal literal: optional minus, digits, at
/// most one dot. Partial input such as `12.` counts.
fn is_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits != "."
        && digits.chars().filter(|&c| c == '.').count() <= 1
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Format operand text for display with thousand separators.
///
/// Only the integer part is grouped; a trailing dot or fractional digits
/// being typed are kept as-is. Sentinels pass through unchanged.
pub fn format_display(text: &str) -> String {
    if !is_literal(text) {
        return text.to_string();
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (int_part, rest) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    format!("{}{}{}", sign, group_thousands(int_part), rest)
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers_and_decimals() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_sentinels() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("-3.5"), -3.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("NaN").is_nan());
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_number("-").is_nan());
        assert!(parse_number("1.2.3").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format_display("1234567"), "1,234,567");
        assert_eq!(format_display("1234567.5"), "1,234,567.5");
        assert_eq!(format_display("-1000"), "-1,000");
        assert_eq!(format_display("999"), "999");
        assert_eq!(format_display("1234."), "1,234.");
        assert_eq!(format_display("0.000123"), "0.000123");
    }

    #[test]
    fn test_display_passes_sentinels_through() {
        assert_eq!(format_display("Infinity"), "Infinity");
        assert_eq!(format_display("NaN"), "NaN");
    }
}
