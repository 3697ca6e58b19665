//! Number formatting and operand parsing.
//!
//! Operands live in the state as text. These two functions are the only
//! bridge between that text and `f64`:
//! - `parse_operand` reads the longest numeric prefix of a buffer
//! - `format_number` rounds a result to a fixed number of significant digits
//!   and prints the shortest decimal form of the rounded value

/// Significant digits kept when formatting a computed result.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

/// Upper bound for configurable precision; an `f64` carries no more.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

// Digits of the exact decimal expansion inspected when rounding. Far more
// than an f64 needs, so a tie is only reported for a genuine tie.
const EXPANSION_DIGITS: usize = 40;

// Decimal point positions outside (-6, 21] switch to exponent notation.
const MAX_PLAIN_POSITION: i32 = 21;
const MIN_PLAIN_POSITION: i32 = -6;

/// Format a result with the default precision of 12 significant digits.
///
/// # Example
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333333333");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    format_number_with(value, DEFAULT_SIGNIFICANT_DIGITS)
}

/// Format a result rounded to `significant_digits` significant digits.
///
/// Trailing zeros and a bare trailing decimal point never appear. Non-finite
/// values pass through as `Infinity`, `-Infinity` or `NaN`.
pub fn format_number_with(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    shortest_decimal(round_significant(value, significant_digits))
}

/// Parse the numeric prefix of an operand buffer.
///
/// Leading whitespace is skipped, then an optional sign followed by either
/// `Infinity` or digits with an optional fraction and exponent. Returns
/// `None` when no numeric prefix exists, for example on an error message.
///
/// # Example
///
/// ```rust
/// use abacus::core::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), Some(12.5));
/// assert_eq!(parse_operand("0."), Some(0.0));
/// assert_eq!(parse_operand("1e+21"), Some(1e21));
/// assert_eq!(parse_operand("Cannot divide by 0"), None);
/// ```
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = rest.as_bytes();
    let integer_end = digits_end(bytes, 0);
    let integer = &rest[..integer_end];
    let mut end = integer_end;
    let mut fraction = "";
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_end(bytes, end + 1);
        fraction = &rest[end + 1..fraction_end];
        end = fraction_end;
    }
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = "";
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_end = digits_end(bytes, cursor);
        if exponent_end > cursor {
            exponent = &rest[end + 1..exponent_end];
        }
    }

    let literal = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if integer.is_empty() { "0" } else { integer },
        if fraction.is_empty() { "0" } else { fraction },
        if exponent.is_empty() { "0" } else { exponent },
    );
    literal.parse().ok()
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let run = bytes
        .get(start..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count());
    start + run
}

/// Round to `digits` significant digits, ties away from zero.
fn round_significant(value: f64, digits: usize) -> f64 {
    let digits = digits.clamp(1, EXPANSION_DIGITS);
    let expanded = format!("{:.*e}", EXPANSION_DIGITS, value.abs());
    let Some((mantissa, exponent)) = expanded.split_once('e') else {
        return value;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return value;
    };

    let mut figures: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let round_up = figures.get(digits).is_some_and(|&d| d >= 5);
    figures.truncate(digits);

    if round_up {
        let mut carry = true;
        for figure in figures.iter_mut().rev() {
            if *figure == 9 {
                *figure = 0;
            } else {
                *figure += 1;
                carry = false;
                break;
            }
        }
        if carry {
            figures.insert(0, 1);
            figures.pop();
            exponent += 1;
        }
    }

    let literal: String = figures.iter().map(|d| char::from(b'0' + d)).collect();
    format!("0.{}e{}", literal, exponent + 1)
        .parse::<f64>()
        .map(|rounded| rounded.copysign(value))
        .unwrap_or(value)
}

/// Shortest round-trip decimal text for a finite value.
fn shortest_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if count <= point && point <= MAX_PLAIN_POSITION {
        format!("{}{}", digits, "0".repeat((point - count) as usize))
    } else if 0 < point && point <= MAX_PLAIN_POSITION {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if MIN_PLAIN_POSITION < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{sign}{}", exponent.abs())
        } else {
            format!("{head}.{tail}e{sign}{}", exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
