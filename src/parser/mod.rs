//! Numeric input parsing
//!
//! User input is read the way a permissive numeric-literal parser reads it:
//! leading whitespace is skipped and the longest valid numeric prefix wins, so
//! `"10km"` reads as `10` and `"1e"` reads as `1`. Only text with no numeric
//! prefix at all is rejected.

use tracing::trace;

const INFINITY_LITERAL: &str = "Infinity";

/// Parse the longest numeric prefix of `input`
///
/// Returns `None` when no prefix is a valid number. Values too large for `f64`
/// come back as infinity rather than an error.
pub fn parse_numeric_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let prefix = numeric_prefix(trimmed)?;

    let value = if prefix.ends_with(INFINITY_LITERAL) {
        if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        prefix.parse::<f64>().ok()?
    };

    trace!(input, prefix, value, "parsed numeric prefix");
    Some(value)
}

/// Locate the numeric prefix of already-trimmed text
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with(INFINITY_LITERAL) {
        return Some(&text[..pos + INFINITY_LITERAL.len()]);
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    Some(&text[..pos])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
