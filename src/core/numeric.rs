// src/core/numeric.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits, commas and dashes only. Used as the "this cell holds a number" test
/// by every locator, before `normalize` is applied.
static NUMERIC_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d,-]+$").unwrap());

#[inline]
pub fn is_numeric_shaped(token: &str) -> bool {
    NUMERIC_SHAPE.is_match(token)
}

static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit (`'٣'` -> 3, `'３'` -> 3).
///
/// Decimal digits are assigned in contiguous runs of ten starting at zero, so
/// the value is the distance from the start of the run, mod 10.
fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Convert a noisy numeric cell into a count.
///
/// - `"-"` means "not applicable" in the source tables and maps to 0.
/// - Thousands separators are dropped.
/// - Digits from any script are read (`"١٢٣"` -> 123).
/// - Decimal fragments are truncated toward zero (`"12.9"` -> 12).
/// - Anything unparseable, non-finite or negative falls back to 0.
/// - Values past `i64::MAX` are clamped to it.
pub fn normalize(token: &str) -> i64 {
    if token == "-" {
        return 0;
    }
    let cleaned: String = token
        .chars()
        .filter(|&c| c != ',')
        .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)).unwrap_or(c))
        .collect();
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => {
            if v >= i64::MAX as f64 {
                i64::MAX
            } else {
                v.trunc() as i64
            }
        }
        _ => 0,
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
