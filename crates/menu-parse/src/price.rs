//! Locale-tolerant price normalization.
//!
//! Sheets arrive with comma or dot decimal separators, currency suffixes
//! ("руб.", "₽") and stray spacing. Cleanup keeps digits, the separator
//! characters and the minus sign, folds commas into dots, then parses the
//! longest leading decimal. Anything unparseable or negative collapses to
//! 0, which the row parser rejects as a non-positive price.

/// Normalizes a raw price cell to a non-negative decimal; 0 means invalid.
pub fn normalize_price(raw: &str) -> f64 {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '0'..='9' | '.' | '-' => cleaned.push(ch),
            ',' => cleaned.push('.'),
            _ => {}
        }
    }
    match parse_leading_decimal(&cleaned) {
        Some(value) if value > 0.0 && value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses the longest leading `[-]digits[.digits]` prefix of `text`.
///
/// A currency suffix like "руб." leaves a trailing dot after cleanup
/// ("123,50 руб." becomes "123.50."); prefix parsing ignores it.
fn parse_leading_decimal(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse::<f64>().ok()
}
