//! Boundary coercion for money values.
//!
//! The ledger never rejects numeric input. Negative, NaN and infinite values
//! are clamped to zero before they are stored.

/// Clamps a money value into the ledger's domain (finite and non-negative).
#[must_use]
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses user-entered text as an amount, treating anything non-numeric as 0.
///
/// Accepts a decimal point (`"12.5"`) or a decimal comma (`"12,50"`). When
/// both separators appear, the last one is the decimal mark and the other
/// groups thousands (`"1.234,50"` and `"1,234.50"` are both 1234.5).
/// A lone comma followed by exactly three digits (`"1,234"`) could be either
/// and parses as 0.
#[must_use]
pub fn parse_amount(input: &str) -> f64 {
    normalize_separators(input.trim())
        .and_then(|text| text.parse::<f64>().ok())
        .map_or(0.0, sanitize_amount)
}

/// Rewrites `text` to use `.` as the only decimal mark, or `None` if the
/// separators are malformed or ambiguous.
fn normalize_separators(text: &str) -> Option<String> {
    match (text.rfind('.'), text.rfind(',')) {
        (_, None) => Some(text.to_string()),
        (None, Some(_)) => {
            let (whole, fraction) = text.split_once(',')?;
            if fraction.contains(',') || fraction.len() == 3 {
                return None;
            }
            Some(format!("{whole}.{fraction}"))
        }
        (Some(dot), Some(comma)) => {
            let (decimal, grouping, at) = if dot > comma {
                ('.', ',', dot)
            } else {
                (',', '.', comma)
            };
            let whole = &text[..at];
            let fraction = &text[at + 1..];
            if whole.contains(decimal) || !is_grouped(whole, grouping) {
                return None;
            }
            Some(format!("{}.{fraction}", whole.replace(grouping, "")))
        }
    }
}

/// Whether `whole` is split into thousands: a leading group of 1-3 characters
/// followed by groups of exactly 3.
fn is_grouped(whole: &str, separator: char) -> bool {
    let unsigned = whole.strip_prefix('-').unwrap_or(whole);
    let mut groups = unsigned.split(separator);
    groups.next().is_some_and(|first| (1..=3).contains(&first.len()))
        && groups.all(|group| group.len() == 3)
}
