//! Number formatting utilities for human-readable display.
//!
//! USD amounts, K/M/B/T abbreviations, signed percentages and plain numbers
//! with comma separators. Absent or non-finite values render as `"N/A"`.

use super::NOT_AVAILABLE;

/// Adds thousands separators to the integer part of a formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, fraction) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let len = integer_part.len();
    let mut grouped = String::with_capacity(formatted.len() + len / 3);
    grouped.push_str(sign);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = fraction {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };
    group_thousands(&trimmed)
}

/// Format an f64 for display with explicit decimal places, trailing zeros trimmed.
pub fn display_with_decimals(amount: &f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted)
}

/// Format a USD amount with a fixed number of decimals: `-$1,234.50`.
pub fn format_usd(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let body = format!("{:.1$}", value.abs(), decimals);
    format!("{}${}", sign, group_thousands(&body))
}

/// Format a price as USD with two decimals.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format_usd(p, 2),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Abbreviate a USD amount with K/M/B/T suffixes.
///
/// Values below one thousand fall back to [`format_price`].
pub fn format_large_number(num: Option<f64>) -> String {
    let Some(num) = num.filter(|n| n.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };

    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };

    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    for (threshold, suffix) in SUFFIXES {
        if abs >= threshold {
            return format!("{}${:.2}{}", sign, abs / threshold, suffix);
        }
    }

    format_price(Some(num))
}

/// Format a percentage with an explicit sign: `+2.50%`, `-1.23%`.
pub fn format_percentage(percentage: Option<f64>, decimals: usize) -> String {
    match percentage.filter(|p| p.is_finite()) {
        Some(p) => {
            let sign = if p >= 0.0 { "+" } else { "" };
            format!("{}{:.2$}%", sign, p, decimals)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a plain number with commas and at most three decimals.
pub fn format_number(num: Option<f64>) -> String {
    match num.filter(|n| n.is_finite()) {
        Some(n) => display_with_decimals(&n, 3),
        None => NOT_AVAILABLE.to_string(),
    }
}
