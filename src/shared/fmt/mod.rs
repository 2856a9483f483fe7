//! Human-readable formatting for prices, percentages, and dates.

pub mod date;
pub mod num;

pub use date::{format_date, format_timestamp_ms};
pub use num::{format_large_number, format_number, format_percentage, format_price, format_usd};

/// Placeholder rendered for absent values.
pub const NOT_AVAILABLE: &str = "N/A";
