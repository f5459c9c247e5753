//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the order screens

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

const FALLBACK_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Format a timestamp with a strftime pattern.
/// Example: 2024-03-15T14:02:26Z with "%d.%m.%Y %H:%M" -> "15.03.2024 14:02"
///
/// An invalid pattern falls back to DD.MM.YYYY HH:MM instead of panicking.
pub fn format_datetime(value: &DateTime<Utc>, pattern: &str) -> String {
    let pattern = if is_valid_pattern(pattern) {
        pattern
    } else {
        FALLBACK_DATETIME_FORMAT
    };
    value.format(pattern).to_string()
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
