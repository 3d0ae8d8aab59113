//! Display formatting for dates and money, shared by every page.

use chrono::{DateTime, Utc};

use crate::domain::types::Timestamp;

/// Placeholder rendered for missing values.
pub const MISSING: &str = "—";

/// `January 5, 2024`.
pub fn format_date(value: Option<Timestamp>) -> String {
    value
        .map(|ts| ts.get().format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `Jan 5, 2024, 3:04 PM`.
pub fn format_date_time(value: Option<Timestamp>) -> String {
    value
        .map(|ts| ts.get().format("%b %-d, %Y, %-I:%M %p").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Age of `value` relative to `now`: `Just now`, `5m ago`, `3h ago`, `2d ago`,
/// then the short date once a week has passed.
pub fn format_relative(value: Timestamp, now: DateTime<Utc>) -> String {
    let minutes = (now - value.get()).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        value.get().format("%b %-d").to_string()
    }
}

/// US dollar amount with thousands separators: `$1,234.50`.
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return MISSING.to_string();
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
