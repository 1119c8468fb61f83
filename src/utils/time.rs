//! Time utilities: parsing check-in times in the accepted input forms and
//! rendering them in the canonical 12-hour form.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Accepted input forms, tried in order.
const TIME_FORMATS: [&str; 3] = ["%I:%M %p", "%H:%M", "%I:%M%p"];

/// Canonical rendering: `09:15 AM`.
pub const CANONICAL_FORMAT: &str = "%I:%M %p";

/// Parse `HH:MM AM/PM`, `HH:MM` (24-hour) or `HH:MMAM/PM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let normalized = t.split_whitespace().collect::<Vec<_>>().join(" ");
    let normalized = normalized.to_ascii_uppercase();

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    if t.trim().is_empty() {
        return Err(AppError::EmptyInput("Time"));
    }
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.trim().to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(CANONICAL_FORMAT).to_string()
}
