//! Rendering instants as text.
//!
//! The free-form entry points accept any syntactically valid strftime-style
//! pattern, not just the named ones. Pattern syntax is checked up front so a
//! bad pattern surfaces as [`TimeError::InvalidPattern`] instead of a panic
//! while printing.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::convert::to_civil_datetime;
use crate::error::TimeError;
use crate::pattern::{DATETIME_FORMAT, DATETIME_MILLIS_FORMAT};

/// Render `instant` in the clock's offset using a free-form pattern.
pub fn format_instant(
    clock: &Clock,
    instant: DateTime<Utc>,
    pattern: &str,
) -> Result<String, TimeError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TimeError::InvalidPattern(pattern.to_string()));
    }
    // Format the offset-carrying value so offset specifiers like %z work too.
    let local = instant.with_timezone(&clock.offset());
    Ok(local.format_with_items(items.iter()).to_string())
}

/// Render the current time using a free-form pattern.
pub fn format_now(clock: &Clock, pattern: &str) -> Result<String, TimeError> {
    format_instant(clock, clock.now(), pattern)
}

/// The current time in the standard date-time form, `2018-11-01 11:00:00`.
pub fn format_now_datetime(clock: &Clock) -> String {
    to_civil_datetime(clock, clock.now())
        .format(DATETIME_FORMAT)
        .to_string()
}

/// The current time with milliseconds, `2018-11-01 11:00:00 235`.
pub fn format_now_millis(clock: &Clock) -> String {
    to_civil_datetime(clock, clock.now())
        .format(DATETIME_MILLIS_FORMAT)
        .to_string()
}
