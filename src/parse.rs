//! Typed string parsing against the closed pattern set.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::clock::Clock;
use crate::convert::{from_civil_date, from_civil_datetime};
use crate::error::TimeError;
use crate::pattern::{Pattern, DATETIME_FORMAT, DATE_FORMAT};

/// Result of pattern-directed parsing via [`parse_with_pattern`].
///
/// The variant is decided by the pattern the caller named, never by
/// inspecting the input at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivilValue {
    /// An absolute instant, produced by the date-time patterns.
    Instant(DateTime<Utc>),
    /// A plain civil date, produced by the date pattern.
    Date(NaiveDate),
    /// A civil date-time with no offset applied, produced by the compact
    /// pattern.
    DateTime(NaiveDateTime),
}

impl CivilValue {
    /// Short label for the variant, used in logs and structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            CivilValue::Instant(_) => "instant",
            CivilValue::Date(_) => "date",
            CivilValue::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for CivilValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CivilValue::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
            CivilValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            CivilValue::DateTime(civil) => write!(f, "{}", civil.format(DATETIME_FORMAT)),
        }
    }
}

/// Parse `text` with a named pattern into an absolute instant.
///
/// Date-time text is interpreted in the clock's offset; date-only text
/// anchors at midnight. The compact pattern has no instant interpretation
/// and is rejected with [`TimeError::UnsupportedFormat`]; its civil form is
/// available through [`parse_with_pattern`].
pub fn parse(clock: &Clock, text: &str, pattern: Pattern) -> Result<DateTime<Utc>, TimeError> {
    match pattern {
        Pattern::DateTime | Pattern::DateTimeMillis => {
            let civil = NaiveDateTime::parse_from_str(text, pattern.format_str())?;
            Ok(from_civil_datetime(clock, civil))
        }
        Pattern::Date => {
            let date = NaiveDate::parse_from_str(text, pattern.format_str())?;
            Ok(from_civil_date(clock, date))
        }
        Pattern::Compact => Err(TimeError::UnsupportedFormat(pattern.name().to_string())),
    }
}

/// [`parse`] with the standard date-time pattern.
pub fn parse_datetime(clock: &Clock, text: &str) -> Result<DateTime<Utc>, TimeError> {
    parse(clock, text, Pattern::DateTime)
}

/// [`parse`] with the date pattern; the result is midnight in the clock's
/// offset.
pub fn parse_date(clock: &Clock, text: &str) -> Result<DateTime<Utc>, TimeError> {
    parse(clock, text, Pattern::Date)
}

/// Epoch milliseconds of a standard date-time string.
pub fn to_epoch_millis(clock: &Clock, text: &str) -> Result<i64, TimeError> {
    Ok(parse_datetime(clock, text)?.timestamp_millis())
}

/// Instant from a base-10 epoch-millisecond literal.
pub fn from_epoch_millis(text: &str) -> Result<DateTime<Utc>, TimeError> {
    let millis: i64 = text.parse()?;
    DateTime::from_timestamp_millis(millis).ok_or(TimeError::OutOfRange)
}

/// Parse `text` according to `pattern`, keeping the pattern's natural type.
///
/// * Date-time patterns produce [`CivilValue::Instant`] in the clock's
///   offset.
/// * The date pattern produces [`CivilValue::Date`].
/// * The compact pattern is a historical oddity kept for compatibility: the
///   text is parsed with the standard separator date-time format, so
///   `"2018-11-01 11:00:00"` succeeds and `"20181101110000"` does not, and
///   the result stays civil with no offset applied.
pub fn parse_with_pattern(
    clock: &Clock,
    text: &str,
    pattern: Pattern,
) -> Result<CivilValue, TimeError> {
    match pattern {
        Pattern::DateTime | Pattern::DateTimeMillis => {
            let civil = NaiveDateTime::parse_from_str(text, pattern.format_str())?;
            Ok(CivilValue::Instant(from_civil_datetime(clock, civil)))
        }
        Pattern::Date => {
            let date = NaiveDate::parse_from_str(text, pattern.format_str())?;
            Ok(CivilValue::Date(date))
        }
        Pattern::Compact => {
            let civil = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)?;
            Ok(CivilValue::DateTime(civil))
        }
    }
}
