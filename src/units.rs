//! Whole-unit arithmetic between instants, computed over the civil calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, Utc};

use crate::clock::Clock;
use crate::convert::{from_civil_datetime, to_civil_datetime};
use crate::error::TimeError;

/// Units accepted by [`between`] and [`plus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl Unit {
    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Millis => "millis",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Unit::Years),
            "month" | "months" => Ok(Unit::Months),
            "week" | "weeks" => Ok(Unit::Weeks),
            "day" | "days" => Ok(Unit::Days),
            "hour" | "hours" => Ok(Unit::Hours),
            "minute" | "minutes" => Ok(Unit::Minutes),
            "second" | "seconds" => Ok(Unit::Seconds),
            "milli" | "millis" | "millisecond" | "milliseconds" => Ok(Unit::Millis),
            other => Err(TimeError::UnknownUnit(other.to_string())),
        }
    }
}

/// Signed count of whole `unit`s elapsed from `start` to `end`, truncated
/// toward zero: 25 hours apart is one day, minus 90 seconds is minus one
/// minute.
///
/// Both instants are read as civil date-times in the clock's offset, so
/// month and year counts follow the calendar exactly instead of a fixed-length
/// approximation. A month has elapsed only once the day of month and time of
/// day of `start` have both been reached again.
pub fn between(clock: &Clock, unit: Unit, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let a = to_civil_datetime(clock, start);
    let b = to_civil_datetime(clock, end);
    match unit {
        Unit::Years => months_between(a, b) / 12,
        Unit::Months => months_between(a, b),
        Unit::Weeks => (b - a).num_weeks(),
        Unit::Days => (b - a).num_days(),
        Unit::Hours => (b - a).num_hours(),
        Unit::Minutes => (b - a).num_minutes(),
        Unit::Seconds => (b - a).num_seconds(),
        Unit::Millis => (b - a).num_milliseconds(),
    }
}

/// `start` shifted by `amount` whole `unit`s; negative amounts shift backward.
///
/// The shift happens on the civil date-time in the clock's offset, so month
/// and year steps land on the same day of month where possible and clamp to
/// the last day of shorter months (Jan 31 plus one month is Feb 28 or 29).
/// Fails with [`TimeError::OutOfRange`] when the result cannot be
/// represented.
pub fn plus(
    clock: &Clock,
    unit: Unit,
    start: DateTime<Utc>,
    amount: i64,
) -> Result<DateTime<Utc>, TimeError> {
    let civil = to_civil_datetime(clock, start);
    let shifted = match unit {
        Unit::Years => {
            let months = amount.checked_mul(12).ok_or(TimeError::OutOfRange)?;
            shift_months(civil, months)
        }
        Unit::Months => shift_months(civil, amount),
        Unit::Weeks => Duration::try_weeks(amount).and_then(|d| civil.checked_add_signed(d)),
        Unit::Days => Duration::try_days(amount).and_then(|d| civil.checked_add_signed(d)),
        Unit::Hours => Duration::try_hours(amount).and_then(|d| civil.checked_add_signed(d)),
        Unit::Minutes => Duration::try_minutes(amount).and_then(|d| civil.checked_add_signed(d)),
        Unit::Seconds => Duration::try_seconds(amount).and_then(|d| civil.checked_add_signed(d)),
        Unit::Millis => civil.checked_add_signed(Duration::milliseconds(amount)),
    };
    let shifted = shifted.ok_or(TimeError::OutOfRange)?;
    Ok(from_civil_datetime(clock, shifted))
}

fn shift_months(civil: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        civil.checked_add_months(Months::new(magnitude))
    } else {
        civil.checked_sub_months(Months::new(magnitude))
    }
}

// The end date counts a month only once the start's day of month and time of
// day have both come around again, in either direction.
fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut end_date = end.date();
    if end_date > start.date() && end.time() < start.time() {
        end_date = end_date.pred_opt().unwrap_or(end_date);
    } else if end_date < start.date() && end.time() > start.time() {
        end_date = end_date.succ_opt().unwrap_or(end_date);
    }
    (packed_month_day(end_date) - packed_month_day(start.date())) / 32
}

// Months since year zero, scaled so that full days order within a month.
// Dividing a difference of packed values by 32 yields whole months with
// partial months truncated.
fn packed_month_day(date: NaiveDate) -> i64 {
    let proleptic_month = i64::from(date.year()) * 12 + i64::from(date.month0());
    proleptic_month * 32 + i64::from(date.day())
}
