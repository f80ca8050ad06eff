//! Conversions between absolute instants and civil date/time values.
//!
//! Every function goes through the [`Clock`]'s fixed offset, so converting in
//! one direction and back returns the original value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::clock::Clock;

/// Civil date and time of `instant` in the clock's offset.
pub fn to_civil_datetime(clock: &Clock, instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&clock.offset()).naive_local()
}

/// Civil date of `instant` in the clock's offset, time of day dropped.
pub fn to_civil_date(clock: &Clock, instant: DateTime<Utc>) -> NaiveDate {
    to_civil_datetime(clock, instant).date()
}

/// Time of day of `instant` in the clock's offset, date dropped.
pub fn to_civil_time(clock: &Clock, instant: DateTime<Utc>) -> NaiveTime {
    to_civil_datetime(clock, instant).time()
}

/// The instant at which `date` begins (midnight) in the clock's offset.
pub fn from_civil_date(clock: &Clock, date: NaiveDate) -> DateTime<Utc> {
    from_civil_datetime(clock, date.and_time(NaiveTime::MIN))
}

/// The instant corresponding to `civil` in the clock's offset.
///
/// Fixed offsets have no gaps or folds, so this is total for any value a
/// parser or arithmetic in this crate can produce. At the very edge of
/// chrono's representable range the offset shift can overflow; the value is
/// then reinterpreted as UTC instead of panicking.
pub fn from_civil_datetime(clock: &Clock, civil: NaiveDateTime) -> DateTime<Utc> {
    clock
        .offset()
        .from_local_datetime(&civil)
        .single()
        .map(|fixed| fixed.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&civil))
}
