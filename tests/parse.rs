use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use epochal::convert::to_civil_datetime;
use epochal::parse::{
    from_epoch_millis, parse, parse_date, parse_datetime, parse_with_pattern, to_epoch_millis,
    CivilValue,
};
use epochal::{Clock, Pattern, TimeError};

fn utc8() -> Clock {
    Clock::with_offset(FixedOffset::east_opt(8 * 3600).unwrap())
}

#[test]
fn test_parse_datetime_applies_offset() {
    let clock = utc8();
    let instant = parse_datetime(&clock, "2018-11-01 11:00:00").unwrap();
    // 11:00 at +08:00 is 03:00 UTC
    assert_eq!(instant, Utc.with_ymd_and_hms(2018, 11, 1, 3, 0, 0).unwrap());
}

#[test]
fn test_parse_date_anchors_at_midnight() {
    let clock = utc8();
    let instant = parse_date(&clock, "2018-11-01").unwrap();
    let civil = to_civil_datetime(&clock, instant);
    assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2018, 11, 1).unwrap());
    assert_eq!(civil.time(), chrono::NaiveTime::MIN);
}

#[test]
fn test_millis_pattern_preserves_milliseconds() {
    let clock = utc8();
    let instant = parse(&clock, "2018-11-01 11:00:00 235", Pattern::DateTimeMillis).unwrap();
    assert_eq!(instant.timestamp_millis(), 1541041200235);
}

#[test]
fn test_parse_rejects_compact_pattern() {
    let clock = utc8();
    let err = parse(&clock, "20181101110000", Pattern::Compact).unwrap_err();
    assert!(matches!(err, TimeError::UnsupportedFormat(_)));
}

#[test]
fn test_unknown_pattern_name_is_unsupported() {
    let err = "unsupported-pattern".parse::<Pattern>().unwrap_err();
    assert!(matches!(err, TimeError::UnsupportedFormat(_)));
}

#[test]
fn test_pattern_resolves_from_name_or_format() {
    assert_eq!("datetime".parse::<Pattern>().unwrap(), Pattern::DateTime);
    assert_eq!("date".parse::<Pattern>().unwrap(), Pattern::Date);
    assert_eq!("%Y-%m-%d".parse::<Pattern>().unwrap(), Pattern::Date);
    assert_eq!("%Y%m%d%H%M%S".parse::<Pattern>().unwrap(), Pattern::Compact);
}

#[test]
fn test_mismatched_text_is_a_parse_error() {
    let clock = utc8();
    assert!(matches!(
        parse_datetime(&clock, "not a date"),
        Err(TimeError::Parse(_))
    ));
    // Trailing garbage fails too
    assert!(matches!(
        parse_datetime(&clock, "2018-11-01 11:00:00x"),
        Err(TimeError::Parse(_))
    ));
}

#[test]
fn test_to_epoch_millis() {
    let clock = utc8();
    assert_eq!(to_epoch_millis(&clock, "2018-11-01 11:00:00").unwrap(), 1541041200000);
}

#[test]
fn test_from_epoch_millis() {
    let instant = from_epoch_millis("1541041200000").unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2018, 11, 1, 3, 0, 0).unwrap());

    // Negative literals are instants before the epoch
    let before = from_epoch_millis("-1000").unwrap();
    assert_eq!(before, Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap());
}

#[test]
fn test_from_epoch_millis_rejects_bad_literals() {
    assert!(matches!(
        from_epoch_millis("not-a-number"),
        Err(TimeError::NumberFormat(_))
    ));
    // Too many digits for a 64-bit integer
    assert!(matches!(
        from_epoch_millis("99999999999999999999999"),
        Err(TimeError::NumberFormat(_))
    ));
    // A valid integer can still fall outside the representable range
    assert!(matches!(
        from_epoch_millis(&i64::MAX.to_string()),
        Err(TimeError::OutOfRange)
    ));
}

#[test]
fn test_parse_with_pattern_keeps_natural_types() {
    let clock = utc8();

    let value = parse_with_pattern(&clock, "2018-11-01 11:00:00", Pattern::DateTime).unwrap();
    assert_eq!(
        value,
        CivilValue::Instant(Utc.with_ymd_and_hms(2018, 11, 1, 3, 0, 0).unwrap())
    );
    assert_eq!(value.kind(), "instant");

    let value = parse_with_pattern(&clock, "2018-11-01", Pattern::Date).unwrap();
    assert_eq!(value, CivilValue::Date(NaiveDate::from_ymd_opt(2018, 11, 1).unwrap()));
    assert_eq!(value.to_string(), "2018-11-01");
}

#[test]
fn test_compact_pattern_parses_separator_text_and_stays_civil() {
    let clock = utc8();
    let value = parse_with_pattern(&clock, "2018-11-01 11:00:00", Pattern::Compact).unwrap();
    let expected = NaiveDate::from_ymd_opt(2018, 11, 1).unwrap().and_hms_opt(11, 0, 0).unwrap();
    assert_eq!(value, CivilValue::DateTime(expected));
    assert_eq!(value.kind(), "datetime");
    assert_eq!(value.to_string(), "2018-11-01 11:00:00");

    // Actual compact text does not match this path
    assert!(matches!(
        parse_with_pattern(&clock, "20181101110000", Pattern::Compact),
        Err(TimeError::Parse(_))
    ));
}
