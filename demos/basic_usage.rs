use chrono::FixedOffset;
use epochal::{format, parse, units, Clock, Pattern, Unit};

/// Walk through the main conversions with a clock pinned to UTC+8.
/// `Clock::system()` would follow the host timezone instead.
fn main() -> anyhow::Result<()> {
    let offset: FixedOffset = "+08:00".parse()?;
    let clock = Clock::with_offset(offset);

    println!("now          : {}", format::format_now_datetime(&clock));
    println!("now + millis : {}", format::format_now_millis(&clock));

    // Typed parsing with the standard pattern
    let start = parse::parse_datetime(&clock, "2018-11-01 11:00:00")?;
    println!("parsed       : {}", start.to_rfc3339());
    println!("epoch millis : {}", start.timestamp_millis());

    // Whole-unit differences truncate toward zero
    let days = units::between(&clock, Unit::Days, start, clock.now());
    println!("days since   : {days}");

    // Month arithmetic clamps to the end of shorter months
    let jan31 = parse::parse_datetime(&clock, "2024-01-31 09:30:00")?;
    let shifted = units::plus(&clock, Unit::Months, jan31, 1)?;
    println!(
        "jan 31 + 1mo : {}",
        format::format_instant(&clock, shifted, "%Y-%m-%d %H:%M:%S")?
    );

    // Pattern-directed parsing keeps each pattern's natural type
    let value = parse::parse_with_pattern(&clock, "2018-11-01", Pattern::Date)?;
    println!("civil date   : {value} ({})", value.kind());

    // Epoch-millisecond literals round-trip through strings
    let instant = parse::from_epoch_millis("1541041200000")?;
    println!("from millis  : {}", format::format_instant(&clock, instant, "%Y-%m-%d %H:%M:%S %z")?);

    Ok(())
}
