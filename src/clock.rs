//! Clock context used by every conversion in this crate.
//!
//! A [`Clock`] bundles the fixed UTC offset that civil values are interpreted
//! in with a source for the current time. Passing it explicitly keeps the
//! conversion functions pure and lets tests pin both the offset and `now`.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use once_cell::sync::Lazy;

/// UTC offset of the host timezone, captured exactly once per process.
///
/// The offset is deliberately not re-read afterwards, so every conversion in
/// the process agrees on the same civil interpretation even across a DST
/// change or a timezone reconfiguration.
static SYSTEM_OFFSET: Lazy<FixedOffset> = Lazy::new(|| {
    let offset = *Local::now().offset();
    log::debug!("captured system UTC offset {}", offset);
    offset
});

/// Conversion context: a fixed UTC offset plus a source of `now`.
///
/// `Clock` is small and `Copy`; hand it around by reference or value as
/// convenient. [`Clock::system`] is the production constructor,
/// [`Clock::fixed`] the deterministic one for tests.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
    frozen: Option<DateTime<Utc>>,
}

impl Clock {
    /// Clock using the host timezone's offset and the system time.
    pub fn system() -> Self {
        Self {
            offset: *SYSTEM_OFFSET,
            frozen: None,
        }
    }

    /// Clock pinned to `offset`, still reading the system time for `now`.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset,
            frozen: None,
        }
    }

    /// Fully deterministic clock: fixed offset and a frozen `now`.
    pub fn fixed(offset: FixedOffset, now: DateTime<Utc>) -> Self {
        Self {
            offset,
            frozen: Some(now),
        }
    }

    /// The current instant, from the frozen value if one was set.
    pub fn now(&self) -> DateTime<Utc> {
        self.frozen.unwrap_or_else(Utc::now)
    }

    /// The UTC offset civil values are interpreted in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Today's civil date in this clock's offset.
    pub fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.offset).date_naive()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}
