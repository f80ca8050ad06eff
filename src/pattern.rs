//! Named format patterns recognized by the typed parse and format operations.
//!
//! The typed entry points only accept this closed set; the free-form
//! formatters in [`crate::format`] take any valid chrono pattern string.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// Date-only pattern, e.g. `2018-11-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and time pattern, e.g. `2018-11-01 11:00:00`. The default wherever an
/// operation takes no explicit pattern.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date and time with a trailing 3-digit millisecond field, e.g.
/// `2018-11-01 11:00:00 235`.
pub const DATETIME_MILLIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S %3f";

/// Separator-free digit run, e.g. `20181101110000`.
pub const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// The closed set of named patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Calendar date only (`%Y-%m-%d`).
    Date,
    /// Calendar date and wall-clock time (`%Y-%m-%d %H:%M:%S`).
    DateTime,
    /// [`Pattern::DateTime`] plus a space-separated millisecond field.
    DateTimeMillis,
    /// Digits only, no separators (`%Y%m%d%H%M%S`).
    Compact,
}

impl Pattern {
    /// The chrono format string behind this pattern.
    pub fn format_str(self) -> &'static str {
        match self {
            Pattern::Date => DATE_FORMAT,
            Pattern::DateTime => DATETIME_FORMAT,
            Pattern::DateTimeMillis => DATETIME_MILLIS_FORMAT,
            Pattern::Compact => COMPACT_FORMAT,
        }
    }

    /// Stable lower-case name, used by the CLI and config file.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Date => "date",
            Pattern::DateTime => "datetime",
            Pattern::DateTimeMillis => "datetime-millis",
            Pattern::Compact => "compact",
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::DateTime
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = TimeError;

    /// Resolves a pattern from its name or from the exact format string.
    /// Anything else fails with [`TimeError::UnsupportedFormat`].
    fn from_str(s: &str) -> Result<Self, TimeError> {
        match s {
            "date" | DATE_FORMAT => Ok(Pattern::Date),
            "datetime" | DATETIME_FORMAT => Ok(Pattern::DateTime),
            "datetime-millis" | DATETIME_MILLIS_FORMAT => Ok(Pattern::DateTimeMillis),
            "compact" | COMPACT_FORMAT => Ok(Pattern::Compact),
            other => Err(TimeError::UnsupportedFormat(other.to_string())),
        }
    }
}
