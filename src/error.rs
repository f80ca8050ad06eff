//! Error types for conversion, parsing, and formatting operations.

/// Errors produced by the conversion and formatting functions.
///
/// Every variant means the caller handed us something unusable; none of
/// these are transient conditions worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// The pattern text is not one of the recognized named patterns, or the
    /// named pattern is not accepted by the operation it was given to.
    #[error("unsupported format pattern `{0}`")]
    UnsupportedFormat(String),

    /// A free-form pattern whose syntax the formatter rejects.
    #[error("invalid format pattern `{0}`")]
    InvalidPattern(String),

    /// The input text does not match the expected pattern.
    #[error("unparseable date-time text: {0}")]
    Parse(#[from] chrono::ParseError),

    /// The input text is not a valid base-10 integer.
    #[error("invalid epoch-millisecond literal: {0}")]
    NumberFormat(#[from] std::num::ParseIntError),

    /// The unit name does not match any supported time unit.
    #[error("unknown time unit `{0}`")]
    UnknownUnit(String),

    /// Calendar arithmetic produced a value outside the representable range.
    #[error("date-time value out of range")]
    OutOfRange,
}
