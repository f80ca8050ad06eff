//! Epochal - conversions between epoch instants and civil date/times
//!
//! This library converts between absolute epoch-based timestamps and civil
//! calendar values through an explicit [`clock::Clock`] context, counts and
//! adds whole calendar units, and parses and renders date-time text against
//! a small closed set of named patterns.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`clock`] - The offset and now context every conversion goes through
//! * [`convert`] - Instant to civil conversions and back
//! * [`units`] - Whole-unit differences and shifts
//! * [`parse`] - Typed parsing of date-time text
//! * [`format`] - Rendering instants as text
//! * [`config`] - Configuration for the command-line binary

/// Clock context carrying the fixed UTC offset and the source of now
pub mod clock;

/// Configuration module for the command-line binary
pub mod config;

/// Conversions between instants and civil date/time values
pub mod convert;

/// Error types shared by the whole crate
pub mod error;

/// Rendering instants as text with named or free-form patterns
pub mod format;

/// Typed string parsing against the closed pattern set
pub mod parse;

/// The closed set of named format patterns
pub mod pattern;

/// Whole-unit calendar arithmetic between instants
pub mod units;

// Re-export the types nearly every caller touches
pub use clock::Clock;
pub use error::TimeError;
pub use parse::CivilValue;
pub use pattern::Pattern;
pub use units::Unit;
