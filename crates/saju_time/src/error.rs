//! Error types for calendar/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from zone-offset construction or calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset outside the representable range (±18 hours).
    OffsetOutOfRange(i32),
    /// Calendar field combination does not name a real instant.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OffsetOutOfRange(minutes) => {
                write!(f, "UTC offset {minutes} min outside ±18h")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}
