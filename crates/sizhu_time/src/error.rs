//! Error types for time handling and solar-term calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from local-time validation or solar-term lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Unparseable or impossible date/time.
    InvalidDateTime(String),
    /// Requested year is outside the solar-term coefficient tables.
    UnsupportedYear { year: i32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime(msg) => write!(f, "invalid date/time: {msg}"),
            Self::UnsupportedYear { year } => {
                write!(f, "year {year} outside supported solar-term range")
            }
        }
    }
}

impl Error for TimeError {}
