//! Error type at the engine boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_chart::ChartError;
use sizhu_time::TimeError;

/// Errors surfaced to engine callers. All are local, typed, and
/// non-retryable; the engine never substitutes a fallback chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Unparseable or impossible birth date/time.
    InvalidDateTime(String),
    /// Unrecognized IANA timezone name.
    InvalidTimezone(String),
    /// Engine configuration rejected at construction.
    InvalidConfig(&'static str),
    /// Error from the chart pipeline.
    Chart(ChartError),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime(msg) => write!(f, "invalid date/time: {msg}"),
            Self::InvalidTimezone(name) => write!(f, "invalid timezone: {name}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
        }
    }
}

impl Error for BaziError {}

impl From<ChartError> for BaziError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDateTime(msg) => Self::InvalidDateTime(msg),
            other => Self::Chart(ChartError::Time(other)),
        }
    }
}
