//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_calendar::CalendarError;
use sizhu_time::TimeError;

/// Errors from the four-pillar pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from sexagenary-cycle lookups.
    Calendar(CalendarError),
    /// Error from local-time validation or solar-term calculation.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
