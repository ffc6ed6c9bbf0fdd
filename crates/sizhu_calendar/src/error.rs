//! Error types for calendar primitives.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from sexagenary-cycle lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The stem/branch pairing is outside the 60-cycle (parity mismatch).
    /// Reaching this is a programmer error, not bad user input.
    InvalidCombination {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCombination { stem, branch } => {
                write!(
                    f,
                    "invalid stem-branch combination: {}{} is not in the sexagenary cycle",
                    stem.name(),
                    branch.name()
                )
            }
        }
    }
}

impl Error for CalendarError {}
