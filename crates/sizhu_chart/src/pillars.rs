//! Four-pillar resolution from a local birth instant.
//!
//! Pillar derivation rules:
//! - Day pillar: epoch-offset walk of the 60-cycle from the anchor
//!   2000-01-01 = WuWu (cycle index 54), with [23:00, 24:00) shifted to the
//!   next calendar day before any lookup.
//! - Year pillar: cuts over at Li-Chun, not January 1.
//! - Month pillar: cuts over at the governing node term, with the month
//!   stem from the Five-Tigers table keyed by the year stem.
//! - Hour pillar: 2-hour double-hour slots, stem from the Five-Rats table
//!   keyed by the (already shifted) day stem. Unknown birth time yields
//!   `HourPillar::Unknown`, never a guessed slot.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use sizhu_calendar::{ALL_BRANCHES, ALL_STEMS, Nayin, StemBranch};
use sizhu_time::{LocalDateTime, TermContext};

use crate::error::ChartError;

/// Days from CE of the day-pillar anchor date 2000-01-01 (= WuWu).
const DAY_EPOCH_DAYS_FROM_CE: i64 = 730_120;

/// Cycle index of the anchor date's day pillar (WuWu).
const DAY_EPOCH_CYCLE_INDEX: i64 = 54;

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// English name of the position.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// Hour pillar, present only when the birth time is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourPillar {
    Known(StemBranch),
    Unknown,
}

impl HourPillar {
    /// The pair, if the birth time was known.
    pub const fn known(self) -> Option<StemBranch> {
        match self {
            Self::Known(sb) => Some(sb),
            Self::Unknown => None,
        }
    }
}

/// The four resolved pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: HourPillar,
}

impl FourPillars {
    /// The day master: the day pillar's stem, reference point for all
    /// ten-god classification.
    pub const fn day_master(&self) -> sizhu_calendar::HeavenlyStem {
        self.day.stem()
    }

    /// Pair at a position; None only for an unknown hour.
    pub const fn stem_branch(&self, position: PillarPosition) -> Option<StemBranch> {
        match position {
            PillarPosition::Year => Some(self.year),
            PillarPosition::Month => Some(self.month),
            PillarPosition::Day => Some(self.day),
            PillarPosition::Hour => self.hour.known(),
        }
    }

    /// Nayin category per pillar (hour only when known).
    pub const fn sounds(&self) -> PillarSounds {
        PillarSounds {
            year: self.year.nayin(),
            month: self.month.nayin(),
            day: self.day.nayin(),
            hour: match self.hour {
                HourPillar::Known(sb) => Some(sb.nayin()),
                HourPillar::Unknown => None,
            },
        }
    }
}

/// Nayin categories of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarSounds {
    pub year: Nayin,
    pub month: Nayin,
    pub day: Nayin,
    pub hour: Option<Nayin>,
}

/// Resolve all four pillars for a local birth instant.
///
/// `time_known == false` suppresses the hour pillar and ignores the
/// instant's clock fields for the day-boundary rule.
pub fn resolve_pillars(
    local: &LocalDateTime,
    time_known: bool,
    ctx: &mut TermContext,
) -> Result<FourPillars, ChartError> {
    // Day-boundary rule first: 23:00-24:00 belongs to the next day.
    let shift_day = time_known && local.hour >= 23;
    let day_date = if shift_day {
        local.shifted_date(1)
    } else {
        local.date()
    };

    let day = day_pillar_for(i64::from(day_date.num_days_from_ce()));

    // Year pillar switches at Li-Chun, not January 1.
    let sui_year = if ctx.has_passed_li_chun(local)? {
        local.year
    } else {
        local.year - 1
    };
    let year = year_pillar_for(sui_year);

    // Month pillar switches at the governing node term.
    let node = ctx.month_governing_node(local)?;
    let month_branch = ALL_BRANCHES[(node.term.index() as usize / 2 + 1) % 12];
    let first_month_stem = (year.stem().index() % 5) * 2 + 2;
    let month_offset = (i32::from(month_branch.index()) - 2).rem_euclid(12);
    let month_stem =
        ALL_STEMS[((i32::from(first_month_stem) + month_offset) % 10) as usize];
    let month = StemBranch::new(month_stem, month_branch)?;

    let hour = if time_known {
        let hour_branch = ALL_BRANCHES[(((local.hour + 1) % 24) / 2) as usize];
        let hour_stem_idx = (day.stem().index() % 5) * 2 + hour_branch.index();
        let hour_stem = ALL_STEMS[(hour_stem_idx % 10) as usize];
        HourPillar::Known(StemBranch::new(hour_stem, hour_branch)?)
    } else {
        HourPillar::Unknown
    };

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}

/// Year pillar for a Li-Chun-adjusted year number (1984 = JiaZi).
pub fn year_pillar_for(sui_year: i32) -> StemBranch {
    StemBranch::from_cycle_offset(i64::from(sui_year) - 1984)
}

/// Day pillar for a days-from-CE day number.
fn day_pillar_for(days_from_ce: i64) -> StemBranch {
    StemBranch::from_cycle_offset(days_from_ce - DAY_EPOCH_DAYS_FROM_CE + DAY_EPOCH_CYCLE_INDEX)
}
