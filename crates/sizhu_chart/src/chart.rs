//! The BaziChart aggregate and the full computation pipeline.
//!
//! `compute_chart` is the pure function the whole engine reduces to:
//! (local instant, gender, time-known flag) -> immutable chart. The cache
//! in the wrapper crate is a transparent optimization over this call.

use serde::{Deserialize, Serialize};

use sizhu_time::{LocalDateTime, TermContext};

use crate::distribution::{ElementDistribution, distribute};
use crate::error::ChartError;
use crate::luck::{Gender, LuckPillar, luck_pillars};
use crate::pillars::{FourPillars, PillarSounds, resolve_pillars};
use crate::strength::{StrengthAssessment, evaluate_strength};
use crate::ten_god::{TenGodMap, ten_gods};

/// Display-language hint. Affects only label strings, never the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// The complete computed chart. Immutable once built; safe to share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziChart {
    pub gender: Gender,
    pub pillars: FourPillars,
    pub sounds: PillarSounds,
    pub distribution: ElementDistribution,
    pub ten_gods: TenGodMap,
    pub strength: StrengthAssessment,
    pub luck_pillars: Vec<LuckPillar>,
}

impl BaziChart {
    /// Pillar label strings for the requested display language.
    pub fn labels(&self, locale: Locale) -> ChartLabels {
        let pillar = |sb: sizhu_calendar::StemBranch| match locale {
            Locale::En => sb.name(),
            Locale::Zh => sb.chinese(),
        };
        ChartLabels {
            year: pillar(self.pillars.year),
            month: pillar(self.pillars.month),
            day: pillar(self.pillars.day),
            hour: self.pillars.hour.known().map(|sb| pillar(sb)),
            day_master: match locale {
                Locale::En => self.pillars.day_master().name().to_owned(),
                Locale::Zh => self.pillars.day_master().chinese().to_owned(),
            },
            luck_pillars: self
                .luck_pillars
                .iter()
                .map(|lp| pillar(lp.stem_branch))
                .collect(),
        }
    }
}

/// Rendered label strings for one display language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: Option<String>,
    pub day_master: String,
    pub luck_pillars: Vec<String>,
}

/// Run the full pipeline for a normalized local birth instant.
///
/// When `time_known` is false the instant collapses to midnight of the
/// birth date before anything reads it: the hour pillar is `Unknown`,
/// hour-position analyses are suppressed, and boundary comparisons and
/// start-age offsets become functions of the date alone.
pub fn compute_chart(
    local: &LocalDateTime,
    gender: Gender,
    time_known: bool,
) -> Result<BaziChart, ChartError> {
    let local = if time_known {
        *local
    } else {
        local.at_midnight()
    };
    let mut ctx = TermContext::new();

    let pillars = resolve_pillars(&local, time_known, &mut ctx)?;
    let distribution = distribute(&pillars);
    let ten_gods = ten_gods(pillars.day_master(), &pillars);
    let strength = evaluate_strength(&distribution, pillars.day_master(), pillars.month.branch());

    let luck_pillars = luck_pillars(&pillars, gender, &local, &mut ctx)?;

    Ok(BaziChart {
        gender,
        pillars,
        sounds: pillars.sounds(),
        distribution,
        ten_gods,
        strength,
        luck_pillars,
    })
}
