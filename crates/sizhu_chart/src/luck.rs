//! Luck-pillar (decade) derivation.
//!
//! The decade sequence walks the sexagenary cycle from the month pillar,
//! forward for yang-year males and yin-year females, backward otherwise.
//! The start age converts the distance from birth to the nearest governing
//! node at 3 days = 1 year, rounded to the nearest whole year with ties
//! rounding up, and never below 1.

use serde::{Deserialize, Serialize};

use sizhu_calendar::{EarthlyBranch, HeavenlyStem, Polarity, StemBranch};
use sizhu_time::{LocalDateTime, TermContext};

use crate::error::ChartError;
use crate::pillars::FourPillars;
use crate::ten_god::{TenGod, ten_god};

/// Chart gender, an input to the decade direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// English name of the gender.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Walk direction of the decade sequence, fixed per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Backward,
}

/// Number of decades derived per chart.
pub const DECADE_COUNT: usize = 8;

/// Span of one luck pillar in years.
pub const YEARS_PER_DECADE: u32 = 10;

/// Day-to-year ratio of the start-age rule.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// A calendar year inside a decade that interacts with the decade branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearInteraction {
    pub year: i32,
    pub branch: EarthlyBranch,
    pub kind: InteractionKind,
}

/// How a calendar year's branch relates to the decade branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Liuchong: the year branch opposes the decade branch.
    Clash,
    /// Liuhe: the year branch combines with the decade branch.
    Combination,
}

/// One ten-year luck period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPillar {
    pub stem_branch: StemBranch,
    /// First year of age covered, inclusive.
    pub start_age: u32,
    /// Last year of age covered, inclusive.
    pub end_age: u32,
    /// Relation of the decade stem to the day master.
    pub ten_god: TenGod,
    pub direction: LuckDirection,
    /// Calendar years in the decade clashing/combining with its branch.
    pub interactions: Vec<YearInteraction>,
}

/// Direction rule: yang year stem + male or yin year stem + female walk
/// forward; the opposite pairings walk backward.
pub const fn luck_direction(year_stem: HeavenlyStem, gender: Gender) -> LuckDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => LuckDirection::Forward,
        (Polarity::Yang, Gender::Female) | (Polarity::Yin, Gender::Male) => LuckDirection::Backward,
    }
}

/// Start age in whole years from the birth-to-node distance.
///
/// Forward charts measure to the next node, backward charts to the
/// previous one. 3 days count as 1 year, rounded to the nearest year with
/// ties up, clamped to a minimum of 1.
pub fn start_age_years(
    birth: &LocalDateTime,
    direction: LuckDirection,
    ctx: &mut TermContext,
) -> Result<u32, ChartError> {
    let days = match direction {
        LuckDirection::Forward => {
            let node = ctx.next_node_after(birth)?;
            node.at.day_value() - birth.day_value()
        }
        LuckDirection::Backward => {
            let node = ctx.prev_node_before(birth)?;
            birth.day_value() - node.at.day_value()
        }
    };
    let years = (days / DAYS_PER_LUCK_YEAR + 0.5).floor() as u32;
    Ok(years.max(1))
}

/// Derive the full decade sequence for a chart.
///
/// `birth` is the normalized local instant; when the birth time is
/// unknown the caller passes midnight of the birth date, which bounds the
/// start-age error to the sub-day part of the node offset.
pub fn luck_pillars(
    pillars: &FourPillars,
    gender: Gender,
    birth: &LocalDateTime,
    ctx: &mut TermContext,
) -> Result<Vec<LuckPillar>, ChartError> {
    let direction = luck_direction(pillars.year.stem(), gender);
    let start_age = start_age_years(birth, direction, ctx)?;
    let day_master = pillars.day_master();

    let step = match direction {
        LuckDirection::Forward => 1i32,
        LuckDirection::Backward => -1i32,
    };

    let mut decades = Vec::with_capacity(DECADE_COUNT);
    for i in 0..DECADE_COUNT as u32 {
        let stem_branch = pillars.month.offset(step * (i as i32 + 1));
        let decade_start = start_age + YEARS_PER_DECADE * i;
        let decade_end = decade_start + YEARS_PER_DECADE - 1;
        decades.push(LuckPillar {
            stem_branch,
            start_age: decade_start,
            end_age: decade_end,
            ten_god: ten_god(day_master, stem_branch.stem()),
            direction,
            interactions: decade_interactions(
                birth.year,
                decade_start,
                decade_end,
                stem_branch.branch(),
            ),
        });
    }
    Ok(decades)
}

/// Calendar years within [start_age, end_age] whose year branch clashes or
/// combines with the decade branch. Used for narrative annotation only.
fn decade_interactions(
    birth_year: i32,
    start_age: u32,
    end_age: u32,
    decade_branch: EarthlyBranch,
) -> Vec<YearInteraction> {
    let mut out = Vec::new();
    for age in start_age..=end_age {
        let year = birth_year + age as i32;
        let branch_idx = (i64::from(year) - 4).rem_euclid(12) as u8;
        let branch = sizhu_calendar::ALL_BRANCHES[branch_idx as usize];
        let kind = if branch == decade_branch.clash() {
            Some(InteractionKind::Clash)
        } else if branch == decade_branch.combine() {
            Some(InteractionKind::Combination)
        } else {
            None
        };
        if let Some(kind) = kind {
            out.push(YearInteraction { year, branch, kind });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillars::resolve_pillars;

    fn chart(y: i32, mo: u32, d: u32, h: u32, gender: Gender) -> (FourPillars, Vec<LuckPillar>) {
        let local = LocalDateTime::new(y, mo, d, h, 30, 0).unwrap();
        let mut ctx = TermContext::new();
        let pillars = resolve_pillars(&local, true, &mut ctx).unwrap();
        let decades = luck_pillars(&pillars, gender, &local, &mut ctx).unwrap();
        (pillars, decades)
    }

    #[test]
    fn direction_truth_table() {
        // Jia is yang, Yi is yin.
        assert_eq!(
            luck_direction(HeavenlyStem::Jia, Gender::Male),
            LuckDirection::Forward
        );
        assert_eq!(
            luck_direction(HeavenlyStem::Jia, Gender::Female),
            LuckDirection::Backward
        );
        assert_eq!(
            luck_direction(HeavenlyStem::Yi, Gender::Male),
            LuckDirection::Backward
        );
        assert_eq!(
            luck_direction(HeavenlyStem::Yi, Gender::Female),
            LuckDirection::Forward
        );
    }

    #[test]
    fn decades_contiguous_no_gaps() {
        for gender in [Gender::Male, Gender::Female] {
            let (_, decades) = chart(1990, 5, 10, 12, gender);
            assert_eq!(decades.len(), DECADE_COUNT);
            for w in decades.windows(2) {
                assert_eq!(w[0].end_age + 1, w[1].start_age);
            }
        }
    }

    #[test]
    fn decades_walk_cycle_monotonically() {
        let (pillars, decades) = chart(1990, 5, 10, 12, Gender::Male);
        // 1990 is a Geng (yang) year: male walks forward from the month.
        assert_eq!(decades[0].direction, LuckDirection::Forward);
        let month_idx = i32::from(pillars.month.cycle_index());
        for (i, d) in decades.iter().enumerate() {
            let expected = (month_idx + i as i32 + 1).rem_euclid(60) as u8;
            assert_eq!(d.stem_branch.cycle_index(), expected);
        }
    }

    #[test]
    fn backward_walk_steps_down_cycle() {
        let (pillars, decades) = chart(1990, 5, 10, 12, Gender::Female);
        assert_eq!(decades[0].direction, LuckDirection::Backward);
        let month_idx = i32::from(pillars.month.cycle_index());
        assert_eq!(
            i32::from(decades[0].stem_branch.cycle_index()),
            (month_idx - 1).rem_euclid(60)
        );
    }

    #[test]
    fn golden_1990_05_10_male_first_decade() {
        // Month XinSi walking forward: first decade RenWu.
        let (_, decades) = chart(1990, 5, 10, 12, Gender::Male);
        assert_eq!(decades[0].stem_branch.name(), "RenWu");
        // Day master Yi against Ren is ZhengYin.
        assert_eq!(decades[0].ten_god, TenGod::ZhengYin);
    }

    #[test]
    fn start_age_rounds_to_nearest_year() {
        // 1990-05-10 12:30, forward: next node is MangZhong (~Jun 6),
        // about 27 days out -> 9 years.
        let birth = LocalDateTime::new(1990, 5, 10, 12, 30, 0).unwrap();
        let mut ctx = TermContext::new();
        let age = start_age_years(&birth, LuckDirection::Forward, &mut ctx).unwrap();
        assert_eq!(age, 9);
        // Backward: LiXia was ~4 days earlier -> 1 year.
        let age = start_age_years(&birth, LuckDirection::Backward, &mut ctx).unwrap();
        assert_eq!(age, 1);
    }

    #[test]
    fn start_age_never_zero() {
        // A birth instant right on a node gives distance 0, clamped to 1.
        let mut ctx = TermContext::new();
        let node = ctx.prev_node_before(&LocalDateTime::new(1990, 5, 10, 0, 0, 0).unwrap()).unwrap();
        let age = start_age_years(&node.at, LuckDirection::Backward, &mut ctx).unwrap();
        assert_eq!(age, 1);
    }

    #[test]
    fn interactions_flag_clash_and_combination_years() {
        let (_, decades) = chart(1990, 5, 10, 12, Gender::Male);
        for d in &decades {
            for i in &d.interactions {
                match i.kind {
                    InteractionKind::Clash => {
                        assert_eq!(i.branch, d.stem_branch.branch().clash());
                    }
                    InteractionKind::Combination => {
                        assert_eq!(i.branch, d.stem_branch.branch().combine());
                    }
                }
                // The year really falls inside the decade's age span.
                let age = i.year - 1990;
                assert!(age >= d.start_age as i32 && age <= d.end_age as i32);
            }
            // A 10-year window meets each 12-year branch cycle at most once.
            let clashes = d
                .interactions
                .iter()
                .filter(|i| i.kind == InteractionKind::Clash)
                .count();
            assert!(clashes <= 1);
        }
    }

    #[test]
    fn interaction_years_match_branch_arithmetic() {
        // Decade branch Wu clashes Zi years: 1996 is a Zi year (BingZi).
        let interactions = decade_interactions(1990, 1, 10, EarthlyBranch::Wu);
        let clash_years: Vec<i32> = interactions
            .iter()
            .filter(|i| i.kind == InteractionKind::Clash)
            .map(|i| i.year)
            .collect();
        assert_eq!(clash_years, vec![1996]);
    }
}
