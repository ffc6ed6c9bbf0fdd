//! Day-master strength classification and favorable-element selection.
//!
//! A deterministic classifier over (distribution, day master, month
//! branch): the month branch fixes the season, the season's commanding
//! element weighs on whichever side of the chart it supports, and fixed
//! thresholds on the resulting support ratio classify the day master.
//! Repeated calls on identical charts are bit-identical.

use serde::{Deserialize, Serialize};

use sizhu_calendar::{ALL_ELEMENTS, EarthlyBranch, Element, HeavenlyStem};

use crate::distribution::ElementDistribution;

/// Seasonal weight granted to the commanding element's side.
pub const SEASONAL_COMMAND_BONUS: u32 = 20;

/// Support ratio at or above which the day master is strong (percent).
pub const STRONG_THRESHOLD_PCT: u32 = 55;

/// Support ratio below which the day master is weak (percent).
pub const WEAK_THRESHOLD_PCT: u32 = 45;

/// The four seasons indicated by the month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season hosting a month branch (Yin opens spring).
    pub const fn from_month_branch(branch: EarthlyBranch) -> Self {
        match branch {
            EarthlyBranch::Yin | EarthlyBranch::Mao | EarthlyBranch::Chen => Self::Spring,
            EarthlyBranch::Si | EarthlyBranch::Wu | EarthlyBranch::Wei => Self::Summer,
            EarthlyBranch::Shen | EarthlyBranch::You | EarthlyBranch::Xu => Self::Autumn,
            EarthlyBranch::Hai | EarthlyBranch::Zi | EarthlyBranch::Chou => Self::Winter,
        }
    }

    /// English name of the season.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// The element in command during the season.
    pub const fn commanding_element(self) -> Element {
        match self {
            Self::Spring => Element::Wood,
            Self::Summer => Element::Fire,
            Self::Autumn => Element::Metal,
            Self::Winter => Element::Water,
        }
    }
}

/// The element actually in command for a month branch: the season's
/// element, except that the four earth branches put Earth in command.
pub const fn commanding_element_for(branch: EarthlyBranch) -> Element {
    match branch {
        EarthlyBranch::Chen | EarthlyBranch::Xu | EarthlyBranch::Chou | EarthlyBranch::Wei => {
            Element::Earth
        }
        _ => Season::from_month_branch(branch).commanding_element(),
    }
}

/// Strength classification of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Balanced,
    Strong,
}

impl StrengthLevel {
    /// English name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
            Self::Strong => "Strong",
        }
    }
}

/// Outcome of the strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub level: StrengthLevel,
    pub season: Season,
    /// Points on the day master's side (companion + resource + command).
    pub support_points: u32,
    /// Points against (output + wealth + officer + command).
    pub oppose_points: u32,
    /// Elements that would correct the imbalance, in cycle order.
    pub favorable: Vec<Element>,
    /// Complement of `favorable` among elements present in the chart.
    pub unfavorable: Vec<Element>,
}

/// Classify the day master and select favorable/unfavorable elements.
pub fn evaluate_strength(
    distribution: &ElementDistribution,
    day_master: HeavenlyStem,
    month_branch: EarthlyBranch,
) -> StrengthAssessment {
    let dm = day_master.element();
    let companion = dm;
    let resource = dm.generated_by();

    let mut support = distribution.weight(companion) + distribution.weight(resource);
    let mut oppose = distribution.total() - support;

    let season = Season::from_month_branch(month_branch);
    let commanding = commanding_element_for(month_branch);
    if commanding == companion || commanding == resource {
        support += SEASONAL_COMMAND_BONUS;
    } else {
        oppose += SEASONAL_COMMAND_BONUS;
    }

    let ratio_pct = support * 100 / (support + oppose);
    let level = if ratio_pct >= STRONG_THRESHOLD_PCT {
        StrengthLevel::Strong
    } else if ratio_pct < WEAK_THRESHOLD_PCT {
        StrengthLevel::Weak
    } else {
        StrengthLevel::Balanced
    };

    // Weak charts want the elements feeding the day master; strong charts
    // want the elements draining or checking it. Balanced charts lean by
    // which side of 50% the ratio falls on.
    let wants_support = match level {
        StrengthLevel::Weak => true,
        StrengthLevel::Strong => false,
        StrengthLevel::Balanced => ratio_pct < 50,
    };
    let favorable: Vec<Element> = ALL_ELEMENTS
        .iter()
        .copied()
        .filter(|e| {
            let supports = *e == companion || *e == resource;
            if wants_support { supports } else { !supports }
        })
        .collect();
    let unfavorable: Vec<Element> = ALL_ELEMENTS
        .iter()
        .copied()
        .filter(|e| distribution.is_present(*e) && !favorable.contains(e))
        .collect();

    StrengthAssessment {
        level,
        season,
        support_points: support,
        oppose_points: oppose,
        favorable,
        unfavorable,
    }
}
