//! Four-pillar chart derivation built on the calendrical substrate.
//!
//! This crate provides:
//! - Four-pillar resolution (Li-Chun year cutover, node-term month
//!   cutover, 23:00 day boundary, Five-Tigers/Five-Rats stem tables)
//! - The weighted five-element distribution
//! - Ten-god classification as a precomputed total table
//! - Day-master strength and favorable-element evaluation
//! - Luck-pillar (decade) derivation with interaction annotations
//!
//! Everything here is a pure function over immutable tables; the only
//! state is the per-computation solar-term memo threaded through a run.

pub mod chart;
pub mod distribution;
pub mod error;
pub mod luck;
pub mod pillars;
pub mod strength;
pub mod ten_god;

pub use chart::{BaziChart, ChartLabels, Locale, compute_chart};
pub use distribution::{BRANCH_WEIGHT, ElementDistribution, STEM_WEIGHT, distribute};
pub use error::ChartError;
pub use luck::{
    DECADE_COUNT, Gender, InteractionKind, LuckDirection, LuckPillar, YEARS_PER_DECADE,
    YearInteraction, luck_direction, luck_pillars, start_age_years,
};
pub use pillars::{
    ALL_POSITIONS, FourPillars, HourPillar, PillarPosition, PillarSounds, resolve_pillars,
};
pub use strength::{
    Season, StrengthAssessment, StrengthLevel, commanding_element_for, evaluate_strength,
};
pub use ten_god::{ALL_TEN_GODS, PillarRelation, TenGod, TenGodMap, ten_god, ten_god_for, ten_gods};
