//! External boundary for the sizhu chart engine.
//!
//! Provides the `BaziEngine` (compute-or-fetch with an explicitly owned
//! cache), birth-data parsing and normalization, and the health probe.
//!
//! # Quick start
//!
//! ```rust
//! use sizhu_rs::*;
//!
//! let engine = BaziEngine::new(EngineConfig::default()).expect("engine config");
//! let birth = BirthData::new("1990-05-10T12:30:00", "Asia/Shanghai", Gender::Male, true);
//! let chart = engine.chart(&birth).expect("chart");
//! assert_eq!(chart.pillars.day.name(), "YiHai");
//! ```

pub mod birth;
pub mod cache;
pub mod engine;
pub mod error;

pub use birth::{BirthData, Fingerprint, NormalizedBirth};
pub use cache::{CacheStats, ChartCache};
pub use engine::{BaziEngine, EngineConfig, HealthStatus, SystemHealth};
pub use error::BaziError;

// Re-export chart and calendar types so callers need only `use sizhu_rs::*`.
pub use sizhu_calendar::{
    EarthlyBranch, Element, HeavenlyStem, Nayin, Polarity, StemBranch, nayin,
};
pub use sizhu_chart::{
    BaziChart, ChartLabels, ElementDistribution, FourPillars, Gender, HourPillar,
    InteractionKind, Locale, LuckDirection, LuckPillar, PillarPosition, PillarRelation,
    Season, StrengthAssessment, StrengthLevel, TenGod, TenGodMap, YearInteraction,
    compute_chart,
};
pub use sizhu_time::{LocalDateTime, SolarTerm, TermInstant, year_solar_terms};
