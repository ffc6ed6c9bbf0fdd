//! Calendrical substrate: local civil time and solar-term boundaries.
//!
//! This crate provides:
//! - `LocalDateTime`, the validated wall-clock birth-instant form
//! - The 24-term solar-term calculator (century-coefficient approximation,
//!   ±1 day) with node/mid-term queries for year and month cutover
//! - `TermContext`, the per-computation memoization of term instants
//!
//! All calculations are deterministic functions of their integer inputs.

pub mod error;
pub mod local;
pub mod solar_term;
pub mod terms;

pub use error::TimeError;
pub use local::LocalDateTime;
pub use solar_term::{ALL_TERMS, SolarTerm};
pub use terms::{
    MAX_YEAR, MIN_YEAR, TermContext, TermInstant, has_passed_li_chun, month_governing_node,
    term_instant, year_solar_terms,
};
