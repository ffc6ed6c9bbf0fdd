//! Sexagenary-cycle primitives: stems, branches, elements, nayin.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with fixed
//!   element/polarity attributes
//! - The validated 60-pair stem-branch cycle
//! - The 30-category nayin resolver
//!
//! All tables are process-lifetime constants; everything here is pure.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod nayin;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use cycle::{CYCLE_LEN, StemBranch, sexagenary_cycle};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::CalendarError;
pub use nayin::{ALL_NAYIN, Nayin, nayin};
pub use stem::{ALL_STEMS, HeavenlyStem, stem_for};
