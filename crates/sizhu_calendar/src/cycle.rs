//! The sexagenary (60-pair) stem-branch cycle.
//!
//! Stems and branches do not combine freely: a pair is legal only when stem
//! and branch indices share parity, which yields exactly 60 combinations.
//! `StemBranch` can only be constructed through validating paths, so every
//! value in the system is one of the 60.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::CalendarError;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// Number of pairs in the full cycle.
pub const CYCLE_LEN: u8 = 60;

/// One validated stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    into = "(HeavenlyStem, EarthlyBranch)",
    try_from = "(HeavenlyStem, EarthlyBranch)"
)]
pub struct StemBranch {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl StemBranch {
    /// Pair a stem with a branch, rejecting combinations outside the cycle.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, CalendarError> {
        if stem.index() % 2 == branch.index() % 2 {
            Ok(Self { stem, branch })
        } else {
            Err(CalendarError::InvalidCombination { stem, branch })
        }
    }

    /// Pair at a 0-based cycle position. Returns None if index >= 60.
    pub const fn from_cycle_index(index: u8) -> Option<Self> {
        if index >= CYCLE_LEN {
            return None;
        }
        Some(Self {
            stem: ALL_STEMS[(index % 10) as usize],
            branch: ALL_BRANCHES[(index % 12) as usize],
        })
    }

    /// Pair at an arbitrary signed cycle position, wrapping modulo 60.
    pub const fn from_cycle_offset(offset: i64) -> Self {
        let index = offset.rem_euclid(60) as u8;
        Self {
            stem: ALL_STEMS[(index % 10) as usize],
            branch: ALL_BRANCHES[(index % 12) as usize],
        }
    }

    /// The pair's 0-based position in the cycle (JiaZi = 0).
    ///
    /// Closed form from the Chinese remainder theorem: the unique
    /// `i ≡ stem (mod 10), i ≡ branch (mod 12)` is `(6s − 5b) mod 60`.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// The stem of the pair.
    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    /// The branch of the pair.
    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Walk the cycle by a signed number of steps.
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_cycle_offset(self.cycle_index() as i64 + steps as i64)
    }

    /// Pinyin name, e.g. "JiaZi".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Chinese characters, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl From<StemBranch> for (HeavenlyStem, EarthlyBranch) {
    fn from(sb: StemBranch) -> Self {
        (sb.stem, sb.branch)
    }
}

impl TryFrom<(HeavenlyStem, EarthlyBranch)> for StemBranch {
    type Error = CalendarError;

    fn try_from(pair: (HeavenlyStem, EarthlyBranch)) -> Result<Self, Self::Error> {
        Self::new(pair.0, pair.1)
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// All 60 pairs of the cycle in order (index 0 = JiaZi).
pub fn sexagenary_cycle() -> [StemBranch; 60] {
    let mut cycle = [StemBranch {
        stem: HeavenlyStem::Jia,
        branch: EarthlyBranch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        cycle[i] = StemBranch {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    cycle
}
