//! Solar-term instant calculation.
//!
//! Uses the century-coefficient approximation: for year `Y` within a
//! century, a term's day-of-month is `floor(Y * 0.2422 + C) - L` where `C`
//! is a fixed per-term, per-century coefficient and `L` the accumulated
//! leap-day correction. Accuracy is within ±1 day of the astronomical
//! instant; the fractional remainder supplies a deterministic intra-day
//! time. `TermContext` is the single seam an ephemeris-grade calculation
//! would replace.

use std::collections::HashMap;

use crate::error::TimeError;
use crate::local::LocalDateTime;
use crate::solar_term::{ALL_TERMS, SolarTerm};

/// First year covered by the coefficient tables.
pub const MIN_YEAR: i32 = 1901;
/// Last year covered by the coefficient tables.
pub const MAX_YEAR: i32 = 2099;

/// Mean tropical-year drift of a term's day-of-month per year.
const DAY_DRIFT: f64 = 0.2422;

/// Per-term day coefficients for 1901-1999.
const C20: [f64; 24] = [
    6.11, 20.84, 4.6295, 19.4599, 6.3826, 21.4155, 5.59, 20.888, 6.318, 21.86, 6.5, 22.2, 7.928,
    23.65, 8.35, 23.95, 8.44, 23.822, 9.098, 24.218, 8.218, 23.08, 7.9, 22.6,
];

/// Per-term day coefficients for 2000-2099.
const C21: [f64; 24] = [
    5.4055, 20.12, 3.87, 18.73, 5.63, 20.646, 4.81, 20.1, 5.52, 21.04, 5.678, 21.37, 7.108, 22.83,
    7.5, 23.13, 7.646, 23.042, 8.318, 23.438, 7.438, 22.36, 7.18, 21.94,
];

/// A solar term pinned to its computed local instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermInstant {
    pub term: SolarTerm,
    pub at: LocalDateTime,
}

/// Per-computation memoization of `(year, term) -> instant`.
///
/// One chart computation touches the same year's terms several times
/// (year cutover, month cutover, decade start-age). The context is created
/// per pipeline run and dropped at the end, so there is no cross-request state.
#[derive(Debug, Default)]
pub struct TermContext {
    memo: HashMap<(i32, u8), TermInstant>,
}

impl TermContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute (or recall) the instant of one term in one year.
    pub fn term_instant(&mut self, year: i32, term: SolarTerm) -> Result<TermInstant, TimeError> {
        let key = (year, term.index());
        if let Some(hit) = self.memo.get(&key) {
            return Ok(*hit);
        }
        let computed = compute_term_instant(year, term)?;
        self.memo.insert(key, computed);
        Ok(computed)
    }

    /// All 24 term instants of a year, in strictly increasing order.
    pub fn year_solar_terms(&mut self, year: i32) -> Result<[TermInstant; 24], TimeError> {
        let mut out = [self.term_instant(year, SolarTerm::XiaoHan)?; 24];
        for term in ALL_TERMS.iter().skip(1) {
            out[term.index() as usize] = self.term_instant(year, *term)?;
        }
        Ok(out)
    }

    /// The Li-Chun instant of a year.
    pub fn li_chun(&mut self, year: i32) -> Result<TermInstant, TimeError> {
        self.term_instant(year, SolarTerm::LiChun)
    }

    /// Whether the local instant falls on or after its year's Li-Chun.
    pub fn has_passed_li_chun(&mut self, local: &LocalDateTime) -> Result<bool, TimeError> {
        let li_chun = self.li_chun(local.year)?;
        Ok(*local >= li_chun.at)
    }

    /// The node term governing the month containing `local`: the latest
    /// node whose instant is not after `local`. Early-January instants
    /// before XiaoHan are governed by the previous year's DaXue.
    pub fn month_governing_node(
        &mut self,
        local: &LocalDateTime,
    ) -> Result<TermInstant, TimeError> {
        let mut governing = None;
        for term in ALL_TERMS.iter().filter(|t| t.is_node()) {
            let instant = self.term_instant(local.year, *term)?;
            if instant.at <= *local {
                governing = Some(instant);
            }
        }
        match governing {
            Some(instant) => Ok(instant),
            None => self.term_instant(local.year - 1, SolarTerm::DaXue),
        }
    }

    /// The most recent node at or before `local`.
    pub fn prev_node_before(&mut self, local: &LocalDateTime) -> Result<TermInstant, TimeError> {
        self.month_governing_node(local)
    }

    /// The first node strictly after `local`. Late-December instants roll
    /// over to the next year's XiaoHan.
    pub fn next_node_after(&mut self, local: &LocalDateTime) -> Result<TermInstant, TimeError> {
        for term in ALL_TERMS.iter().filter(|t| t.is_node()) {
            let instant = self.term_instant(local.year, *term)?;
            if instant.at > *local {
                return Ok(instant);
            }
        }
        self.term_instant(local.year + 1, SolarTerm::XiaoHan)
    }
}

/// Stateless form of [`TermContext::year_solar_terms`].
pub fn year_solar_terms(year: i32) -> Result<[TermInstant; 24], TimeError> {
    TermContext::new().year_solar_terms(year)
}

/// Stateless form of [`TermContext::term_instant`].
pub fn term_instant(year: i32, term: SolarTerm) -> Result<TermInstant, TimeError> {
    compute_term_instant(year, term)
}

/// Stateless form of [`TermContext::has_passed_li_chun`].
pub fn has_passed_li_chun(local: &LocalDateTime) -> Result<bool, TimeError> {
    TermContext::new().has_passed_li_chun(local)
}

/// Stateless form of [`TermContext::month_governing_node`].
pub fn month_governing_node(local: &LocalDateTime) -> Result<TermInstant, TimeError> {
    TermContext::new().month_governing_node(local)
}

fn compute_term_instant(year: i32, term: SolarTerm) -> Result<TermInstant, TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::UnsupportedYear { year });
    }
    let coefficients = if year < 2000 { &C20 } else { &C21 };
    let y = year.rem_euclid(100);

    let raw = f64::from(y) * DAY_DRIFT + coefficients[term.index() as usize];
    let mut day = raw.floor() as i64;
    let frac = raw - raw.floor();

    // January/February terms count leap days from the preceding year.
    let leap_days = if term.index() <= 3 {
        (y - 1).div_euclid(4)
    } else {
        y.div_euclid(4)
    };
    day -= i64::from(leap_days);

    let minutes_total = (frac * 1440.0).round() as u32;
    let (hour, minute) = ((minutes_total / 60).min(23), minutes_total % 60);

    let at = LocalDateTime::new(year, term.civil_month(), day as u32, hour, minute, 0)
        .map_err(|_| TimeError::InvalidDateTime(format!(
            "term {} of {year} fell outside its month",
            term.name()
        )))?;
    Ok(TermInstant { term, at })
}
