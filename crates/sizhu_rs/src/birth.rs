//! Birth-data input record, parsing, and fingerprint normalization.
//!
//! `BirthData` is the entire external contract: an ISO-8601 local
//! datetime string, an IANA zone name, a gender, and the time-known flag.
//! Normalization happens before fingerprinting so equivalent inputs
//! expressed differently (trailing seconds, unknown-time clock noise)
//! collide to the same cache key.

use chrono::{Datelike, LocalResult, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use sizhu_chart::{Gender, Locale};
use sizhu_time::LocalDateTime;

use crate::error::BaziError;

/// Accepted local datetime layouts, seconds optional.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// External birth-data record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    /// Local birth datetime, ISO-8601 without offset.
    pub datetime: String,
    /// IANA timezone name, e.g. "Asia/Shanghai".
    pub timezone: String,
    pub gender: Gender,
    pub is_time_known: bool,
    /// Display hint only; never part of the cache key.
    #[serde(default)]
    pub locale: Locale,
}

impl BirthData {
    pub fn new(
        datetime: impl Into<String>,
        timezone: impl Into<String>,
        gender: Gender,
        is_time_known: bool,
    ) -> Self {
        Self {
            datetime: datetime.into(),
            timezone: timezone.into(),
            gender,
            is_time_known,
            locale: Locale::default(),
        }
    }
}

/// Birth data after parsing, zone resolution, and normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedBirth {
    pub local: LocalDateTime,
    pub zone: Tz,
    pub gender: Gender,
    pub time_known: bool,
}

impl NormalizedBirth {
    /// Parse and validate a birth-data record.
    pub fn parse(birth: &BirthData) -> Result<Self, BaziError> {
        let naive = parse_local_datetime(&birth.datetime)?;
        let zone: Tz = birth
            .timezone
            .parse()
            .map_err(|_| BaziError::InvalidTimezone(birth.timezone.clone()))?;

        // The chart reads the wall clock, but the instant must exist in
        // the zone: DST-gap times are invalid input, fold times resolve
        // to the earlier instant.
        match zone.from_local_datetime(&naive) {
            LocalResult::None => {
                return Err(BaziError::InvalidDateTime(format!(
                    "{} does not exist in {}",
                    birth.datetime, birth.timezone
                )));
            }
            LocalResult::Single(_) | LocalResult::Ambiguous(_, _) => {}
        }

        let date = naive.date();
        let local = LocalDateTime::new(
            date.year(),
            date.month(),
            date.day(),
            naive.hour(),
            naive.minute(),
            naive.second(),
        )?;
        Ok(Self {
            local,
            zone,
            gender: birth.gender,
            time_known: birth.is_time_known,
        })
    }

    /// Stable cache key for the normalized input.
    ///
    /// Minute precision; unknown-time inputs zero their clock fields so
    /// any supplied time noise collides to the date-only key.
    pub fn fingerprint(&self) -> Fingerprint {
        let (hour, minute) = if self.time_known {
            (self.local.hour, self.local.minute)
        } else {
            (0, 0)
        };
        Fingerprint {
            year: self.local.year,
            month: self.local.month,
            day: self.local.day,
            hour,
            minute,
            zone: self.zone.name(),
            gender: self.gender,
            time_known: self.time_known,
        }
    }
}

/// Normalized value key identifying one birth input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    zone: &'static str,
    gender: Gender,
    time_known: bool,
}

fn parse_local_datetime(input: &str) -> Result<NaiveDateTime, BaziError> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }
    Err(BaziError::InvalidDateTime(format!(
        "unparseable datetime: {input}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(datetime: &str, tz: &str) -> BirthData {
        BirthData::new(datetime, tz, Gender::Male, true)
    }

    #[test]
    fn parse_full_iso() {
        let n = NormalizedBirth::parse(&birth("1990-05-10T12:30:00", "Asia/Shanghai")).unwrap();
        assert_eq!(n.local.to_string(), "1990-05-10T12:30:00");
        assert_eq!(n.zone.name(), "Asia/Shanghai");
    }

    #[test]
    fn parse_space_separator_and_no_seconds() {
        assert!(NormalizedBirth::parse(&birth("1990-05-10 12:30:00", "Asia/Shanghai")).is_ok());
        assert!(NormalizedBirth::parse(&birth("1990-05-10T12:30", "Asia/Shanghai")).is_ok());
    }

    #[test]
    fn invalid_datetime_string_rejected() {
        let err = NormalizedBirth::parse(&birth("invalid-date", "Asia/Shanghai")).unwrap_err();
        assert!(matches!(err, BaziError::InvalidDateTime(_)));
    }

    #[test]
    fn impossible_date_rejected() {
        let err = NormalizedBirth::parse(&birth("2023-02-30T10:00:00", "Asia/Shanghai"))
            .unwrap_err();
        assert!(matches!(err, BaziError::InvalidDateTime(_)));
    }

    #[test]
    fn unknown_zone_rejected() {
        let err = NormalizedBirth::parse(&birth("1990-05-10T12:30:00", "Mars/Olympus"))
            .unwrap_err();
        assert_eq!(err, BaziError::InvalidTimezone("Mars/Olympus".into()));
    }

    #[test]
    fn dst_gap_rejected() {
        // US spring-forward 2021: 02:30 on Mar 14 does not exist.
        let err = NormalizedBirth::parse(&birth("2021-03-14T02:30:00", "America/New_York"))
            .unwrap_err();
        assert!(matches!(err, BaziError::InvalidDateTime(_)));
    }

    #[test]
    fn dst_fold_accepted() {
        // US fall-back 2021: 01:30 on Nov 7 occurs twice; accepted.
        assert!(
            NormalizedBirth::parse(&birth("2021-11-07T01:30:00", "America/New_York")).is_ok()
        );
    }

    #[test]
    fn fingerprint_drops_seconds() {
        let a = NormalizedBirth::parse(&birth("1990-05-10T12:30:00", "Asia/Shanghai")).unwrap();
        let b = NormalizedBirth::parse(&birth("1990-05-10T12:30", "Asia/Shanghai")).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_clock_when_time_unknown() {
        let mut x = birth("1990-05-10T12:30:00", "Asia/Shanghai");
        x.is_time_known = false;
        let mut y = birth("1990-05-10T08:15:00", "Asia/Shanghai");
        y.is_time_known = false;
        let a = NormalizedBirth::parse(&x).unwrap().fingerprint();
        let b = NormalizedBirth::parse(&y).unwrap().fingerprint();
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_separates_gender_zone_and_flag() {
        let base = NormalizedBirth::parse(&birth("1990-05-10T12:30:00", "Asia/Shanghai")).unwrap();
        let mut female = birth("1990-05-10T12:30:00", "Asia/Shanghai");
        female.gender = Gender::Female;
        let other_zone = birth("1990-05-10T12:30:00", "Asia/Tokyo");
        let mut unknown = birth("1990-05-10T12:30:00", "Asia/Shanghai");
        unknown.is_time_known = false;
        assert_ne!(
            base.fingerprint(),
            NormalizedBirth::parse(&female).unwrap().fingerprint()
        );
        assert_ne!(
            base.fingerprint(),
            NormalizedBirth::parse(&other_zone).unwrap().fingerprint()
        );
        assert_ne!(
            base.fingerprint(),
            NormalizedBirth::parse(&unknown).unwrap().fingerprint()
        );
    }

    #[test]
    fn locale_not_part_of_record_identity_for_caching() {
        // Fingerprint has no locale field by construction; spot-check via
        // two records differing only in locale.
        let mut a = birth("1990-05-10T12:30:00", "Asia/Shanghai");
        a.locale = Locale::Zh;
        let b = birth("1990-05-10T12:30:00", "Asia/Shanghai");
        assert_eq!(
            NormalizedBirth::parse(&a).unwrap().fingerprint(),
            NormalizedBirth::parse(&b).unwrap().fingerprint()
        );
    }

    #[test]
    fn serde_uses_spec_field_names() {
        let json = r#"{
            "datetime": "1990-05-10T12:30:00",
            "timezone": "Asia/Shanghai",
            "gender": "male",
            "isTimeKnown": true
        }"#;
        let b: BirthData = serde_json::from_str(json).unwrap();
        assert_eq!(b.gender, Gender::Male);
        assert!(b.is_time_known);
        assert_eq!(b.locale, Locale::En);
    }
}
