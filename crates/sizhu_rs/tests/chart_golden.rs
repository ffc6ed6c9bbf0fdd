//! Golden-value integration tests for the full chart pipeline.
//!
//! Exercises the documented scenarios through the public engine surface.

use sizhu_rs::*;

fn engine() -> BaziEngine {
    BaziEngine::new(EngineConfig::default()).expect("default config is valid")
}

fn shanghai(datetime: &str, gender: Gender, time_known: bool) -> BirthData {
    BirthData::new(datetime, "Asia/Shanghai", gender, time_known)
}

/// 1990-05-10 12:30 Asia/Shanghai, male, time known: the reference chart.
#[test]
fn golden_reference_chart() {
    let chart = engine()
        .chart(&shanghai("1990-05-10T12:30:00", Gender::Male, true))
        .unwrap();
    assert_eq!(chart.pillars.year.name(), "GengWu");
    assert_eq!(chart.pillars.month.name(), "XinSi");
    assert_eq!(chart.pillars.day.name(), "YiHai");
    assert_eq!(chart.pillars.hour.known().unwrap().name(), "RenWu");
    assert_eq!(chart.pillars.day_master(), HeavenlyStem::Yi);
    assert_eq!(chart.strength.level, StrengthLevel::Weak);
    assert_eq!(chart.luck_pillars.len(), 8);
}

/// The day pillar must agree with the epoch-offset method from the
/// documented anchor 2000-01-01 = WuWu.
#[test]
fn day_pillar_epoch_anchor() {
    let chart = engine()
        .chart(&shanghai("2000-01-01T12:00:00", Gender::Male, true))
        .unwrap();
    assert_eq!(chart.pillars.day.name(), "WuWu");
    assert_eq!(chart.pillars.day.cycle_index(), 54);
}

/// 23:30 births belong to the next day's pillar and the Zi double-hour.
#[test]
fn late_zi_hour_crosses_day() {
    let eng = engine();
    let late = eng
        .chart(&shanghai("1990-05-10T23:30:00", Gender::Male, true))
        .unwrap();
    let next_day = eng
        .chart(&shanghai("1990-05-11T12:00:00", Gender::Male, true))
        .unwrap();
    assert_eq!(late.pillars.day, next_day.pillars.day);
    assert_eq!(
        late.pillars.hour.known().unwrap().branch(),
        EarthlyBranch::Zi
    );
}

/// A birth before Li-Chun belongs to the prior stem-branch year.
#[test]
fn pre_li_chun_birth_keeps_prior_year() {
    let chart = engine()
        .chart(&shanghai("1990-02-03T12:00:00", Gender::Male, true))
        .unwrap();
    assert_eq!(chart.pillars.year.name(), "JiSi");
}

/// Unknown birth time yields Hour = Unknown and suppresses hour analyses.
#[test]
fn unknown_time_never_guessed() {
    let chart = engine()
        .chart(&shanghai("1990-05-10T00:00:00", Gender::Male, false))
        .unwrap();
    assert_eq!(chart.pillars.hour, HourPillar::Unknown);
    assert_eq!(chart.ten_gods.hour, None);
    assert_eq!(chart.distribution.total(), 75);
}

/// Invalid inputs fail with typed errors, never a fallback chart.
#[test]
fn invalid_inputs_fail_fast() {
    let eng = engine();
    assert!(matches!(
        eng.chart(&shanghai("invalid-date", Gender::Male, true)),
        Err(BaziError::InvalidDateTime(_))
    ));
    assert!(matches!(
        eng.chart(&BirthData::new(
            "1990-05-10T12:30:00",
            "Not/AZone",
            Gender::Male,
            true
        )),
        Err(BaziError::InvalidTimezone(_))
    ));
    // Year outside the solar-term tables.
    assert!(matches!(
        eng.chart(&shanghai("1890-05-10T12:30:00", Gender::Male, true)),
        Err(BaziError::Chart(_))
    ));
}

/// Solar terms are strictly increasing for every supported year.
#[test]
fn solar_terms_increasing_over_full_range() {
    for year in 1901..=2099 {
        let terms = year_solar_terms(year).unwrap();
        assert_eq!(terms.len(), 24);
        for w in terms.windows(2) {
            assert!(w[0].at < w[1].at, "year {year}");
        }
    }
}

/// Luck pillars are contiguous, monotonic, and direction-stable.
#[test]
fn luck_pillar_sequence_invariants() {
    for gender in [Gender::Male, Gender::Female] {
        let chart = engine()
            .chart(&shanghai("1990-05-10T12:30:00", gender, true))
            .unwrap();
        let decades = &chart.luck_pillars;
        for w in decades.windows(2) {
            assert_eq!(w[0].end_age + 1, w[1].start_age);
            assert_eq!(w[0].direction, w[1].direction);
            let step = i32::from(w[1].stem_branch.cycle_index())
                - i32::from(w[0].stem_branch.cycle_index());
            let expected: i32 = match w[0].direction {
                LuckDirection::Forward => 1,
                LuckDirection::Backward => -1,
            };
            assert_eq!(step.rem_euclid(60), expected.rem_euclid(60));
        }
    }
}

/// The locale hint changes labels only, never the numeric chart.
#[test]
fn locale_affects_labels_only() {
    let eng = engine();
    let mut zh = shanghai("1990-05-10T12:30:00", Gender::Male, true);
    zh.locale = Locale::Zh;
    let en = shanghai("1990-05-10T12:30:00", Gender::Male, true);

    let chart_zh = eng.chart(&zh).unwrap();
    let chart_en = eng.chart(&en).unwrap();
    assert_eq!(*chart_zh, *chart_en);

    let labels_zh = eng.chart_labels(&zh).unwrap();
    let labels_en = eng.chart_labels(&en).unwrap();
    assert_eq!(labels_zh.day, "乙亥");
    assert_eq!(labels_en.day, "YiHai");
}

/// Chart JSON survives a serde round trip.
#[test]
fn chart_serializes_to_json() {
    let chart = engine()
        .chart(&shanghai("1990-05-10T12:30:00", Gender::Male, true))
        .unwrap();
    let json = serde_json::to_string(&*chart).unwrap();
    let back: BaziChart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, *chart);
}
