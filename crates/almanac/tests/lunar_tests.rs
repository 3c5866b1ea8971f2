use almanac::lunar::*;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap()
}

fn days(d: f64) -> Duration {
    Duration::seconds((d * 86400.0).round() as i64)
}

#[test]
fn test_reference_new_moon() {
    let reading = lunar_phase(&reference());
    assert_eq!(reading.phase_index, 0);
    assert_eq!(reading.phase, MoonPhase::NewMoon);
    assert_eq!(reading.phase.label(), "Uuskuu");
    assert!(reading.illumination < 0.02);
    assert!(reading.age_days.abs() < 1e-6);
}

#[test]
fn test_half_lunation_is_full_moon() {
    let reading = lunar_phase(&(reference() + days(14.7653)));
    assert_eq!(reading.phase_index, 4);
    assert_eq!(reading.phase, MoonPhase::FullMoon);
    assert_eq!(reading.phase.label(), "Täiskuu");
    assert!(reading.illumination > 0.98);
}

#[test]
fn test_octant_centres_map_to_each_phase() {
    for (i, expected) in MoonPhase::ALL.iter().enumerate() {
        let instant = reference() + days(i as f64 * SYNODIC_MONTH / 8.0);
        let reading = lunar_phase(&instant);
        assert_eq!(reading.phase_index, i);
        assert_eq!(reading.phase, *expected);
    }
}

#[test]
fn test_periodic_in_synodic_months() {
    let base = reference() + days(3.0);
    let expected = lunar_phase(&base);
    assert_eq!(expected.phase_index, 1);
    for k in -40..=40 {
        let shifted = base + days(k as f64 * SYNODIC_MONTH);
        let reading = lunar_phase(&shifted);
        assert_eq!(reading.phase_index, expected.phase_index, "k = {k}");
        assert!((reading.age_days - expected.age_days).abs() < 1e-4, "k = {k}");
    }
}

#[test]
fn test_deterministic() {
    let instant = Utc.with_ymd_and_hms(2031, 8, 14, 3, 27, 51).unwrap();
    assert_eq!(lunar_phase(&instant), lunar_phase(&instant));
}

#[test]
fn test_pre_epoch_age_is_non_negative() {
    let instant = Utc.with_ymd_and_hms(1999, 12, 25, 0, 0, 0).unwrap();
    let reading = lunar_phase(&instant);
    assert!(reading.age_days >= 0.0);
    assert!((reading.age_days - 16.7709).abs() < 1e-3);
    assert_eq!(reading.phase, MoonPhase::WaningGibbous);

    let long_ago = Utc.with_ymd_and_hms(1650, 3, 1, 12, 0, 0).unwrap();
    let reading = lunar_phase(&long_ago);
    assert!(reading.age_days >= 0.0 && reading.age_days < SYNODIC_MONTH);
}

#[test]
fn test_range_invariants() {
    let start = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
    for step in 0..1000 {
        let instant = start + days(step as f64 * 37.3);
        let reading = lunar_phase(&instant);
        assert!(reading.age_days >= 0.0 && reading.age_days < SYNODIC_MONTH);
        assert!((0.0..=1.0).contains(&reading.illumination));
        assert!(reading.phase_index < 8);
        assert_eq!(reading.phase.index(), reading.phase_index);
    }
}

#[test]
fn test_illumination_symmetry() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        assert!((illumination_at(t) - illumination_at(1.0 - t)).abs() < 1e-12, "t = {t}");
    }
}

#[test]
fn test_known_lunations() {
    // Full moon 2024-01-25 17:54 UTC, new moon 2024-01-11 11:57 UTC
    let full = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    assert_eq!(lunar_phase(&full).phase, MoonPhase::FullMoon);
    let new = Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap();
    assert_eq!(lunar_phase(&new).phase, MoonPhase::NewMoon);
    let quarter = Utc.with_ymd_and_hms(1990, 5, 17, 12, 0, 0).unwrap();
    assert_eq!(lunar_phase(&quarter).phase, MoonPhase::LastQuarter);
}

#[test]
fn test_phase_correction_shifts_and_rewraps() {
    let shifted = lunar_phase_with_correction(&reference(), 0.16);
    assert!((shifted.age_days - 0.16).abs() < 1e-6);

    let wrapped = lunar_phase_with_correction(&reference(), -0.16);
    assert!((wrapped.age_days - (SYNODIC_MONTH - 0.16)).abs() < 1e-6);
    assert_eq!(wrapped.phase, MoonPhase::NewMoon);

    let instant = reference() + days(10.0);
    assert_eq!(lunar_phase_with_correction(&instant, 0.0), lunar_phase(&instant));
}
