use almanac_config::{load_settings, load_settings_from};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[almanac]\nphase_correction_days = 0.5\nforecast_days = 5\n\n[almanac.location]\nlat = 58.378\nlon = 26.729"
    )
    .unwrap();

    let settings = load_settings_from(file.path()).unwrap();
    assert_eq!(settings.phase_correction_days, 0.5);
    assert_eq!(settings.forecast_days, 5);
    assert_eq!(settings.location.lat, 58.378);
    assert_eq!(settings.location.lon, 26.729);

    let same = load_settings(Some(file.path())).unwrap();
    assert_eq!(same, settings);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_settings_from(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_unrelated_sections_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[garden]\nbeds = 4\n").unwrap();
    let settings = load_settings_from(file.path()).unwrap();
    assert_eq!(settings, almanac::AlmanacSettings::default());
}
