//! Civil calendar to Julian Day conversion.
//!
//! Uses the Fliegel–Van Flandern integer formula. The fractional part is
//! counted from civil midnight, so the values are offset by half a day from
//! astronomical (noon based) Julian Days. Every stage of the pipeline uses
//! the same convention, which is all the differences below rely on.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day for a UTC instant. Sub-second precision is dropped.
pub fn julian_day(dt: &DateTime<Utc>) -> f64 {
    julian_day_from_parts(
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    )
}

/// Julian Day from proleptic Gregorian UTC components.
pub fn julian_day_from_parts(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> f64 {
    let day_fraction = day as f64
        + (hour as f64 + (minute as f64 + second as f64 / 60.0) / 60.0) / 24.0;

    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y2 = year as i64 + 4800 - a;
    let m2 = month + 12 * a - 3;

    let whole = (153 * m2 + 2).div_euclid(5) + 365 * y2 + y2.div_euclid(4)
        - y2.div_euclid(100)
        + y2.div_euclid(400)
        - 32045;

    day_fraction + whole as f64
}

/// Floored modulo: the result is always in `[0, modulus)` for a positive modulus.
pub fn wrap(value: f64, modulus: f64) -> f64 {
    ((value % modulus) + modulus) % modulus
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    wrap(value, 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_j2000_midnight() {
        // 2000-01-01 has JDN 2451545; midnight-based fraction adds nothing.
        assert_eq!(julian_day_from_parts(2000, 1, 1, 0, 0, 0), 2451545.0);
    }

    #[test]
    fn test_time_of_day_fraction() {
        let jd = julian_day_from_parts(2000, 1, 6, 18, 14, 0);
        assert!((jd - 2451550.759722222).abs() < 1e-9);
    }

    #[test]
    fn test_datetime_matches_parts() {
        let dt = Utc.with_ymd_and_hms(2024, 7, 5, 6, 30, 15).unwrap();
        assert_eq!(julian_day(&dt), julian_day_from_parts(2024, 7, 5, 6, 30, 15));
    }

    #[test]
    fn test_leap_day_is_contiguous() {
        let feb29 = julian_day_from_parts(2024, 2, 29, 0, 0, 0);
        let mar1 = julian_day_from_parts(2024, 3, 1, 0, 0, 0);
        assert_eq!(mar1 - feb29, 1.0);
        // 1900 is not a leap year in the Gregorian calendar
        let feb28 = julian_day_from_parts(1900, 2, 28, 0, 0, 0);
        let mar1 = julian_day_from_parts(1900, 3, 1, 0, 0, 0);
        assert_eq!(mar1 - feb28, 1.0);
    }

    #[test]
    fn test_wrap_negative() {
        assert!((wrap(-1.0, 29.5) - 28.5).abs() < 1e-12);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }
}
