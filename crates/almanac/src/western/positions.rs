//! Mean sun and moon longitudes.
//!
//! Both bodies advance linearly: the sun by one tropical year per turn from
//! the 2000 vernal equinox, the moon by one sidereal month per turn from the
//! sun's longitude at the reference new moon. This is not an ephemeris and
//! drifts over long spans; the sign boundaries downstream depend on this
//! exact model.

use crate::ephemeris::julian::{julian_day, normalize_degrees};
use crate::lunar::REFERENCE_NEW_MOON_JD;
use chrono::{DateTime, Utc};

/// Tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.2422;
/// Sidereal month in days (one full turn of the ecliptic).
pub const SIDEREAL_MONTH: f64 = 27.321661;
/// Julian Day of the 2000 vernal equinox.
pub const JD_VERNAL_EQUINOX_2000: f64 = 2451623.81;

/// Sun ecliptic longitude (0..360) for a Julian Day.
pub fn sun_longitude_at(jd: f64) -> f64 {
    normalize_degrees((jd - JD_VERNAL_EQUINOX_2000) / TROPICAL_YEAR * 360.0)
}

/// Moon ecliptic longitude (0..360) for a Julian Day.
pub fn moon_longitude_at(jd: f64) -> f64 {
    let reference = *REFERENCE_NEW_MOON_JD;
    let sun_at_reference = sun_longitude_at(reference);
    normalize_degrees(sun_at_reference + (jd - reference) / SIDEREAL_MONTH * 360.0)
}

pub fn sun_longitude(dt: &DateTime<Utc>) -> f64 {
    sun_longitude_at(julian_day(dt))
}

pub fn moon_longitude(dt: &DateTime<Utc>) -> f64 {
    moon_longitude_at(julian_day(dt))
}
