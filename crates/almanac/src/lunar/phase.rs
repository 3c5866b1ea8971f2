//! Lunar phase from mean lunation.
//!
//! The moon age is measured from a fixed new moon (lunation 0,
//! 2000-01-06 18:14 UTC) in units of the mean synodic month. No perturbation
//! terms are applied; the result is good to a few hours, which is plenty for
//! an 8-way phase bucket.

use crate::ephemeris::julian::{julian_day, julian_day_from_parts, wrap};
use crate::error::AlmanacError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// UTC components of the reference new moon.
pub const REFERENCE_NEW_MOON: (i32, u32, u32, u32, u32, u32) = (2000, 1, 6, 18, 14, 0);

lazy_static::lazy_static! {
    /// Julian Day of [`REFERENCE_NEW_MOON`].
    pub static ref REFERENCE_NEW_MOON_JD: f64 = {
        let (y, mo, d, h, mi, s) = REFERENCE_NEW_MOON;
        julian_day_from_parts(y, mo, d, h, mi, s)
    };
}

/// The eight display phases, in lunation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "Uuskuu")]
    NewMoon,
    #[serde(rename = "Kasvav sirp")]
    WaxingCrescent,
    #[serde(rename = "Esimene veerand")]
    FirstQuarter,
    #[serde(rename = "Kasvav kumer kuu")]
    WaxingGibbous,
    #[serde(rename = "Täiskuu")]
    FullMoon,
    #[serde(rename = "Kahanev kumer kuu")]
    WaningGibbous,
    #[serde(rename = "Viimane veerand")]
    LastQuarter,
    #[serde(rename = "Kahanev sirp")]
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Phase for an octant index; wraps modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Estonian display label.
    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "Uuskuu",
            MoonPhase::WaxingCrescent => "Kasvav sirp",
            MoonPhase::FirstQuarter => "Esimene veerand",
            MoonPhase::WaxingGibbous => "Kasvav kumer kuu",
            MoonPhase::FullMoon => "Täiskuu",
            MoonPhase::WaningGibbous => "Kahanev kumer kuu",
            MoonPhase::LastQuarter => "Viimane veerand",
            MoonPhase::WaningCrescent => "Kahanev sirp",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the Estonian label or the English name, case-insensitively.
impl FromStr for MoonPhase {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label().to_lowercase() == wanted || p.english_name().to_lowercase() == wanted)
            .ok_or_else(|| AlmanacError::UnknownPhase {
                label: s.to_string(),
                valid: Self::ALL.iter().map(|p| p.label().to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhaseReading {
    /// Days since the last mean new moon, in `[0, SYNODIC_MONTH)`.
    #[serde(rename = "ageDays")]
    pub age_days: f64,
    /// Illuminated fraction, 0 at new moon and 1 at full moon.
    pub illumination: f64,
    #[serde(rename = "phaseIndex")]
    pub phase_index: usize,
    pub phase: MoonPhase,
}

impl LunarPhaseReading {
    /// Position in the lunation as a fraction in `[0, 1)`.
    pub fn cycle_fraction(&self) -> f64 {
        self.age_days / SYNODIC_MONTH
    }

    /// Illumination as a whole percentage.
    pub fn illumination_percent(&self) -> u32 {
        (self.illumination * 100.0 + 0.5).floor() as u32
    }
}

/// Illuminated fraction for a position `t` in the lunation.
pub fn illumination_at(t: f64) -> f64 {
    0.5 * (1.0 - (2.0 * PI * t).cos())
}

/// Nearest octant of `t`, so both ends of the cycle land on the new moon.
pub fn phase_index_at(t: f64) -> usize {
    let rounded = (t * 8.0 + 0.5).floor() as i64;
    rounded.rem_euclid(8) as usize
}

/// Moon age in days from a Julian Day, with an additive correction.
pub fn moon_age_days(jd: f64, correction_days: f64) -> f64 {
    let days_since_ref = jd - *REFERENCE_NEW_MOON_JD;
    let age = wrap(days_since_ref, SYNODIC_MONTH);
    wrap(age + correction_days, SYNODIC_MONTH)
}

/// Phase reading with no correction.
pub fn lunar_phase(dt: &DateTime<Utc>) -> LunarPhaseReading {
    lunar_phase_with_correction(dt, 0.0)
}

/// Phase reading with the moon age shifted by `correction_days`.
///
/// A phase running about 2° early corresponds to roughly -0.16 days.
pub fn lunar_phase_with_correction(dt: &DateTime<Utc>, correction_days: f64) -> LunarPhaseReading {
    let age_days = moon_age_days(julian_day(dt), correction_days);
    let t = age_days / SYNODIC_MONTH;
    let phase_index = phase_index_at(t);

    LunarPhaseReading {
        age_days,
        illumination: illumination_at(t),
        phase_index,
        phase: MoonPhase::from_index(phase_index),
    }
}
