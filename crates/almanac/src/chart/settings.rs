use crate::ephemeris::{GeoLocation, DEFAULT_LOCATION};
use crate::lunar::SYNODIC_MONTH;
use serde::{Deserialize, Serialize};

/// Forecast length bounds accepted by the weather provider.
pub const MIN_FORECAST_DAYS: u8 = 1;
pub const MAX_FORECAST_DAYS: u8 = 7;
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacSettings {
    /// Added to the moon age before bucketing. A phase that runs about 2°
    /// early needs roughly -0.16 days.
    pub phase_correction_days: f64,
    /// Used when the caller supplies no position.
    pub location: GeoLocation,
    pub forecast_days: u8,
}

impl Default for AlmanacSettings {
    fn default() -> Self {
        Self {
            phase_correction_days: 0.0,
            location: DEFAULT_LOCATION,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl AlmanacSettings {
    /// Largest correction that still means "shift", not "pick another phase".
    pub const MAX_PHASE_CORRECTION_DAYS: f64 = SYNODIC_MONTH / 2.0;

    /// Human-readable problems with these settings; empty when valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.phase_correction_days.is_finite()
            || self.phase_correction_days.abs() > Self::MAX_PHASE_CORRECTION_DAYS
        {
            problems.push(format!(
                "phase_correction_days must be a finite value within ±{:.3}, got {}",
                Self::MAX_PHASE_CORRECTION_DAYS,
                self.phase_correction_days
            ));
        }
        if !(-90.0..=90.0).contains(&self.location.lat) {
            problems.push(format!("location.lat must be within ±90, got {}", self.location.lat));
        }
        if !(-180.0..=180.0).contains(&self.location.lon) {
            problems.push(format!("location.lon must be within ±180, got {}", self.location.lon));
        }
        if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            problems.push(format!(
                "forecast_days must be within {MIN_FORECAST_DAYS}..={MAX_FORECAST_DAYS}, got {}",
                self.forecast_days
            ));
        }
        problems
    }
}
