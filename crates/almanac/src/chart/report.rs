//! One-call almanac for an instant and a place.

use crate::advice::{compose_advisory, AdvisoryPayload};
use crate::chart::panel::SunMoonPanel;
use crate::chart::settings::AlmanacSettings;
use crate::ephemeris::{julian_day, GeoLocation};
use crate::lunar::{lunar_phase_with_correction, LunarPhaseReading};
use crate::western::{zodiac_reading, ZodiacReading};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlmanacReport {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
    pub julian_day: f64,
    pub lunar: LunarPhaseReading,
    pub zodiac: ZodiacReading,
    pub advisory: AdvisoryPayload,
    pub panel: SunMoonPanel,
}

#[derive(Debug, Clone, Default)]
pub struct Almanac {
    settings: AlmanacSettings,
}

impl Almanac {
    pub fn new(settings: AlmanacSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AlmanacSettings {
        &self.settings
    }

    pub fn lunar(&self, instant: &DateTime<Utc>) -> LunarPhaseReading {
        lunar_phase_with_correction(instant, self.settings.phase_correction_days)
    }

    /// Full report. The location is carried through for display only.
    pub fn report(&self, instant: DateTime<Utc>, location: Option<GeoLocation>) -> AlmanacReport {
        let location = location.unwrap_or(self.settings.location);
        let lunar = self.lunar(&instant);
        let zodiac = zodiac_reading(&instant);
        debug!(
            "almanac {}: phase {} ({:.2} d, {:.0}%), sun {}, moon {} ({})",
            instant,
            lunar.phase,
            lunar.age_days,
            lunar.illumination * 100.0,
            zodiac.sun_sign,
            zodiac.moon_sign,
            zodiac.day_type
        );

        let advisory = compose_advisory(&lunar, Some(&zodiac));
        let panel = SunMoonPanel::from_advisory(&advisory);

        AlmanacReport {
            instant,
            location,
            julian_day: julian_day(&instant),
            lunar,
            zodiac,
            advisory,
            panel,
        }
    }
}
