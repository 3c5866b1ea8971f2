//! Garden almanac: moon phase, tropical zodiac and biodynamic day type for
//! an instant, with gardening advice picked from fixed rule tables.
//!
//! Every calculation is a pure function of a UTC instant.
//!
//! ```
//! use almanac::{lunar_phase, zodiac_reading, compose_advisory};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
//! let phase = lunar_phase(&now);
//! let zodiac = zodiac_reading(&now);
//! let advice = compose_advisory(&phase, Some(&zodiac));
//! assert_eq!(advice.title.label(), "Täiskuu");
//! ```

pub mod advice;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod lunar;
pub mod weather;
pub mod western;

pub use advice::{compose_advisory, AdvisoryPayload, ZodiacAdvice};
pub use chart::{Almanac, AlmanacReport, AlmanacSettings, PanelSection, SunMoonPanel};
pub use ephemeris::{julian_day, julian_day_from_parts, GeoLocation, DEFAULT_LOCATION};
pub use error::AlmanacError;
pub use lunar::{lunar_phase, lunar_phase_with_correction, LunarPhaseReading, MoonPhase};
pub use weather::{forecast_url, weather_icon, WeatherCondition, WeatherSnapshot};
pub use western::{zodiac_reading, BiodynamicDayType, ZodiacReading, ZodiacSign};
