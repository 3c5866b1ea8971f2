pub mod biodynamic;
pub mod positions;
pub mod signs;
pub mod types;

pub use biodynamic::{BiodynamicDayType, BiodynamicRule};
pub use positions::{
    moon_longitude, moon_longitude_at, sun_longitude, sun_longitude_at, JD_VERNAL_EQUINOX_2000,
    SIDEREAL_MONTH, TROPICAL_YEAR,
};
pub use signs::{sign_index, Element, ZodiacSign};
pub use types::ZodiacReading;

use crate::ephemeris::julian_day;
use chrono::{DateTime, Utc};

/// Sun sign, moon sign and biodynamic day type for an instant.
pub fn zodiac_reading(dt: &DateTime<Utc>) -> ZodiacReading {
    let jd = julian_day(dt);
    let sun_longitude = sun_longitude_at(jd);
    let moon_longitude = moon_longitude_at(jd);
    let moon_sign = ZodiacSign::from_longitude(moon_longitude);

    ZodiacReading {
        sun_longitude,
        moon_longitude,
        sun_sign: ZodiacSign::from_longitude(sun_longitude),
        moon_sign,
        day_type: BiodynamicDayType::for_sign(moon_sign),
    }
}
