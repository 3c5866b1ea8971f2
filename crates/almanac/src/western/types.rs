//! Zodiac reading for one instant.

use crate::western::biodynamic::BiodynamicDayType;
use crate::western::signs::ZodiacSign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacReading {
    #[serde(rename = "sunLongitude")]
    pub sun_longitude: f64,
    #[serde(rename = "moonLongitude")]
    pub moon_longitude: f64,
    #[serde(rename = "sunSign")]
    pub sun_sign: ZodiacSign,
    #[serde(rename = "moonSign")]
    pub moon_sign: ZodiacSign,
    #[serde(rename = "biodynamicDayType")]
    pub day_type: BiodynamicDayType,
}
