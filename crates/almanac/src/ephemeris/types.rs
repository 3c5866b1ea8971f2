use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Tallinn, used whenever the caller has no position of its own.
pub const DEFAULT_LOCATION: GeoLocation = GeoLocation {
    lat: 59.437,
    lon: 24.7536,
};

impl Default for GeoLocation {
    fn default() -> Self {
        DEFAULT_LOCATION
    }
}
