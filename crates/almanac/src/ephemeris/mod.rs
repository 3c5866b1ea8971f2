pub mod julian;
pub mod types;

pub use julian::{julian_day, julian_day_from_parts, normalize_degrees, wrap};
pub use types::{GeoLocation, DEFAULT_LOCATION};
