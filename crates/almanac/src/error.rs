use thiserror::Error;

/// Errors raised at the text/JSON edges of the almanac.
///
/// The astronomical pipeline itself is total and never returns these.
#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("Unknown moon phase: {label}. Valid phases: {valid:?}")]
    UnknownPhase { label: String, valid: Vec<String> },
    #[error("Unknown zodiac sign: {label}. Valid signs: {valid:?}")]
    UnknownSign { label: String, valid: Vec<String> },
    #[error("Unknown biodynamic day type: {label}. Valid day types: {valid:?}")]
    UnknownDayType { label: String, valid: Vec<String> },
    #[error("Malformed weather payload: {0}")]
    WeatherPayload(#[from] serde_json::Error),
}
