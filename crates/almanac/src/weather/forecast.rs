//! Open-Meteo forecast request and response shapes.
//!
//! Only the pure halves live here: building the request URL and decoding a
//! response body. Fetching is left to the caller's HTTP client.

use crate::chart::settings::{DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS};
use crate::ephemeris::GeoLocation;
use crate::error::AlmanacError;
use crate::weather::types::{DailyForecast, WeatherSnapshot};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde::Deserialize;

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: Option<f64>,
    weather_code: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoDaily {
    #[serde(default)]
    time: Vec<NaiveDate>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<u16>>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoResponse {
    current: Option<OpenMeteoCurrent>,
    daily: Option<OpenMeteoDaily>,
}

/// Clamp a requested forecast length to what the provider serves.
pub fn clamp_forecast_days(days: Option<u8>) -> u8 {
    let requested = days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let clamped = requested.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS);
    if clamped != requested {
        warn!("forecast_days {requested} out of range, using {clamped}");
    }
    clamped
}

/// Forecast URL with current temperature/code and daily max/min/code.
pub fn forecast_url(location: &GeoLocation, days: Option<u8>) -> String {
    format!(
        "{OPEN_METEO_FORECAST_URL}?latitude={}&longitude={}\
         &current=temperature_2m,weather_code\
         &daily=weather_code,temperature_2m_max,temperature_2m_min\
         &forecast_days={}&timezone=auto",
        location.lat,
        location.lon,
        clamp_forecast_days(days)
    )
}

impl WeatherSnapshot {
    /// Decode an Open-Meteo forecast body. Missing sections or values become `None`.
    pub fn from_open_meteo(body: &str, updated_at: DateTime<Utc>) -> Result<Self, AlmanacError> {
        let response: OpenMeteoResponse = serde_json::from_str(body)?;
        let current = response.current.unwrap_or_default();
        let daily_raw = response.daily.unwrap_or_default();

        let daily: Vec<DailyForecast> = daily_raw
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| DailyForecast {
                date: *date,
                t_max: daily_raw.temperature_2m_max.get(i).copied().flatten(),
                t_min: daily_raw.temperature_2m_min.get(i).copied().flatten(),
                weather_code: daily_raw.weather_code.get(i).copied().flatten(),
            })
            .collect();

        let (t_max, t_min) = daily
            .first()
            .map(|today| (today.t_max, today.t_min))
            .unwrap_or((None, None));

        Ok(Self {
            temp: current.temperature_2m,
            weather_code: current.weather_code,
            t_max,
            t_min,
            daily,
            updated_at,
        })
    }
}
