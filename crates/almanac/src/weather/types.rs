use crate::weather::codes::{weather_icon, WeatherCondition};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub t_max: Option<f64>,
    pub t_min: Option<f64>,
    pub weather_code: Option<u16>,
}

/// Current conditions plus a short daily forecast, today first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temp: Option<f64>,
    pub weather_code: Option<u16>,
    /// Today's max/min, copied from `daily[0]`.
    pub t_max: Option<f64>,
    pub t_min: Option<f64>,
    pub daily: Vec<DailyForecast>,
    pub updated_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather_code.map(WeatherCondition::from_wmo_code)
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.weather_code.map(weather_icon)
    }

    /// e.g. "Pilvine, 12.4 °C (max 15.0 °C, min 8.1 °C)"
    pub fn summary(&self) -> String {
        let condition = self
            .condition()
            .map(WeatherCondition::label)
            .unwrap_or("Teadmata");
        let mut out = condition.to_string();
        if let Some(temp) = self.temp {
            out.push_str(&format!(", {temp:.1} °C"));
        }
        match (self.t_max, self.t_min) {
            (Some(max), Some(min)) => out.push_str(&format!(" (max {max:.1} °C, min {min:.1} °C)")),
            (Some(max), None) => out.push_str(&format!(" (max {max:.1} °C)")),
            (None, Some(min)) => out.push_str(&format!(" (min {min:.1} °C)")),
            (None, None) => {}
        }
        out
    }
}
