//! WMO weather interpretation codes, as returned by Open-Meteo.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Changeable,
}

fn is_rain(code: u16) -> bool {
    matches!(code, 51..=57 | 61..=67 | 80..=82)
}

fn is_snow(code: u16) -> bool {
    matches!(code, 71..=77 | 85 | 86)
}

fn is_fog(code: u16) -> bool {
    matches!(code, 45 | 48)
}

fn is_thunder(code: u16) -> bool {
    matches!(code, 95..=99)
}

impl WeatherCondition {
    /// Coarse condition for a WMO code; thunderstorms count as rain.
    pub fn from_wmo_code(code: u16) -> Self {
        match code {
            0 => WeatherCondition::Sunny,
            1..=3 => WeatherCondition::Cloudy,
            c if is_fog(c) => WeatherCondition::Changeable,
            c if is_rain(c) || is_thunder(c) => WeatherCondition::Rainy,
            c if is_snow(c) => WeatherCondition::Snowy,
            _ => WeatherCondition::Changeable,
        }
    }

    /// Estonian label.
    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Päikeseline",
            WeatherCondition::Cloudy => "Pilvine",
            WeatherCondition::Rainy => "Vihmane",
            WeatherCondition::Snowy => "Lumine",
            WeatherCondition::Changeable => "Muutlik",
        }
    }
}

/// Material Symbols icon for a WMO code.
pub fn weather_icon(code: u16) -> &'static str {
    match code {
        0 => "sunny",
        1..=3 => "cloud",
        c if is_fog(c) => "foggy",
        c if is_rain(c) => "rainy",
        c if is_snow(c) => "weather_snowy",
        c if is_thunder(c) => "thunderstorm",
        _ => "cloud",
    }
}
