pub mod codes;
pub mod forecast;
pub mod types;

pub use codes::{weather_icon, WeatherCondition};
pub use forecast::{clamp_forecast_days, forecast_url, OPEN_METEO_FORECAST_URL};
pub use types::{DailyForecast, WeatherSnapshot};
