pub mod panel;
pub mod report;
pub mod settings;

pub use panel::{PanelSection, SunMoonPanel, PANEL_TITLE};
pub use report::{Almanac, AlmanacReport};
pub use settings::{AlmanacSettings, DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS};
