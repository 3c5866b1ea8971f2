use almanac::{AlmanacSettings, GeoLocation};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AlmanacToml {
    #[serde(default)]
    phase_correction_days: Option<f64>,
    #[serde(default)]
    forecast_days: Option<u8>,
    #[serde(default)]
    location: Option<LocationToml>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    almanac: Option<AlmanacToml>,
}

/// Relative locations tried for `configs/almanac.toml`, from the workspace
/// root and from a crate directory.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/almanac.toml", "../../configs/almanac.toml"];

/// First existing default config path, if any.
pub fn find_config_path() -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Parse settings from TOML text. Absent keys keep their defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<AlmanacSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse almanac config: {e}"))?;
    let AlmanacToml {
        phase_correction_days,
        forecast_days,
        location,
    } = root.almanac.unwrap_or_default();

    let mut settings = AlmanacSettings::default();
    if let Some(days) = phase_correction_days {
        settings.phase_correction_days = days;
    }
    if let Some(days) = forecast_days {
        settings.forecast_days = days;
    }
    if let Some(LocationToml { lat, lon }) = location {
        settings.location = GeoLocation { lat, lon };
    }

    let problems = settings.problems();
    if !problems.is_empty() {
        anyhow::bail!("Invalid [almanac] config: {}", problems.join("; "));
    }
    Ok(settings)
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<AlmanacSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let settings = parse_settings(&text)?;
    debug!("loaded almanac settings from {}", path.display());
    Ok(settings)
}

/// Load from an explicit path, else the first default path, else defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<AlmanacSettings> {
    if let Some(path) = path {
        return load_settings_from(path);
    }
    match find_config_path() {
        Some(found) => load_settings_from(&found),
        None => {
            warn!(
                "No almanac config found at {:?}, using defaults",
                DEFAULT_CONFIG_PATHS
            );
            Ok(AlmanacSettings::default())
        }
    }
}
