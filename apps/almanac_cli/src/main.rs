mod render;

use almanac::{
    compose_advisory, forecast_url, Almanac, GeoLocation, LunarPhaseReading, MoonPhase,
    WeatherSnapshot, SunMoonPanel,
};
use almanac::lunar::SYNODIC_MONTH;
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Moon phase, zodiac and garden advice")]
struct Args {
    /// Config file (default: configs/almanac.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Phase, signs, day type and advice for an instant.
    Report {
        /// RFC 3339 timestamp (default: now).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Print the full report as JSON instead of the text panel.
        #[arg(long)]
        json: bool,
    },
    /// Advice for a named phase, e.g. "Täiskuu" or "full moon".
    Phase {
        label: String,
        #[arg(long)]
        json: bool,
    },
    /// Summarise a saved Open-Meteo forecast response.
    Weather { file: PathBuf },
    /// Print the Open-Meteo forecast URL.
    ForecastUrl {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long)]
        days: Option<u8>,
    },
}

fn parse_instant(date: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match date {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --date {text:?}, expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

fn location(lat: Option<f64>, lon: Option<f64>) -> Option<GeoLocation> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(GeoLocation { lat, lon }),
        _ => None,
    }
}

/// A reading at the centre of the phase's octant, for advice without a date.
fn nominal_reading(phase: MoonPhase) -> LunarPhaseReading {
    let t = phase.index() as f64 / 8.0;
    LunarPhaseReading {
        age_days: t * SYNODIC_MONTH,
        illumination: almanac::lunar::illumination_at(t),
        phase_index: phase.index(),
        phase,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let settings = almanac_config::load_settings(args.config.as_deref())?;

    match args.command {
        Command::Report { date, lat, lon, json } => {
            let instant = parse_instant(date.as_deref())?;
            let report = Almanac::new(settings).report(instant, location(lat, lon));
            info!("report for {} at {:?}", report.instant, report.location);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::report_text(&report));
            }
        }
        Command::Phase { label, json } => {
            let phase: MoonPhase = label.parse()?;
            let advice = compose_advisory(&nominal_reading(phase), None);
            if json {
                println!("{}", serde_json::to_string_pretty(&advice)?);
            } else {
                println!("{}", render::advice_text(&advice));
                println!();
                println!("{}", SunMoonPanel::from_advisory(&advice).to_text());
            }
        }
        Command::Weather { file } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("Could not read {}", file.display()))?;
            let snapshot = WeatherSnapshot::from_open_meteo(&body, Utc::now())?;
            println!("{}", render::weather_text(&snapshot));
        }
        Command::ForecastUrl { lat, lon, days } => {
            let loc = location(lat, lon).unwrap_or(settings.location);
            println!("{}", forecast_url(&loc, days.or(Some(settings.forecast_days))));
        }
    }
    Ok(())
}
