use almanac::{AdvisoryPayload, AlmanacReport, WeatherSnapshot};
use almanac::weather::weather_icon;

pub fn report_text(report: &AlmanacReport) -> String {
    let mut lines = vec![
        format!("{} (JD {:.5})", report.instant.format("%Y-%m-%d %H:%M:%S UTC"), report.julian_day),
        format!("Asukoht: {:.4}, {:.4}", report.location.lat, report.location.lon),
        format!(
            "Kuu vanus: {:.2} päeva, faas {}/8",
            report.lunar.age_days, report.lunar.phase_index
        ),
        String::new(),
        report.panel.to_text(),
    ];
    if let Some(zodiac) = &report.advisory.zodiac {
        lines.push(String::new());
        lines.push(zodiac.hint.clone());
        lines.push(zodiac.description.clone());
    }
    lines.join("\n")
}

pub fn advice_text(advice: &AdvisoryPayload) -> String {
    format!(
        "{} [{}] {}\n{}\n{}",
        advice.title, advice.icon, advice.subtitle, advice.text, advice.text_long
    )
}

pub fn weather_text(snapshot: &WeatherSnapshot) -> String {
    let mut lines = vec![snapshot.summary()];
    for day in &snapshot.daily {
        let icon = day.weather_code.map(weather_icon).unwrap_or("-");
        let max = day.t_max.map(|t| format!("{t:.1}")).unwrap_or_else(|| "?".to_string());
        let min = day.t_min.map(|t| format!("{t:.1}")).unwrap_or_else(|| "?".to_string());
        lines.push(format!("{}  {icon:<14} {max} / {min} °C", day.date));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac::Almanac;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_report_text_includes_panel() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let report = Almanac::default().report(instant, None);
        let text = report_text(&report);
        assert!(text.starts_with("2024-01-25 17:54:00 UTC"));
        assert!(text.contains("Päike ja kuu"));
        assert!(text.contains("Sobib: "));
    }

    #[test]
    fn test_weather_text_lists_days() {
        let body = r#"{"current":{"temperature_2m":3.0,"weather_code":71},
            "daily":{"time":["2024-12-01"],"weather_code":[71],
            "temperature_2m_max":[4.0],"temperature_2m_min":[-2.5]}}"#;
        let snapshot = WeatherSnapshot::from_open_meteo(body, Utc::now()).unwrap();
        let text = weather_text(&snapshot);
        assert!(text.starts_with("Lumine, 3.0 °C"));
        assert!(text.contains("2024-12-01  weather_snowy"));
        assert!(text.contains("4.0 / -2.5 °C"));
    }
}
