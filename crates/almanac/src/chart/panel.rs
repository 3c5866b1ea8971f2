//! "Päike ja kuu" panel: the advisory grouped into titled sections.

use crate::advice::composer::phase_header_line;
use crate::advice::AdvisoryPayload;
use serde::{Deserialize, Serialize};

pub const PANEL_TITLE: &str = "Päike ja kuu";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunMoonPanel {
    pub title: String,
    /// "Päike: …", "Kuu: …", "Kuufaas: …"
    pub header_lines: Vec<String>,
    pub focus_line: String,
    /// Sobib / Tööd / Märksõnad / Vähem sobiv, empty ones left out.
    pub sections: Vec<PanelSection>,
}

fn non_empty_section(title: &str, items: &[String]) -> Option<PanelSection> {
    let cleaned: Vec<String> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(PanelSection {
            title: title.to_string(),
            items: cleaned,
        })
    }
}

impl SunMoonPanel {
    pub fn from_advisory(advice: &AdvisoryPayload) -> Self {
        let header_lines = match &advice.zodiac {
            Some(zodiac) => zodiac.header_lines.clone(),
            None => vec![phase_header_line(advice.title.label(), &advice.subtitle)],
        };

        let sections = [
            non_empty_section("Sobib", &advice.suitable),
            non_empty_section("Tööd", &advice.tasks),
            non_empty_section("Märksõnad", &advice.keywords),
            non_empty_section("Vähem sobiv", &advice.less_suitable),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: PANEL_TITLE.to_string(),
            header_lines,
            focus_line: advice.focus_line.clone(),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&PanelSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Plain-text rendering, one line per header/section.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.header_lines.iter().cloned());
        lines.push(self.focus_line.clone());
        for section in &self.sections {
            lines.push(format!("{}: {}", section.title, section.items.join(", ")));
        }
        lines.join("\n")
    }
}
