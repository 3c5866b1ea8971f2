use crate::lunar::MoonPhase;
use crate::western::{BiodynamicDayType, ZodiacSign};
use serde::{Deserialize, Serialize};

/// Advice built for one phase reading, ready for a view-model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryPayload {
    pub title: MoonPhase,
    pub icon: String,
    /// e.g. "Valgustatus 62%"
    pub subtitle: String,
    /// Short summary.
    pub text: String,
    /// Details that do not repeat `text`.
    pub text_long: String,
    pub focus_line: String,
    pub tags: Vec<String>,
    pub suitable: Vec<String>,
    pub tasks: Vec<String>,
    pub keywords: Vec<String>,
    pub less_suitable: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub zodiac: Option<ZodiacAdvice>,
}

/// Sun/moon sign lines added when a zodiac reading is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacAdvice {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub day_type: BiodynamicDayType,
    pub day_label: String,
    pub hint: String,
    pub description: String,
    pub header_lines: Vec<String>,
}
