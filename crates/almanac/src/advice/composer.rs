//! Assembles advisory payloads from the static rule tables.

use crate::advice::rules::{phase_rule, PhaseRule};
use crate::advice::types::{AdvisoryPayload, ZodiacAdvice};
use crate::lunar::LunarPhaseReading;
use crate::western::ZodiacReading;

/// Trim, drop empties and deduplicate, keeping the first occurrence.
pub fn uniq<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() || out.iter().any(|seen| seen == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

fn sentence_list(items: &[&str]) -> String {
    uniq(items.iter().copied()).join(", ")
}

/// One scannable line: what suits the phase and what to avoid.
pub fn format_short(rule: &PhaseRule) -> String {
    let good = sentence_list(rule.good_for);
    let avoid = sentence_list(rule.avoid);

    match (good.is_empty(), avoid.is_empty()) {
        (false, false) => format!("{}: sobib {}; väldi {}.", rule.focus, good, avoid),
        (false, true) => format!("{}: sobib {}.", rule.focus, good),
        (true, false) => format!("{}: väldi {}.", rule.focus, avoid),
        (true, true) => format!("{}.", rule.focus),
    }
}

/// Crops, tasks and notes; the definition when the rule has none of them.
pub fn format_long(rule: &PhaseRule) -> String {
    let mut parts = Vec::new();
    let crops = sentence_list(rule.crops);
    let tasks = sentence_list(rule.tasks);
    let notes = sentence_list(rule.notes);

    if !crops.is_empty() {
        parts.push(format!("Kultuurid: {crops}."));
    }
    if !tasks.is_empty() {
        parts.push(format!("Tööd: {tasks}."));
    }
    if !notes.is_empty() {
        parts.push(format!("Märkus: {notes}."));
    }

    if parts.is_empty() {
        rule.definition.to_string()
    } else {
        parts.join(" ")
    }
}

pub fn illumination_subtitle(reading: &LunarPhaseReading) -> String {
    format!("Valgustatus {}%", reading.illumination_percent())
}

fn zodiac_advice(reading: &ZodiacReading, phase_line: String) -> ZodiacAdvice {
    let day_label = reading.day_type.label().to_string();
    let header_lines = vec![
        format!("Päike: {}", reading.sun_sign),
        format!("Kuu: {} ({})", reading.moon_sign, day_label),
        phase_line,
    ];

    ZodiacAdvice {
        sun_sign: reading.sun_sign,
        moon_sign: reading.moon_sign,
        day_type: reading.day_type,
        day_label,
        hint: reading.day_type.hint(),
        description: reading.day_type.description(),
        header_lines,
    }
}

/// Phase line as shown in panel headers: "Kuufaas: Täiskuu • Valgustatus 99%".
pub fn phase_header_line(payload_title: &str, subtitle: &str) -> String {
    format!("Kuufaas: {payload_title} • {subtitle}")
}

/// Build the advisory payload for a phase reading.
///
/// The zodiac section is additive; the phase fields are identical with or
/// without it.
pub fn compose_advisory(
    phase: &LunarPhaseReading,
    zodiac: Option<&ZodiacReading>,
) -> AdvisoryPayload {
    let rule = phase_rule(phase.phase);
    let subtitle = illumination_subtitle(phase);

    let tags = uniq(rule.tags.iter().copied());
    let keywords = uniq(rule.tags.iter().chain(rule.crops.iter()).copied());

    let zodiac = zodiac.map(|z| zodiac_advice(z, phase_header_line(phase.phase.label(), &subtitle)));

    AdvisoryPayload {
        title: phase.phase,
        icon: rule.icon.to_string(),
        subtitle,
        text: format_short(rule),
        text_long: format_long(rule),
        focus_line: format!("{}: {}", rule.focus, rule.definition),
        tags,
        suitable: uniq(rule.good_for.iter().copied()),
        tasks: uniq(rule.tasks.iter().copied()),
        keywords,
        less_suitable: uniq(rule.avoid.iter().copied()),
        zodiac,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: PhaseRule = PhaseRule {
        icon: "x",
        focus: "Fookus",
        definition: "definitsioon.",
        good_for: &[],
        avoid: &[],
        tasks: &[],
        crops: &[],
        notes: &[],
        tags: &[],
    };

    #[test]
    fn test_uniq_trims_and_dedups() {
        let out = uniq(["  külv", "külv ", "", "   ", "Külv", "rohi"]);
        assert_eq!(out, vec!["külv", "Külv", "rohi"]);
    }

    #[test]
    fn test_short_fallbacks() {
        assert_eq!(format_short(&EMPTY), "Fookus.");
        let only_avoid = PhaseRule { avoid: &["külvi"], ..EMPTY };
        assert_eq!(format_short(&only_avoid), "Fookus: väldi külvi.");
        let only_good = PhaseRule { good_for: &["rohimine", "rohimine"], ..EMPTY };
        assert_eq!(format_short(&only_good), "Fookus: sobib rohimine.");
    }

    #[test]
    fn test_long_falls_back_to_definition() {
        assert_eq!(format_long(&EMPTY), "definitsioon.");
        let with_notes = PhaseRule { notes: &["Märge"], ..EMPTY };
        assert_eq!(format_long(&with_notes), "Märkus: Märge.");
    }
}
