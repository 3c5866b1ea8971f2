//! Gardening rules per moon phase.

use crate::lunar::MoonPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRule {
    /// Material Symbols icon name.
    pub icon: &'static str,
    pub focus: &'static str,
    pub definition: &'static str,
    pub good_for: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub tasks: &'static [&'static str],
    pub crops: &'static [&'static str],
    pub notes: &'static [&'static str],
    /// Short UI chips.
    pub tags: &'static [&'static str],
}

// Indexed by `MoonPhase::index()`.
static PHASE_RULES: [PhaseRule; 8] = [
    // Uuskuu
    PhaseRule {
        icon: "brightness_2",
        focus: "Puhkus ja planeerimine",
        definition: "energia on madal; sobib rahulikeks ettevalmistusteks ja korrastamiseks.",
        good_for: &["mulla ettevalmistus", "koristus", "inventuur", "seemnete sorteerimine", "kompost"],
        avoid: &["rasket külvi", "istutamist"],
        tasks: &["planeeri", "korrasta", "valmista peenrad ette"],
        crops: &[],
        notes: &[],
        tags: &["planeeri", "muld"],
    },
    // Kasvav sirp
    PhaseRule {
        icon: "brightness_3",
        focus: "Kasv käivitub",
        definition: "taime maapealne osa ärkab ja kasv kiireneb; hea aeg õrnaks kasvule suunatud tööks.",
        good_for: &["külv", "istutamine", "õrn hooldus"],
        avoid: &[],
        tasks: &["külv", "istutamine", "kerge pügamine", "võsude võtmine"],
        crops: &["lehtköögiviljad", "maitseroheline", "kurk", "teraviljad"],
        notes: &["Sobib eriti maapealsetele/lehttaimedele."],
        tags: &["külv", "lehed"],
    },
    // Esimene veerand
    PhaseRule {
        icon: "brightness_4",
        focus: "Aktiivne kasv",
        definition: "taime maapealne osa kasvab jõuliselt ja on vastuvõtlik toetamisele ning hooldusele.",
        good_for: &["toestamine", "väetamine", "mõõdukas kastmine"],
        avoid: &[],
        tasks: &["toesta", "väeta", "kasta mõõdukalt", "niitmine"],
        crops: &["lehttaimed", "viljataimed (tasapisi lisada)"],
        notes: &[],
        tags: &["väeta", "toesta"],
    },
    // Kasvav kumer kuu
    PhaseRule {
        icon: "brightness_3",
        focus: "Maksimaalne kasv",
        definition: "maapealne kasv on maksimumi lähedal; õitsemine ja viljumine saavad tuge.",
        good_for: &["viljataimed", "õitsejad", "aktiivne hooldus"],
        avoid: &[],
        tasks: &["toesta", "väeta", "hoolda", "kerge pügamine (kasvu soodustamiseks)"],
        crops: &["tomat", "paprika", "oad", "herned", "kõrvits", "lilled"],
        notes: &["Istutamine vahetult enne täiskuud võib soodustada juurdumist."],
        tags: &["viljad", "õied"],
    },
    // Täiskuu
    PhaseRule {
        icon: "brightness_7",
        focus: "Tipphetk",
        definition: "vee/liikuvuse tipp; taimed on tundlikumad—eelista korjet ja vaatlust.",
        good_for: &["saagi korjamine", "ravim- ja maitsetaimede korje", "vaatlus"],
        avoid: &["rasket külvi", "rasket istutamist"],
        tasks: &["korja saaki", "vaatle taimi", "planeeri kahaneva kuu töid"],
        crops: &[],
        notes: &["Hea aeg korjata vilju ja seemneid."],
        tags: &["saak", "vaatlus"],
    },
    // Kahanev kumer kuu
    PhaseRule {
        icon: "brightness_3",
        focus: "Energia liigub juurtesse",
        definition: "sobib pidurdavaks pügamiseks, kujundamiseks ja juurtega seotud töödeks.",
        good_for: &["pügamine", "kujundamine", "haigete osade eemaldamine", "juurviljad"],
        avoid: &[],
        tasks: &["püga", "eemalda haiged osad", "korista", "istuta püsikuid"],
        crops: &["juur- ja mugulköögiviljad", "puud", "põõsad", "mitmeaastased"],
        notes: &["Sobib töödeks, kus soovid kasvu pidurdada."],
        tags: &["püga", "hooldus"],
    },
    // Viimane veerand
    PhaseRule {
        icon: "brightness_4",
        focus: "Juurte faas",
        definition: "juuretegevus on tugev; hea aeg rohimiseks, ümberistutuseks ja ladustamiseks.",
        good_for: &["juurviljad", "ümberistutamine", "rohimine", "saagi ladustamine"],
        avoid: &[],
        tasks: &["rohi", "ümber istuta", "korista ja ladusta", "väeta mõõdukalt"],
        crops: &["porgand", "kartul", "sibul", "peet", "küüslauk"],
        notes: &["Hea aeg ettevalmistuseks enne uuskuu puhkeperioodi."],
        tags: &["juured", "rohi"],
    },
    // Kahanev sirp
    PhaseRule {
        icon: "brightness_3",
        focus: "Puhastus ja lõpetamine",
        definition: "enne uuskuud; sobib lõpetamiseks ja korrastamiseks, külvi pigem väldi.",
        good_for: &["rohimine", "koristus", "kompost", "peenarde ettevalmistus"],
        avoid: &["külvi (kui võimalik)", "uusi suuri istutusi"],
        tasks: &["puhasta", "korrasta peenrad", "hoolda tööriistu", "valmista kompost"],
        crops: &[],
        notes: &["Hea aeg lõpetada pooleliolevad tööd ja teha korda aed."],
        tags: &["puhasta", "kompost"],
    },
];

/// Rule for a phase. Total over the closed enum.
pub fn phase_rule(phase: MoonPhase) -> &'static PhaseRule {
    &PHASE_RULES[phase.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_focus_and_tags() {
        for phase in MoonPhase::ALL {
            let rule = phase_rule(phase);
            assert!(!rule.focus.is_empty(), "{phase}");
            assert!(!rule.definition.is_empty(), "{phase}");
            assert!(!rule.tags.is_empty(), "{phase}");
        }
    }

    #[test]
    fn test_icons_follow_phase_shape() {
        assert_eq!(phase_rule(MoonPhase::NewMoon).icon, "brightness_2");
        assert_eq!(phase_rule(MoonPhase::FullMoon).icon, "brightness_7");
        assert_eq!(phase_rule(MoonPhase::FirstQuarter).icon, "brightness_4");
        assert_eq!(phase_rule(MoonPhase::LastQuarter).icon, "brightness_4");
        assert_eq!(phase_rule(MoonPhase::WaningGibbous).icon, "brightness_3");
    }
}
