//! Biodynamic day types (Maria Thun style sowing calendar).
//!
//! The day type follows the element of the sign the moon is in: fire signs
//! give fruit days, earth root days, air flower days, water leaf days.

use crate::error::AlmanacError;
use crate::western::signs::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiodynamicDayType {
    Leaf,
    Fruit,
    Root,
    Flower,
}

/// Day type by moon sign index, starting at Aries.
const SIGN_TO_DAY_TYPE: [BiodynamicDayType; 12] = [
    BiodynamicDayType::Fruit,  // Jäär
    BiodynamicDayType::Root,   // Sõnn
    BiodynamicDayType::Flower, // Kaksikud
    BiodynamicDayType::Leaf,   // Vähk
    BiodynamicDayType::Fruit,  // Lõvi
    BiodynamicDayType::Root,   // Neitsi
    BiodynamicDayType::Flower, // Kaalud
    BiodynamicDayType::Leaf,   // Skorpion
    BiodynamicDayType::Fruit,  // Ambur
    BiodynamicDayType::Root,   // Kaljukits
    BiodynamicDayType::Flower, // Veevalaja
    BiodynamicDayType::Leaf,   // Kalad
];

/// Garden knowledge attached to a day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiodynamicRule {
    pub label: &'static str,
    pub element: Element,
    pub crops: &'static [&'static str],
    pub tasks: &'static [&'static str],
    pub notes: &'static [&'static str],
}

static LEAF: BiodynamicRule = BiodynamicRule {
    label: "lehepäev",
    element: Element::Water,
    crops: &["salat", "kapsas", "spinat", "seller", "maitseroheline"],
    tasks: &["külv", "istutamine", "kastmine", "niitmine"],
    notes: &["Lehtköögivilju korista pigem õie- või viljapäeval."],
};

static FRUIT: BiodynamicRule = BiodynamicRule {
    label: "viljapäev",
    element: Element::Fire,
    crops: &["tomat", "paprika", "oad", "herned", "mais", "kõrvits"],
    tasks: &["külv", "istutamine", "võrsete näpistamine", "võsude eemaldamine"],
    notes: &["Viljapäeval korjatud saak säilib sageli paremini."],
};

static ROOT: BiodynamicRule = BiodynamicRule {
    label: "juurepäev",
    element: Element::Earth,
    crops: &["porgand", "kartul", "sibul", "peet", "küüslauk"],
    tasks: &["külv", "istutamine", "muldamine", "väetamine"],
    notes: &["Saaki on hea ladustada juurtepäeval."],
};

static FLOWER: BiodynamicRule = BiodynamicRule {
    label: "õiepäev",
    element: Element::Air,
    crops: &["lilled", "maitsetaimed"],
    tasks: &["lilleistutused", "maitsetaimede koristus", "lõikelillede lõikamine"],
    notes: &["Lõikelilled püsivad kauem. Lehtköögivilju korista pigem õie- või viljapäeval."],
};

impl BiodynamicDayType {
    pub const ALL: [BiodynamicDayType; 4] = [
        BiodynamicDayType::Leaf,
        BiodynamicDayType::Fruit,
        BiodynamicDayType::Root,
        BiodynamicDayType::Flower,
    ];

    /// Day type while the moon is in `sign`.
    pub fn for_sign(sign: ZodiacSign) -> Self {
        SIGN_TO_DAY_TYPE[sign.index()]
    }

    pub fn rule(self) -> &'static BiodynamicRule {
        match self {
            BiodynamicDayType::Leaf => &LEAF,
            BiodynamicDayType::Fruit => &FRUIT,
            BiodynamicDayType::Root => &ROOT,
            BiodynamicDayType::Flower => &FLOWER,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            BiodynamicDayType::Leaf => "leaf",
            BiodynamicDayType::Fruit => "fruit",
            BiodynamicDayType::Root => "root",
            BiodynamicDayType::Flower => "flower",
        }
    }

    /// Estonian label, e.g. "juurepäev".
    pub fn label(self) -> &'static str {
        self.rule().label
    }

    /// Keyword line: element, crops and tasks.
    pub fn hint(self) -> String {
        let rule = self.rule();
        format!(
            "Märksõnad: {}; {}; tööd: {}.",
            rule.element.label(),
            rule.crops.join(", "),
            rule.tasks.join(", ")
        )
    }

    /// Description without the label, which already sits in the heading.
    pub fn description(self) -> String {
        let rule = self.rule();
        let notes = if rule.notes.is_empty() {
            String::new()
        } else {
            format!(" Märkus: {}", rule.notes.join(" "))
        };
        format!(
            "{} • kultuurid: {} • tööd: {}.{}",
            rule.element.label(),
            rule.crops.join(", "),
            rule.tasks.join(", "),
            notes
        )
    }
}

impl fmt::Display for BiodynamicDayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BiodynamicDayType {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.id() == wanted || d.label() == wanted)
            .ok_or_else(|| AlmanacError::UnknownDayType {
                label: s.to_string(),
                valid: Self::ALL.iter().map(|d| d.id().to_string()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_matches_element() {
        for sign in ZodiacSign::ALL {
            let day = BiodynamicDayType::for_sign(sign);
            assert_eq!(day.rule().element, sign.element(), "{sign}");
        }
    }

    #[test]
    fn test_hint_format() {
        assert_eq!(
            BiodynamicDayType::Flower.hint(),
            "Märksõnad: õhk; lilled, maitsetaimed; tööd: lilleistutused, maitsetaimede koristus, lõikelillede lõikamine."
        );
    }

    #[test]
    fn test_description_appends_notes() {
        let text = BiodynamicDayType::Root.description();
        assert!(text.starts_with("maa • kultuurid: porgand"));
        assert!(text.ends_with(" Märkus: Saaki on hea ladustada juurtepäeval."));
    }
}
