//! Tropical zodiac signs.
//!
//! Twelve 30° segments of ecliptic longitude starting at the vernal point
//! (0° = Aries), each with its classical element.

use crate::error::AlmanacError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGN_SEGMENT_SIZE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Estonian name as used in the garden hints.
    pub fn label(self) -> &'static str {
        match self {
            Element::Fire => "tuli",
            Element::Earth => "maa",
            Element::Air => "õhk",
            Element::Water => "vesi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "Jäär")]
    Aries,
    #[serde(rename = "Sõnn")]
    Taurus,
    #[serde(rename = "Kaksikud")]
    Gemini,
    #[serde(rename = "Vähk")]
    Cancer,
    #[serde(rename = "Lõvi")]
    Leo,
    #[serde(rename = "Neitsi")]
    Virgo,
    #[serde(rename = "Kaalud")]
    Libra,
    #[serde(rename = "Skorpion")]
    Scorpio,
    #[serde(rename = "Ambur")]
    Sagittarius,
    #[serde(rename = "Kaljukits")]
    Capricorn,
    #[serde(rename = "Veevalaja")]
    Aquarius,
    #[serde(rename = "Kalad")]
    Pisces,
}

// (Estonian label, English name, element)
const SIGN_META: [(&str, &str, Element); 12] = [
    ("Jäär", "Aries", Element::Fire),
    ("Sõnn", "Taurus", Element::Earth),
    ("Kaksikud", "Gemini", Element::Air),
    ("Vähk", "Cancer", Element::Water),
    ("Lõvi", "Leo", Element::Fire),
    ("Neitsi", "Virgo", Element::Earth),
    ("Kaalud", "Libra", Element::Air),
    ("Skorpion", "Scorpio", Element::Water),
    ("Ambur", "Sagittarius", Element::Fire),
    ("Kaljukits", "Capricorn", Element::Earth),
    ("Veevalaja", "Aquarius", Element::Air),
    ("Kalad", "Pisces", Element::Water),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for an index; wraps modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sign containing a longitude in degrees (any real value).
    pub fn from_longitude(longitude: f64) -> Self {
        Self::from_index(sign_index(longitude))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        SIGN_META[self.index()].0
    }

    pub fn english_name(self) -> &'static str {
        SIGN_META[self.index()].1
    }

    pub fn element(self) -> Element {
        SIGN_META[self.index()].2
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZodiacSign {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|z| z.label().to_lowercase() == wanted || z.english_name().to_lowercase() == wanted)
            .ok_or_else(|| AlmanacError::UnknownSign {
                label: s.to_string(),
                valid: Self::ALL.iter().map(|z| z.label().to_string()).collect(),
            })
    }
}

/// Get sign index (0-11) from longitude
pub fn sign_index(longitude: f64) -> usize {
    let lon = crate::ephemeris::normalize_degrees(longitude);
    ((lon / SIGN_SEGMENT_SIZE).floor() as usize) % 12
}
