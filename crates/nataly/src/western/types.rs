//! Static zodiac data: elements, modalities, polarities and the twelve signs.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Positive, Polarity::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub polarity: Polarity,
    #[serde(rename = "classicRuler")]
    pub classic_ruler: &'static str,
    #[serde(rename = "modernRuler")]
    pub modern_ruler: Option<&'static str>,
}

const fn sign(
    name: &'static str,
    symbol: &'static str,
    element: Element,
    modality: Modality,
    polarity: Polarity,
    classic_ruler: &'static str,
    modern_ruler: &'static str,
) -> Sign {
    Sign {
        name,
        symbol,
        element,
        modality,
        polarity,
        classic_ruler,
        modern_ruler: Some(modern_ruler),
    }
}

/// The twelve signs in zodiacal order, Aries at 0°.
pub const SIGNS: [Sign; 12] = [
    sign("Aries", "♈", Element::Fire, Modality::Cardinal, Polarity::Positive, "Mars", "Mars"),
    sign("Taurus", "♉", Element::Earth, Modality::Fixed, Polarity::Negative, "Venus", "Venus"),
    sign("Gemini", "♊", Element::Air, Modality::Mutable, Polarity::Positive, "Mercury", "Mercury"),
    sign("Cancer", "♋", Element::Water, Modality::Cardinal, Polarity::Negative, "Moon", "Moon"),
    sign("Leo", "♌", Element::Fire, Modality::Fixed, Polarity::Positive, "Sun", "Sun"),
    sign("Virgo", "♍", Element::Earth, Modality::Mutable, Polarity::Negative, "Mercury", "Mercury"),
    sign("Libra", "♎", Element::Air, Modality::Cardinal, Polarity::Positive, "Venus", "Venus"),
    sign("Scorpio", "♏", Element::Water, Modality::Fixed, Polarity::Negative, "Mars", "Pluto"),
    sign("Sagittarius", "♐", Element::Fire, Modality::Mutable, Polarity::Positive, "Jupiter", "Jupiter"),
    sign("Capricorn", "♑", Element::Earth, Modality::Cardinal, Polarity::Negative, "Saturn", "Saturn"),
    sign("Aquarius", "♒", Element::Air, Modality::Fixed, Polarity::Positive, "Saturn", "Uranus"),
    sign("Pisces", "♓", Element::Water, Modality::Mutable, Polarity::Negative, "Jupiter", "Neptune"),
];

impl Sign {
    /// Position of the sign in zodiacal order (Aries = 0).
    pub fn index(&self) -> usize {
        SIGNS
            .iter()
            .position(|s| s.name == self.name)
            .unwrap_or(0)
    }

    /// Longitude at which the sign begins.
    pub fn start_longitude(&self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn by_name(name: &str) -> Option<&'static Sign> {
        SIGNS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
