//! Essential dignities for Western astrology.
//!
//! Four static tables (domicile, exaltation, detriment, fall) keyed by body
//! name. A body may hold the same dignity in several signs. Only the seven
//! classical planets and the three outer planets appear in the tables.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
}

type DignityTable = &'static [(&'static str, &'static [&'static str])];

const DOMICILE: DignityTable = &[
    ("Sun", &["Leo"]),
    ("Moon", &["Cancer"]),
    ("Mercury", &["Gemini", "Virgo"]),
    ("Venus", &["Taurus", "Libra"]),
    ("Mars", &["Aries"]),
    ("Jupiter", &["Sagittarius"]),
    ("Saturn", &["Capricorn"]),
    ("Uranus", &["Aquarius"]),
    ("Neptune", &["Pisces"]),
    ("Pluto", &["Scorpio"]),
];

const EXALTATION: DignityTable = &[
    ("Sun", &["Aries"]),
    ("Moon", &["Taurus"]),
    ("Mercury", &["Virgo"]),
    ("Venus", &["Pisces"]),
    ("Mars", &["Capricorn"]),
    ("Jupiter", &["Cancer"]),
    ("Saturn", &["Libra"]),
    ("Uranus", &["Scorpio"]),
    ("Neptune", &["Leo"]),
    ("Pluto", &["Aries"]),
];

const DETRIMENT: DignityTable = &[
    ("Sun", &["Aquarius"]),
    ("Moon", &["Capricorn"]),
    ("Mercury", &["Sagittarius", "Pisces"]),
    ("Venus", &["Scorpio", "Aries"]),
    ("Mars", &["Libra"]),
    ("Jupiter", &["Gemini"]),
    ("Saturn", &["Cancer"]),
    ("Uranus", &["Leo"]),
    ("Neptune", &["Virgo"]),
    ("Pluto", &["Taurus"]),
];

const FALL: DignityTable = &[
    ("Sun", &["Libra"]),
    ("Moon", &["Scorpio"]),
    ("Mercury", &["Pisces"]),
    ("Venus", &["Virgo"]),
    ("Mars", &["Cancer"]),
    ("Jupiter", &["Capricorn"]),
    ("Saturn", &["Aries"]),
    ("Uranus", &["Taurus"]),
    ("Neptune", &["Aquarius"]),
    ("Pluto", &["Virgo"]),
];

impl Dignity {
    /// Lookup order; the first matching table wins.
    pub const ORDER: [Dignity; 4] = [
        Dignity::Domicile,
        Dignity::Exaltation,
        Dignity::Detriment,
        Dignity::Fall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dignity::Domicile => "domicile",
            Dignity::Exaltation => "exaltation",
            Dignity::Detriment => "detriment",
            Dignity::Fall => "fall",
        }
    }

    fn table(&self) -> DignityTable {
        match self {
            Dignity::Domicile => DOMICILE,
            Dignity::Exaltation => EXALTATION,
            Dignity::Detriment => DETRIMENT,
            Dignity::Fall => FALL,
        }
    }

    /// Signs in which `body` holds this dignity (empty for bodies without rules).
    pub fn signs_for(&self, body: &str) -> &'static [&'static str] {
        self.table()
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(body))
            .map(|(_, signs)| *signs)
            .unwrap_or(&[])
    }

    pub fn from_name(name: &str) -> Option<Dignity> {
        Dignity::ORDER
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Essential dignity of `body` when placed in `sign`, if any.
pub fn dignity_for(body: &str, sign: &str) -> Option<Dignity> {
    Dignity::ORDER.into_iter().find(|dignity| {
        dignity
            .signs_for(body)
            .iter()
            .any(|s| s.eq_ignore_ascii_case(sign))
    })
}

/// Same as [`dignity_for`] but as a label; empty when no dignity applies.
pub fn dignity_label(body: &str, sign: &str) -> &'static str {
    dignity_for(body, sign).map(|d| d.as_str()).unwrap_or("")
}
