use crate::aspects::orbs::OrbConfig;
use crate::bodies::{Body, BodyKind};
use crate::format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven catalogued aspect angles.
///
/// Declaration order is the catalogue order used to break ties between
/// equally distant aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Sesquiquadrate,
    Semisquare,
    Semisextile,
    Quintile,
    Biquintile,
}

impl AspectKind {
    pub const ALL: [AspectKind; 11] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
        AspectKind::Quincunx,
        AspectKind::Sesquiquadrate,
        AspectKind::Semisquare,
        AspectKind::Semisextile,
        AspectKind::Quintile,
        AspectKind::Biquintile,
    ];

    pub const MAJOR: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    /// Exact angle in degrees
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Semisquare => 45.0,
            AspectKind::Semisextile => 30.0,
            AspectKind::Quintile => 72.0,
            AspectKind::Biquintile => 144.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Opposition => "☍",
            AspectKind::Trine => "△",
            AspectKind::Square => "□",
            AspectKind::Sextile => "⚹",
            AspectKind::Quincunx => "⚺",
            AspectKind::Sesquiquadrate => "⚼",
            AspectKind::Semisquare => "∠",
            AspectKind::Semisextile => "⚻",
            AspectKind::Quintile => "Q",
            AspectKind::Biquintile => "bQ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
            AspectKind::Semisquare => "Semisquare",
            AspectKind::Semisextile => "Semisextile",
            AspectKind::Quintile => "Quintile",
            AspectKind::Biquintile => "Biquintile",
        }
    }

    pub fn is_major(&self) -> bool {
        Self::MAJOR.contains(self)
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<AspectKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orb table selected for a pair of bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbCategory {
    Luminaries,
    Angles,
    Planets,
}

impl OrbCategory {
    pub const ALL: [OrbCategory; 3] = [
        OrbCategory::Luminaries,
        OrbCategory::Angles,
        OrbCategory::Planets,
    ];

    /// Axes take precedence over luminaries, luminaries over everything else.
    pub fn for_pair(first: BodyKind, second: BodyKind) -> OrbCategory {
        if first == BodyKind::Axis || second == BodyKind::Axis {
            OrbCategory::Angles
        } else if first == BodyKind::Luminary || second == BodyKind::Luminary {
            OrbCategory::Luminaries
        } else {
            OrbCategory::Planets
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrbCategory::Luminaries => "luminaries",
            OrbCategory::Angles => "angles",
            OrbCategory::Planets => "planets",
        }
    }
}

impl fmt::Display for OrbCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a pair's separation is matched against the catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Best-fitting aspect for every pair regardless of orb. Major aspects
    /// closer than 10° win, otherwise the overall nearest angle.
    #[default]
    Nearest,
    /// Only aspects within the configured orb; the smallest deviation wins.
    InOrb,
}

impl MatchPolicy {
    pub fn from_name(name: &str) -> Option<MatchPolicy> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "nearest" => Some(MatchPolicy::Nearest),
            "in_orb" | "inorb" => Some(MatchPolicy::InOrb),
            _ => None,
        }
    }
}

/// Settings for aspect detection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectSettings {
    pub orbs: OrbConfig,
    pub policy: MatchPolicy,
    /// Body names to consider; empty means every body
    pub include_objects: Vec<String>,
    /// Restrict matching to the five major aspects
    pub only_major: bool,
}

impl AspectSettings {
    pub fn new(orbs: OrbConfig) -> Self {
        Self {
            orbs,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_objects(mut self, names: &[&str]) -> Self {
        self.include_objects = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn only_major(mut self, only_major: bool) -> Self {
        self.only_major = only_major;
        self
    }

    /// Aspect kinds eligible for matching, in catalogue order.
    pub fn candidates(&self) -> &'static [AspectKind] {
        if self.only_major {
            &AspectKind::MAJOR
        } else {
            &AspectKind::ALL
        }
    }

    pub fn includes(&self, name: &str) -> bool {
        self.include_objects.is_empty() || self.include_objects.iter().any(|n| n == name)
    }
}

/// Aspect between two distinct bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect<'a> {
    pub first: &'a Body,
    pub second: &'a Body,
    pub kind: AspectKind,
    pub symbol: &'static str,
    /// Angular separation of the pair, [0, 180]
    pub separation: f64,
    /// Deviation from the exact angle; positive when applying, negative when separating
    pub orb: f64,
    #[serde(rename = "isApplying")]
    pub is_applying: bool,
    /// Orb allowance for this pair's category
    #[serde(rename = "maxOrb")]
    pub max_orb: f64,
    #[serde(rename = "inOrb")]
    pub in_orb: bool,
}

impl<'a> Aspect<'a> {
    pub fn deviation(&self) -> f64 {
        self.orb.abs()
    }

    pub fn phase(&self) -> &'static str {
        if self.is_applying {
            "Applying"
        } else {
            "Separating"
        }
    }

    /// Orb magnitude as `D°MM'`; read the phase from `is_applying`.
    pub fn orb_str(&self) -> String {
        format::orb_str(self.orb)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.first.name == name || self.second.name == name
    }
}
