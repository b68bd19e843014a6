//! Orb allowances per body category.
//!
//! An `OrbConfig` is an immutable value handed to every detection call. The
//! named presets are built once and cloned out on request.

use crate::aspects::types::{AspectKind, OrbCategory};
use crate::error::NatalyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type OrbTable = BTreeMap<AspectKind, f64>;

pub const DEFAULT_SYSTEM: &str = "Placidus";

/// Missing categories deserialize to empty tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbConfig {
    #[serde(default)]
    pub luminaries: OrbTable,
    #[serde(default)]
    pub angles: OrbTable,
    #[serde(default)]
    pub planets: OrbTable,
}

/// Builds a table from values listed in catalogue order.
fn table(values: [f64; 11]) -> OrbTable {
    AspectKind::ALL.iter().copied().zip(values).collect()
}

lazy_static::lazy_static! {
    static ref PLACIDUS: OrbConfig = OrbConfig {
        luminaries: table([10.0, 10.0, 8.0, 8.0, 6.0, 3.0, 3.0, 2.0, 2.0, 2.0, 2.0]),
        angles: table([1.0; 11]),
        planets: table([8.0, 8.0, 6.0, 6.0, 4.0, 2.0, 2.0, 1.5, 1.5, 1.5, 1.5]),
    };

    // Koch charts use the same allowances
    static ref PRESETS: Vec<(&'static str, &'static OrbConfig)> = vec![
        ("Placidus", &*PLACIDUS),
        ("Koch", &*PLACIDUS),
    ];
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self::placidus()
    }
}

impl OrbConfig {
    /// Empty configuration; every pair resolves to a zero orb.
    pub fn empty() -> Self {
        Self {
            luminaries: OrbTable::new(),
            angles: OrbTable::new(),
            planets: OrbTable::new(),
        }
    }

    pub fn placidus() -> Self {
        PLACIDUS.clone()
    }

    /// Named preset, falling back to Placidus for unknown systems.
    pub fn for_system(system: &str) -> Self {
        match Self::preset(system) {
            Some(config) => config,
            None => {
                log::warn!(
                    "Unknown orb system '{}', falling back to {}",
                    system,
                    DEFAULT_SYSTEM
                );
                Self::placidus()
            }
        }
    }

    pub fn preset(system: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(system.trim()))
            .map(|(_, config)| (*config).clone())
    }

    pub fn preset_names() -> Vec<&'static str> {
        PRESETS.iter().map(|(name, _)| *name).collect()
    }

    pub fn from_json(json: &str) -> Result<Self, NatalyError> {
        serde_json::from_str(json)
            .map_err(|e| NatalyError::domain(format!("invalid orb configuration: {}", e)))
    }

    pub fn table(&self, category: OrbCategory) -> &OrbTable {
        match category {
            OrbCategory::Luminaries => &self.luminaries,
            OrbCategory::Angles => &self.angles,
            OrbCategory::Planets => &self.planets,
        }
    }

    pub fn table_mut(&mut self, category: OrbCategory) -> &mut OrbTable {
        match category {
            OrbCategory::Luminaries => &mut self.luminaries,
            OrbCategory::Angles => &mut self.angles,
            OrbCategory::Planets => &mut self.planets,
        }
    }

    /// Replace a whole category table.
    pub fn with_table(mut self, category: OrbCategory, table: OrbTable) -> Self {
        *self.table_mut(category) = table;
        self
    }

    pub fn with_orb(mut self, category: OrbCategory, kind: AspectKind, orb: f64) -> Self {
        self.table_mut(category).insert(kind, orb);
        self
    }

    pub fn try_max_orb(&self, category: OrbCategory, kind: AspectKind) -> Result<f64, NatalyError> {
        self.table(category)
            .get(&kind)
            .copied()
            .ok_or_else(|| NatalyError::Configuration {
                category: category.to_string(),
                aspect: kind.to_string(),
            })
    }

    /// Maximum orb, with a missing entry treated as zero.
    pub fn max_orb(&self, category: OrbCategory, kind: AspectKind) -> f64 {
        match self.try_max_orb(category, kind) {
            Ok(orb) => orb,
            Err(e) => {
                log::debug!("{}; using 0", e);
                0.0
            }
        }
    }

    pub fn has_orb(&self, category: OrbCategory, kind: AspectKind) -> bool {
        self.table(category).contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placidus_values() {
        let config = OrbConfig::placidus();
        assert_eq!(config.max_orb(OrbCategory::Luminaries, AspectKind::Conjunction), 10.0);
        assert_eq!(config.max_orb(OrbCategory::Luminaries, AspectKind::Quincunx), 3.0);
        assert_eq!(config.max_orb(OrbCategory::Angles, AspectKind::Trine), 1.0);
        assert_eq!(config.max_orb(OrbCategory::Planets, AspectKind::Sextile), 4.0);
        assert_eq!(config.max_orb(OrbCategory::Planets, AspectKind::Biquintile), 1.5);
    }

    #[test]
    fn test_unknown_system_falls_back() {
        assert_eq!(OrbConfig::default(), OrbConfig::placidus());
        assert_eq!(OrbConfig::for_system("koch"), OrbConfig::placidus());
        assert_eq!(OrbConfig::for_system("Regiomontanus"), OrbConfig::placidus());
        assert!(OrbConfig::preset("Regiomontanus").is_none());
    }

    #[test]
    fn test_missing_entry_is_zero() {
        let config = OrbConfig::empty().with_orb(OrbCategory::Planets, AspectKind::Trine, 5.0);
        assert_eq!(config.max_orb(OrbCategory::Planets, AspectKind::Trine), 5.0);
        assert_eq!(config.max_orb(OrbCategory::Planets, AspectKind::Square), 0.0);
        assert!(matches!(
            config.try_max_orb(OrbCategory::Angles, AspectKind::Trine),
            Err(NatalyError::Configuration { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_with_partial_categories() {
        let config = OrbConfig::from_json(r#"{"planets": {"Trine": 7.5}}"#).unwrap();
        assert_eq!(config.max_orb(OrbCategory::Planets, AspectKind::Trine), 7.5);
        assert!(config.luminaries.is_empty());
        assert!(OrbConfig::from_json(r#"{"planets": {"Novile": 1.0}}"#).is_err());
    }
}
