use anyhow::Context;
use nataly::aspects::{AspectKind, AspectSettings, MatchPolicy, OrbCategory, OrbConfig, OrbTable};
use nataly::western::RulerScheme;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Swiss Ephemeris files the external provider expects in its data directory.
pub const EPHEMERIS_FILES: [&str; 5] = [
    "seas_18.se1",
    "sepl_18.se1",
    "semo_18.se1",
    "seplm18.se1",
    "semom18.se1",
];

#[derive(Debug, Clone, PartialEq)]
pub struct NatalySettings {
    pub orb_system: String,
    pub orbs: OrbConfig,
    pub policy: MatchPolicy,
    pub only_major: bool,
    pub include_objects: Vec<String>,
    pub ruler_scheme: RulerScheme,
    pub ephemeris_dir: Option<PathBuf>,
}

impl Default for NatalySettings {
    fn default() -> Self {
        Self {
            orb_system: nataly::aspects::DEFAULT_SYSTEM.to_string(),
            orbs: OrbConfig::default(),
            policy: MatchPolicy::default(),
            only_major: false,
            include_objects: Vec::new(),
            ruler_scheme: RulerScheme::default(),
            ephemeris_dir: None,
        }
    }
}

impl NatalySettings {
    pub fn aspect_settings(&self) -> AspectSettings {
        AspectSettings {
            orbs: self.orbs.clone(),
            policy: self.policy,
            include_objects: self.include_objects.clone(),
            only_major: self.only_major,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OrbsToml {
    #[serde(default = "default_system")]
    system: String,
    #[serde(default)]
    luminaries: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    angles: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    planets: Option<BTreeMap<String, f64>>,
}

fn default_system() -> String {
    nataly::aspects::DEFAULT_SYSTEM.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AspectsToml {
    #[serde(default)]
    policy: Option<String>,
    #[serde(default)]
    only_major: bool,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    rulers: Option<RulerScheme>,
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    orbs: Option<OrbsToml>,
    #[serde(default)]
    aspects: Option<AspectsToml>,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
}

/// Try common relative paths for `configs/nataly.toml`.
pub fn read_nataly_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/nataly.toml", "../../configs/nataly.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load nataly.toml from {:?}", paths);
}

fn orb_table(category: OrbCategory, entries: &BTreeMap<String, f64>) -> anyhow::Result<OrbTable> {
    let mut table = OrbTable::new();
    for (name, &orb) in entries {
        let kind = AspectKind::from_name(name).ok_or_else(|| {
            anyhow::anyhow!("Unknown aspect '{}' in [orbs.{}]", name, category)
        })?;
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("orbs.{}.{} must be a non-negative number, got {}", category, name, orb);
        }
        table.insert(kind, orb);
    }
    Ok(table)
}

/// Parse settings from TOML text. The ephemeris directory is not checked here.
pub fn parse_settings(text: &str) -> anyhow::Result<NatalySettings> {
    let root: RootConfigToml =
        toml::from_str(text).context("Failed to parse nataly.toml")?;
    let mut settings = NatalySettings::default();

    if let Some(orbs) = root.orbs {
        settings.orbs = OrbConfig::for_system(&orbs.system);
        settings.orb_system = orbs.system;
        let custom = [
            (OrbCategory::Luminaries, &orbs.luminaries),
            (OrbCategory::Angles, &orbs.angles),
            (OrbCategory::Planets, &orbs.planets),
        ];
        for (category, entries) in custom {
            if let Some(entries) = entries {
                let table = orb_table(category, entries)?;
                log::debug!("Custom {} orbs replace the {} preset", category, settings.orb_system);
                settings.orbs = settings.orbs.with_table(category, table);
            }
        }
    }

    let aspects = root.aspects.unwrap_or_default();
    if let Some(policy) = aspects.policy {
        settings.policy = MatchPolicy::from_name(&policy).ok_or_else(|| {
            anyhow::anyhow!("aspects.policy must be \"nearest\" or \"in_orb\", got \"{}\"", policy)
        })?;
    }
    settings.only_major = aspects.only_major;
    settings.include_objects = aspects.include;
    if let Some(scheme) = aspects.rulers {
        settings.ruler_scheme = scheme;
    }

    settings.ephemeris_dir = root.ephemeris.map(|e| e.data_dir);
    Ok(settings)
}

pub fn validate_ephemeris_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("ephemeris.data_dir does not exist: {}", dir.display());
    }
    for file in EPHEMERIS_FILES {
        let path = dir.join(file);
        if !path.exists() {
            anyhow::bail!("Missing ephemeris file: {}", path.display());
        }
    }
    Ok(())
}

fn finish(settings: NatalySettings) -> anyhow::Result<NatalySettings> {
    if let Some(dir) = &settings.ephemeris_dir {
        validate_ephemeris_dir(dir)?;
    }
    log::info!(
        "Loaded nataly settings: {} orbs, {:?} policy",
        settings.orb_system,
        settings.policy
    );
    Ok(settings)
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<NatalySettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    finish(parse_settings(&text)?)
}

/// Load from the default locations.
pub fn load_settings() -> anyhow::Result<NatalySettings> {
    let text = read_nataly_toml_text()?;
    finish(parse_settings(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, NatalySettings::default());
        assert_eq!(settings.orbs, OrbConfig::placidus());
    }

    #[test]
    fn test_custom_table_replaces_preset_category() {
        let text = r#"
            [orbs]
            system = "Koch"

            [orbs.planets]
            Conjunction = 7.0
            trine = 5.5

            [aspects]
            policy = "in_orb"
            include = ["Sun", "Moon"]
            rulers = "modern"
        "#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.orb_system, "Koch");
        assert_eq!(settings.policy, MatchPolicy::InOrb);
        assert_eq!(settings.ruler_scheme, RulerScheme::Modern);
        assert_eq!(settings.orbs.planets.len(), 2);
        assert_eq!(settings.orbs.max_orb(OrbCategory::Planets, AspectKind::Trine), 5.5);
        assert_eq!(settings.orbs.max_orb(OrbCategory::Planets, AspectKind::Square), 0.0);
        // Untouched categories keep the preset
        assert_eq!(settings.orbs.luminaries, OrbConfig::placidus().luminaries);

        let aspect = settings.aspect_settings();
        assert_eq!(aspect.include_objects, vec!["Sun", "Moon"]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[orbs.planets]\nNovile = 1.0\n").is_err());
        assert!(parse_settings("[orbs.angles]\nTrine = -1.0\n").is_err());
        assert!(parse_settings("[aspects]\npolicy = \"first\"\n").is_err());
        assert!(parse_settings("[orbs\n").is_err());
    }

    #[test]
    fn test_validate_ephemeris_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_ephemeris_dir(dir.path()).is_err());
        for file in EPHEMERIS_FILES {
            fs::write(dir.path().join(file), b"").unwrap();
        }
        assert!(validate_ephemeris_dir(dir.path()).is_ok());
        assert!(validate_ephemeris_dir(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nataly.toml");
        fs::write(
            &path,
            format!(
                "[ephemeris]\ndata_dir = \"{}\"\n",
                dir.path().join("ephe").display()
            ),
        )
        .unwrap();
        // Data dir does not exist yet
        assert!(load_settings_from(&path).is_err());

        fs::create_dir(dir.path().join("ephe")).unwrap();
        for file in EPHEMERIS_FILES {
            fs::write(dir.path().join("ephe").join(file), b"").unwrap();
        }
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.ephemeris_dir, Some(dir.path().join("ephe")));
    }
}
