mod report;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use nataly::aspects::{MatchPolicy, OrbConfig};
use nataly::bodies::BodyFilter;
use nataly::ephemeris::StaticEphemeris;
use nataly::NatalChart;
use nataly_config::NatalySettings;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Aligned text tables.
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Nearest,
    InOrb,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// JSON position snapshot for the natal chart.
    #[arg(long)]
    snapshot: PathBuf,

    /// Optional snapshot of transiting positions to aspect against the natal chart.
    #[arg(long)]
    transit: Option<PathBuf>,

    /// Settings file (otherwise configs/nataly.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Orb preset, overriding the settings file.
    #[arg(long)]
    orb_system: Option<String>,

    #[arg(long, value_enum)]
    policy: Option<Policy>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Restrict aspects and distributions to the luminaries and planets.
    #[arg(long)]
    planets_only: bool,
}

fn load_settings(args: &Args) -> anyhow::Result<NatalySettings> {
    let mut settings = match &args.config {
        Some(path) => nataly_config::load_settings_from(path)?,
        None => match nataly_config::read_nataly_toml_text() {
            Ok(text) => nataly_config::parse_settings(&text)?,
            Err(e) => {
                log::info!("{}; using default settings", e);
                NatalySettings::default()
            }
        },
    };

    if let Some(system) = &args.orb_system {
        settings.orbs = OrbConfig::for_system(system);
        settings.orb_system = system.clone();
    }
    if let Some(policy) = args.policy {
        settings.policy = match policy {
            Policy::Nearest => MatchPolicy::Nearest,
            Policy::InOrb => MatchPolicy::InOrb,
        };
    }
    Ok(settings)
}

fn chart_from_snapshot(path: &Path, settings: &NatalySettings) -> anyhow::Result<NatalChart> {
    let eph = StaticEphemeris::from_file(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    let name = eph.snapshot().name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chart".to_string())
    });

    let chart = match eph.moment() {
        Some(moment) => NatalChart::compute(&eph, name, &moment, settings.aspect_settings())?,
        None => {
            let snapshot = eph.snapshot();
            NatalChart::from_positions(
                name,
                &snapshot.houses,
                &snapshot.bodies,
                settings.aspect_settings(),
            )?
        }
    };
    Ok(chart)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    let natal = chart_from_snapshot(&args.snapshot, &settings)?;
    let transit = match &args.transit {
        Some(path) => Some(chart_from_snapshot(path, &settings)?.into_transit()),
        None => None,
    };

    let filter = if args.planets_only {
        BodyFilter::planets_only()
    } else {
        BodyFilter::new()
    };
    let view = report::ReportView::new(&natal, transit.as_ref(), &filter, settings.ruler_scheme);

    match args.format {
        Format::Text => print!("{}", view.render_text()),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize report")?
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nataly::western::RulerScheme;
    use std::fs;

    #[test]
    fn test_cli_overrides_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nataly.toml");
        fs::write(
            &path,
            "[orbs]\nsystem = \"Koch\"\n\n[aspects]\npolicy = \"nearest\"\nrulers = \"modern\"\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "nataly-report",
            "--snapshot",
            "natal.json",
            "--config",
            path.to_str().unwrap(),
            "--policy",
            "in-orb",
        ])
        .unwrap();
        let settings = load_settings(&args).unwrap();
        assert_eq!(settings.orb_system, "Koch");
        assert_eq!(settings.policy, MatchPolicy::InOrb);
        assert_eq!(settings.ruler_scheme, RulerScheme::Modern);

        let args = Args::try_parse_from([
            "nataly-report",
            "--snapshot",
            "natal.json",
            "--config",
            path.to_str().unwrap(),
            "--orb-system",
            "Placidus",
        ])
        .unwrap();
        let settings = load_settings(&args).unwrap();
        assert_eq!(settings.orb_system, "Placidus");
        assert_eq!(settings.policy, MatchPolicy::Nearest);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "nataly-report",
            "--snapshot",
            "natal.json",
            "--config",
            dir.path().join("absent.toml").to_str().unwrap(),
        ])
        .unwrap();
        assert!(load_settings(&args).is_err());
    }

    #[test]
    fn test_transit_snapshot_becomes_transit_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transit.json");
        fs::write(
            &path,
            r#"{
                "houses": {
                    "system": "Placidus",
                    "cusps": [0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330],
                    "ascendant": 0.0,
                    "midheaven": 270.0
                },
                "bodies": {"Sun": {"lon": 203.1, "speed_lon": 0.99}}
            }"#,
        )
        .unwrap();

        let chart = chart_from_snapshot(&path, &NatalySettings::default())
            .unwrap()
            .into_transit();
        assert_eq!(chart.name, "transit");
        assert!(chart.body("T-Sun").unwrap().is_luminary());
        assert!(chart.body("T-AC").is_some());
    }
}
