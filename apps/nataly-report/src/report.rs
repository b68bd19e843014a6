use nataly::aspects::{Aspect, AspectCalculator};
use nataly::bodies::BodyFilter;
use nataly::distribution::{ChartDistributions, Distribution};
use nataly::western::RulerScheme;
use nataly::NatalChart;
use serde::Serialize;
use std::fmt::{Display, Write};

#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub chart: &'a NatalChart,
    #[serde(rename = "rulerScheme")]
    pub ruler_scheme: RulerScheme,
    pub aspects: Vec<Aspect<'a>>,
    pub distributions: ChartDistributions<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transits: Option<Vec<Aspect<'a>>>,
}

impl<'a> ReportView<'a> {
    pub fn new(
        chart: &'a NatalChart,
        transit: Option<&'a NatalChart>,
        filter: &BodyFilter,
        ruler_scheme: RulerScheme,
    ) -> Self {
        let transits = transit.map(|other| {
            AspectCalculator::new().compute_aspects(
                &chart.filtered(filter),
                &other.filtered(filter),
                &chart.settings,
            )
        });
        Self {
            chart,
            ruler_scheme,
            aspects: chart.aspects_for(filter),
            distributions: chart.distributions_for(filter),
            transits,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.write_header(&mut out);
        self.write_bodies(&mut out);
        self.write_houses(&mut out);
        write_aspects(&mut out, "ASPECTS", &self.aspects);
        if let Some(transits) = &self.transits {
            write_aspects(&mut out, "TRANSITS", transits);
        }
        self.write_distributions(&mut out);
        out
    }

    fn write_header(&self, out: &mut String) {
        let chart = self.chart;
        let _ = writeln!(out, "{}", chart.name);
        if let Some(moment) = &chart.moment {
            let _ = writeln!(
                out,
                "{}  lat {:.4} lon {:.4}",
                moment.datetime.format("%Y-%m-%d %H:%M UTC"),
                moment.location.lat,
                moment.location.lon
            );
        }
        let _ = writeln!(out, "Houses: {}\n", chart.house_system);
    }

    fn write_bodies(&self, out: &mut String) {
        let _ = writeln!(out, "BODIES");
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:<10} {:>5} {:>9} {:<2} {}",
            "Body", "Sign", "Position", "House", "Speed", "R", "Dignity"
        );
        for body in &self.chart.bodies {
            let _ = writeln!(
                out,
                "{:<12} {:<12} {:<10} {:>5} {:>9.4} {:<2} {}",
                body.name,
                body.sign.name,
                body.dms(),
                body.house,
                body.speed,
                if body.is_retrograde { "R" } else { "" },
                body.dignity_label()
            );
        }
        out.push('\n');
    }

    fn write_houses(&self, out: &mut String) {
        let _ = writeln!(out, "HOUSES");
        let _ = writeln!(
            out,
            "{:<6} {:<12} {:<8} {:<10} {}",
            "House", "Sign", "Cusp", "Ruler", "In house"
        );
        for house in &self.chart.houses {
            let _ = writeln!(
                out,
                "{:<6} {:<12} {:<8} {:<10} {}",
                house.id,
                house.sign.name,
                house.dms(),
                house.ruler(self.ruler_scheme).unwrap_or("-"),
                or_dash(house.ruler_house(self.ruler_scheme))
            );
        }
        out.push('\n');
    }

    fn write_distributions(&self, out: &mut String) {
        let _ = writeln!(out, "DISTRIBUTIONS");
        let d = &self.distributions;
        write_distribution(out, "Element", &d.elements);
        write_distribution(out, "Modality", &d.modalities);
        write_distribution(out, "Polarity", &d.polarities);
        write_distribution(out, "Quadrant", &d.quadrants);
        write_distribution(out, "Hemisphere", &d.hemispheres);
    }
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn write_aspects(out: &mut String, title: &str, aspects: &[Aspect<'_>]) {
    let _ = writeln!(out, "{} ({})", title, aspects.len());
    let _ = writeln!(
        out,
        "{:<12} {:<18} {:<12} {:>7} {:<11} {}",
        "Body", "Aspect", "Body", "Orb", "Phase", "In orb"
    );
    for aspect in aspects {
        let _ = writeln!(
            out,
            "{:<12} {:<18} {:<12} {:>7} {:<11} {}",
            aspect.first.name,
            format!("{} {}", aspect.symbol, aspect.kind),
            aspect.second.name,
            aspect.orb_str(),
            aspect.phase(),
            if aspect.in_orb { "yes" } else { "no" }
        );
    }
    out.push('\n');
}

fn write_distribution<K: Copy + PartialEq + Display>(
    out: &mut String,
    label: &str,
    distribution: &Distribution<'_, K>,
) {
    let _ = writeln!(out, "{}", label);
    for bucket in &distribution.buckets {
        let _ = writeln!(
            out,
            "  {:<10} {:>2}  {}",
            bucket.key.to_string(),
            bucket.count(),
            bucket.names().join(", ")
        );
    }
}
