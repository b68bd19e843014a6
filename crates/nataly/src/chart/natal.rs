//! Chart assembly: raw positions in, classified bodies and houses out.

use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::bodies::{
    catalogue_name, catalogue_names, transit_name, Body, BodyFilter, BodyKind, ASCENDANT,
    DESCENDANT, IMUM_COELI, MIDHEAVEN, SOUTH_NODE, TRANSIT_PREFIX, TRUE_NODE,
};
use crate::chart::house::House;
use crate::distribution::{ChartDistributions, DistributionAggregator};
use crate::ephemeris::{ChartMoment, EphemerisProvider, HousePositions, PlanetPosition};
use crate::error::NatalyError;
use crate::western::{checked_cusps, checked_longitude, Element, RulerScheme, HOUSE_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    pub name: String,
    pub moment: Option<ChartMoment>,
    pub house_system: String,
    /// Catalogue order, followed by any uncatalogued bodies
    pub bodies: Vec<Body>,
    pub houses: Vec<House>,
    #[serde(skip)]
    pub settings: AspectSettings,
}

/// Position of a body derived from other points rather than looked up.
///
/// South Node is only derived when True Node was placed; otherwise it is
/// looked up like any other body.
fn derived_position(
    name: &str,
    houses: &HousePositions,
    resolved: &[Body],
) -> Option<Option<PlanetPosition>> {
    let opposite = |lon: f64| PlanetPosition::new(lon + 180.0, 0.0);
    match name {
        ASCENDANT => Some(Some(PlanetPosition::new(houses.ascendant, 0.0))),
        MIDHEAVEN => Some(Some(PlanetPosition::new(houses.midheaven, 0.0))),
        IMUM_COELI => Some(Some(opposite(houses.midheaven))),
        DESCENDANT => Some(Some(opposite(houses.ascendant))),
        SOUTH_NODE => resolved
            .iter()
            .find(|b| b.name == TRUE_NODE)
            .map(|node| Some(PlanetPosition::new(node.longitude + 180.0, node.speed))),
        _ => None,
    }
}

/// Classify every catalogued body `position_of` can place, then any extras.
fn resolve_bodies<F>(
    houses: &HousePositions,
    cusps: &[f64; HOUSE_COUNT],
    extras: &[String],
    mut position_of: F,
) -> Result<Vec<Body>, NatalyError>
where
    F: FnMut(&str) -> Result<Option<PlanetPosition>, NatalyError>,
{
    let mut names: Vec<&str> = catalogue_names().collect();
    names.extend(extras.iter().map(|s| s.as_str()));

    let mut bodies: Vec<Body> = Vec::new();

    for name in names {
        let position = match derived_position(name, houses, &bodies) {
            Some(derived) => derived,
            None => position_of(name)?,
        };
        if let Some(position) = position {
            let longitude = checked_longitude(position.lon)?;
            bodies.push(Body::new(name, longitude, position.speed_lon, cusps));
        }
    }

    Ok(bodies)
}

fn build_houses(cusps: &[f64; HOUSE_COUNT], bodies: &[Body]) -> Vec<House> {
    cusps
        .iter()
        .enumerate()
        .map(|(i, &cusp)| House::new((i + 1) as u8, cusp, bodies))
        .collect()
}

impl NatalChart {
    /// Assemble a chart by querying `provider` for the moment.
    ///
    /// Bodies the provider cannot place are skipped with a warning; any other
    /// provider failure aborts the chart.
    pub fn compute<P: EphemerisProvider + ?Sized>(
        provider: &P,
        name: impl Into<String>,
        moment: &ChartMoment,
        settings: AspectSettings,
    ) -> Result<Self, NatalyError> {
        let name = name.into();
        let houses =
            provider.house_positions(moment.datetime, &moment.location, &moment.house_system)?;
        let cusps = checked_cusps(&houses.cusps)?;

        let bodies = resolve_bodies(&houses, &cusps, &[], |body| {
            match provider.body_position(body, moment.datetime) {
                Ok(position) => Ok(Some(position)),
                Err(NatalyError::PositionUnavailable { body, message }) => {
                    log::warn!("Skipping {}: {}", body, message);
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        })?;

        let chart = Self {
            name,
            moment: Some(moment.clone()),
            house_system: houses.system.clone(),
            houses: build_houses(&cusps, &bodies),
            bodies,
            settings,
        };
        log::info!(
            "Assembled chart '{}' with {} bodies ({} houses)",
            chart.name,
            chart.bodies.len(),
            chart.house_system
        );
        Ok(chart)
    }

    /// Assemble a chart from already-resolved positions.
    ///
    /// Catalogued names missing from `positions` are left out. Names not in
    /// the catalogue are appended as planets. Catalogued names may carry the
    /// transit prefix (`T-Sun`), which makes the result a transit chart.
    pub fn from_positions(
        name: impl Into<String>,
        houses: &HousePositions,
        positions: &BTreeMap<String, PlanetPosition>,
        settings: AspectSettings,
    ) -> Result<Self, NatalyError> {
        let name = name.into();
        let cusps = checked_cusps(&houses.cusps)?;
        let catalogued: Vec<&str> = catalogue_names().collect();
        let extras: Vec<String> = positions
            .keys()
            .filter(|k| !catalogued.contains(&catalogue_name(k)))
            .cloned()
            .collect();
        if !extras.is_empty() {
            log::debug!("Uncatalogued bodies in '{}': {:?}", name, extras);
        }
        let is_transit = positions
            .keys()
            .any(|k| k.starts_with(TRANSIT_PREFIX) && catalogued.contains(&catalogue_name(k)));

        let lookup = |body: &str| {
            positions
                .get(body)
                .or_else(|| positions.get(&transit_name(body)))
                .copied()
        };
        if lookup(SOUTH_NODE).is_some() && lookup(TRUE_NODE).is_some() {
            log::debug!(
                "South Node in '{}' is derived from True Node; supplied position ignored",
                name
            );
        }

        let bodies = resolve_bodies(houses, &cusps, &extras, |body| Ok(lookup(body)))?;

        let chart = Self {
            name,
            moment: None,
            house_system: houses.system.clone(),
            houses: build_houses(&cusps, &bodies),
            bodies,
            settings,
        };
        Ok(if is_transit { chart.into_transit() } else { chart })
    }

    /// Rename every body, derived axes included, with the transit prefix so
    /// it stays distinct from the natal body of the same catalogue name.
    pub fn into_transit(mut self) -> Self {
        for body in &mut self.bodies {
            body.name = transit_name(&body.name);
        }
        self.houses = self.houses.into_iter().map(House::into_transit).collect();
        self
    }

    pub fn is_transit(&self) -> bool {
        self.bodies
            .iter()
            .any(|b| b.name.starts_with(TRANSIT_PREFIX) && catalogue_name(&b.name) != b.name)
    }

    pub fn with_moment(mut self, moment: ChartMoment) -> Self {
        self.moment = Some(moment);
        self
    }

    pub fn with_settings(mut self, settings: AspectSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn bodies(&self) -> Vec<&Body> {
        self.bodies.iter().collect()
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn bodies_by_kind(&self, kind: BodyKind) -> Vec<&Body> {
        self.bodies.iter().filter(|b| b.kind == kind).collect()
    }

    pub fn planets(&self, include_luminaries: bool) -> Vec<&Body> {
        self.bodies
            .iter()
            .filter(|b| {
                b.kind == BodyKind::Planet || (include_luminaries && b.kind == BodyKind::Luminary)
            })
            .collect()
    }

    pub fn axes(&self) -> Vec<&Body> {
        self.bodies_by_kind(BodyKind::Axis)
    }

    pub fn filtered(&self, filter: &BodyFilter) -> Vec<&Body> {
        filter.apply(&self.bodies)
    }

    /// Bodies in the order the names are given; unknown names are ignored.
    pub fn bodies_by_names(&self, names: &[&str]) -> Vec<&Body> {
        names.iter().filter_map(|name| self.body(name)).collect()
    }

    pub fn bodies_by_signs(&self, signs: &[&str]) -> Vec<&Body> {
        self.filtered(&BodyFilter::new().with_signs(signs))
    }

    pub fn bodies_by_elements(&self, elements: &[Element]) -> Vec<&Body> {
        self.filtered(&BodyFilter::new().with_elements(elements))
    }

    pub fn bodies_by_houses(&self, houses: &[u8]) -> Vec<&Body> {
        self.filtered(&BodyFilter::new().with_houses(houses))
    }

    pub fn house(&self, id: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.id == id)
    }

    pub fn house_ruler(&self, id: u8, scheme: RulerScheme) -> Option<&Body> {
        self.house(id)
            .and_then(|h| h.ruler(scheme))
            .and_then(|name| self.body(name))
    }

    pub fn distributions(&self) -> ChartDistributions<'_> {
        DistributionAggregator::aggregate(&self.bodies())
    }

    pub fn distributions_for(&self, filter: &BodyFilter) -> ChartDistributions<'_> {
        DistributionAggregator::aggregate(&self.filtered(filter))
    }

    /// Aspects between the chart's own bodies.
    pub fn aspects(&self) -> Vec<Aspect<'_>> {
        AspectCalculator::new().compute_chart_aspects(&self.bodies(), &self.settings)
    }

    pub fn aspects_for(&self, filter: &BodyFilter) -> Vec<Aspect<'_>> {
        AspectCalculator::new().compute_chart_aspects(&self.filtered(filter), &self.settings)
    }

    /// Aspects from this chart's bodies to another chart's, such as transits.
    /// Bodies sharing a name across the two charts are not paired, so the
    /// other chart should usually go through [`NatalChart::into_transit`].
    pub fn aspects_with<'a>(&'a self, other: &'a NatalChart) -> Vec<Aspect<'a>> {
        AspectCalculator::new().compute_aspects(&self.bodies(), &other.bodies(), &self.settings)
    }
}
