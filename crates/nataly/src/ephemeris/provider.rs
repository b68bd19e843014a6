//! The ephemeris boundary.
//!
//! Position math lives outside this crate. `EphemerisProvider` is the
//! contract chart assembly consumes; `StaticEphemeris` serves a recorded
//! snapshot and backs the report tool and the tests.

use crate::bodies::transit_name;
use crate::ephemeris::types::{ChartMoment, GeoLocation, HousePositions, PlanetPosition};
use crate::error::NatalyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub trait EphemerisProvider {
    /// Longitude and speed for `body` at `datetime`.
    fn body_position(
        &self,
        body: &str,
        datetime: DateTime<Utc>,
    ) -> Result<PlanetPosition, NatalyError>;

    /// Cusps and angles for the given moment, place and house system.
    fn house_positions(
        &self,
        datetime: DateTime<Utc>,
        location: &GeoLocation,
        system: &str,
    ) -> Result<HousePositions, NatalyError>;
}

/// Positions recorded for one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    pub houses: HousePositions,
    pub bodies: BTreeMap<String, PlanetPosition>,
}

/// Provider answering from a single snapshot, whatever moment is asked.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    snapshot: PositionSnapshot,
}

impl StaticEphemeris {
    pub fn new(snapshot: PositionSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self, NatalyError> {
        let snapshot: PositionSnapshot =
            serde_json::from_str(json).map_err(|e| NatalyError::InvalidSnapshot(e.to_string()))?;
        if snapshot.houses.cusps.len() != 12 {
            return Err(NatalyError::InvalidSnapshot(format!(
                "expected 12 house cusps, got {}",
                snapshot.houses.cusps.len()
            )));
        }
        Ok(Self::new(snapshot))
    }

    pub fn from_file(path: &Path) -> Result<Self, NatalyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NatalyError::InvalidSnapshot(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn snapshot(&self) -> &PositionSnapshot {
        &self.snapshot
    }

    /// The recorded moment, when the snapshot carries both time and place.
    pub fn moment(&self) -> Option<ChartMoment> {
        let snapshot = &self.snapshot;
        match (snapshot.datetime, snapshot.location) {
            (Some(datetime), Some(location)) => Some(ChartMoment {
                datetime,
                location,
                house_system: snapshot.houses.system.clone(),
            }),
            _ => None,
        }
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn body_position(
        &self,
        body: &str,
        _datetime: DateTime<Utc>,
    ) -> Result<PlanetPosition, NatalyError> {
        let bodies = &self.snapshot.bodies;
        bodies
            .get(body)
            .or_else(|| bodies.get(&transit_name(body)))
            .copied()
            .ok_or_else(|| NatalyError::position_unavailable(body, "not present in snapshot"))
    }

    fn house_positions(
        &self,
        _datetime: DateTime<Utc>,
        _location: &GeoLocation,
        system: &str,
    ) -> Result<HousePositions, NatalyError> {
        if !self.snapshot.houses.system.eq_ignore_ascii_case(system) {
            log::debug!(
                "Snapshot holds {} houses, {} requested",
                self.snapshot.houses.system,
                system
            );
        }
        Ok(self.snapshot.houses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "name": "Sample",
        "datetime": "1990-02-27T09:34:00Z",
        "location": {"lat": 38.25, "lon": 27.09},
        "houses": {
            "system": "Placidus",
            "cusps": [0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330],
            "ascendant": 0.0,
            "midheaven": 270.0
        },
        "bodies": {
            "Sun": {"lon": 338.2, "speed_lon": 1.0},
            "Moon": {"lon": 95.0, "speed_lon": 13.2}
        }
    }"#;

    #[test]
    fn test_snapshot_provider() {
        let eph = StaticEphemeris::from_json(SNAPSHOT).unwrap();
        let moment = eph.moment().unwrap();
        assert_eq!(moment.house_system, "Placidus");

        let sun = eph.body_position("Sun", moment.datetime).unwrap();
        assert_eq!(sun.lon, 338.2);
        assert_eq!(sun.lat, 0.0);
        assert!(matches!(
            eph.body_position("Vesta", moment.datetime),
            Err(NatalyError::PositionUnavailable { .. })
        ));
    }

    #[test]
    fn test_snapshot_requires_twelve_cusps() {
        let broken = SNAPSHOT.replace("0, 30, 60, ", "");
        assert!(matches!(
            StaticEphemeris::from_json(&broken),
            Err(NatalyError::InvalidSnapshot(_))
        ));
        assert!(StaticEphemeris::from_json("{}").is_err());
    }
}
