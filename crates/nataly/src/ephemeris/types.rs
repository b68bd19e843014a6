use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw position of one body as delivered by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed_lon: f64,
}

impl PlanetPosition {
    pub fn new(lon: f64, speed_lon: f64) -> Self {
        Self {
            lon,
            lat: 0.0,
            speed_lon,
        }
    }
}

/// House system positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    /// House system name
    pub system: String,
    /// Cusp longitudes, house 1 (Ascendant) first
    pub cusps: Vec<f64>,
    pub ascendant: f64,
    pub midheaven: f64,
}

/// When and where a chart is cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMoment {
    pub datetime: DateTime<Utc>,
    pub location: GeoLocation,
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

fn default_house_system() -> String {
    "Placidus".to_string()
}

impl ChartMoment {
    pub fn new(datetime: DateTime<Utc>, location: GeoLocation) -> Self {
        Self {
            datetime,
            location,
            house_system: default_house_system(),
        }
    }
}
