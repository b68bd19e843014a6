pub mod provider;
pub mod types;

pub use provider::{EphemerisProvider, PositionSnapshot, StaticEphemeris};
pub use types::{ChartMoment, GeoLocation, HousePositions, PlanetPosition};
