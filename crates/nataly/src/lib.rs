//! Symbolic classification of natal charts.
//!
//! Raw longitudes, speeds and house cusps come from an external ephemeris;
//! this crate places them in signs and houses, assigns dignities, detects
//! aspects and groups bodies into distributions.

pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod distribution;
pub mod ephemeris;
pub mod error;
pub mod format;
pub mod western;

pub use aspects::{
    angular_difference, Aspect, AspectCalculator, AspectKind, AspectSettings, MatchPolicy,
    OrbCategory, OrbConfig,
};
pub use bodies::{Body, BodyFilter, BodyKind};
pub use chart::{House, NatalChart};
pub use distribution::{
    Bucket, ChartDistributions, Distribution, DistributionAggregator, Hemisphere, Quadrant,
};
pub use ephemeris::{
    ChartMoment, EphemerisProvider, GeoLocation, HousePositions, PlanetPosition, PositionSnapshot,
    StaticEphemeris,
};
pub use error::NatalyError;
pub use western::{
    dignity_for, house_from_longitude, sign_from_longitude, Dignity, Element, Modality, Polarity,
    RulerScheme, Sign, SIGNS,
};
