pub mod calculator;
pub mod orbs;
pub mod types;

pub use calculator::{angular_difference, AspectCalculator};
pub use orbs::{OrbConfig, OrbTable, DEFAULT_SYSTEM};
pub use types::{Aspect, AspectKind, AspectSettings, MatchPolicy, OrbCategory};
