//! Known celestial points, their display symbols and categories.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Planet,
    Luminary,
    Asteroid,
    LunarNode,
    Lilith,
    Axis,
}

impl BodyKind {
    pub const ALL: [BodyKind; 6] = [
        BodyKind::Planet,
        BodyKind::Luminary,
        BodyKind::Asteroid,
        BodyKind::LunarNode,
        BodyKind::Lilith,
        BodyKind::Axis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Planet => "Planet",
            BodyKind::Luminary => "Luminary",
            BodyKind::Asteroid => "Asteroid",
            BodyKind::LunarNode => "LunarNode",
            BodyKind::Lilith => "Lilith",
            BodyKind::Axis => "Axis",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SOUTH_NODE: &str = "South Node";
pub const TRUE_NODE: &str = "True Node";

pub const ASCENDANT: &str = "AC";
pub const MIDHEAVEN: &str = "MC";
pub const IMUM_COELI: &str = "IC";
pub const DESCENDANT: &str = "DC";

/// Marks a body of a transit chart, e.g. `T-Sun`. The rest of the name is
/// still looked up in the catalogue.
pub const TRANSIT_PREFIX: &str = "T-";

// (name, symbol, kind) in default chart order
pub const BODY_CATALOGUE: &[(&str, &str, BodyKind)] = &[
    ("Sun", "☉", BodyKind::Luminary),
    ("Moon", "☽", BodyKind::Luminary),
    ("Mercury", "☿", BodyKind::Planet),
    ("Venus", "♀", BodyKind::Planet),
    ("Mars", "♂", BodyKind::Planet),
    ("Jupiter", "♃", BodyKind::Planet),
    ("Saturn", "♄", BodyKind::Planet),
    ("Uranus", "♅", BodyKind::Planet),
    ("Neptune", "♆", BodyKind::Planet),
    ("Pluto", "♇", BodyKind::Planet),
    ("Ceres", "⚳", BodyKind::Asteroid),
    ("Pallas", "⚴", BodyKind::Asteroid),
    ("Juno", "⚵", BodyKind::Asteroid),
    ("Vesta", "⚶", BodyKind::Asteroid),
    ("Chiron", "⚷", BodyKind::Asteroid),
    (TRUE_NODE, "☊", BodyKind::LunarNode),
    (SOUTH_NODE, "☋", BodyKind::LunarNode),
    ("Mean Node", "☊", BodyKind::LunarNode),
    ("Lilith", "⚸", BodyKind::Lilith),
    ("Black Moon", "⚸", BodyKind::Lilith),
    (ASCENDANT, "AC", BodyKind::Axis),
    (MIDHEAVEN, "MC", BodyKind::Axis),
    (IMUM_COELI, "IC", BodyKind::Axis),
    (DESCENDANT, "DC", BodyKind::Axis),
];

fn lookup(name: &str) -> Option<&'static (&'static str, &'static str, BodyKind)> {
    let name = catalogue_name(name);
    BODY_CATALOGUE.iter().find(|(n, _, _)| *n == name)
}

fn is_catalogued(name: &str) -> bool {
    BODY_CATALOGUE.iter().any(|(n, _, _)| *n == name)
}

/// Catalogue identity of a possibly transit-prefixed name. Names that are not
/// a prefixed catalogue entry come back unchanged.
pub fn catalogue_name(name: &str) -> &str {
    match name.strip_prefix(TRANSIT_PREFIX) {
        Some(base) if is_catalogued(base) => base,
        _ => name,
    }
}

/// `name` with the transit prefix, unless it already carries one.
pub fn transit_name(name: &str) -> String {
    if name.starts_with(TRANSIT_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", TRANSIT_PREFIX, name)
    }
}

/// Category of a named body. Unknown names are treated as planets.
pub fn body_kind(name: &str) -> BodyKind {
    lookup(name).map(|(_, _, kind)| *kind).unwrap_or(BodyKind::Planet)
}

pub fn body_symbol(name: &str) -> Option<&'static str> {
    lookup(name).map(|(_, symbol, _)| *symbol)
}

pub fn catalogue_names() -> impl Iterator<Item = &'static str> {
    BODY_CATALOGUE.iter().map(|(name, _, _)| *name)
}

pub fn names_of_kind(kind: BodyKind) -> impl Iterator<Item = &'static str> {
    BODY_CATALOGUE
        .iter()
        .filter(move |(_, _, k)| *k == kind)
        .map(|(name, _, _)| *name)
}
