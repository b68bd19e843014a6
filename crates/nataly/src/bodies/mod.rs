pub mod body;
pub mod catalogue;
pub mod filter;

pub use body::Body;
pub use catalogue::{
    body_kind, body_symbol, catalogue_name, catalogue_names, names_of_kind, transit_name,
    BodyKind, ASCENDANT, BODY_CATALOGUE, DESCENDANT, IMUM_COELI, MIDHEAVEN, SOUTH_NODE,
    TRANSIT_PREFIX, TRUE_NODE,
};
pub use filter::BodyFilter;
