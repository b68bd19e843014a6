pub mod dignities;
pub mod position;
pub mod rulers;
pub mod types;

pub use dignities::{dignity_for, dignity_label, Dignity};
pub use position::{
    checked_cusps, checked_longitude, degree_in_sign, get_sign_index, house_from_longitude,
    normalize_longitude, sign_from_longitude, HOUSE_COUNT,
};
pub use rulers::{get_sign_ruler, get_sign_ruler_from_longitude, RulerScheme};
pub use types::{Element, Modality, Polarity, Sign, SIGNS};
