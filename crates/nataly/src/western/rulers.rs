//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::western::position::sign_from_longitude;
use crate::western::types::Sign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerScheme {
    #[default]
    Classic,
    Modern,
}

/// Ruling body of a sign under the given scheme.
pub fn get_sign_ruler(sign: &Sign, scheme: RulerScheme) -> Option<&'static str> {
    match scheme {
        RulerScheme::Classic => Some(sign.classic_ruler),
        RulerScheme::Modern => sign.modern_ruler,
    }
}

/// Get sign ruler from longitude
pub fn get_sign_ruler_from_longitude(longitude: f64, scheme: RulerScheme) -> Option<&'static str> {
    get_sign_ruler(sign_from_longitude(longitude), scheme)
}
