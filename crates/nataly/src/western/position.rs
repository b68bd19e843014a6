//! Sign and house placement for ecliptic longitudes.
//!
//! House cusps are absolute longitudes listed from the Ascendant (cusp 1) to
//! cusp 12. They are unevenly spaced and any house may straddle the 0°/360°
//! seam, so membership is tested on longitudes rotated to the Ascendant.

use crate::error::NatalyError;
use crate::western::types::{Sign, SIGNS};

pub const HOUSE_COUNT: usize = 12;

/// Wrap any finite longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let normalized = ((longitude % 360.0) + 360.0) % 360.0;
    // Tiny negative inputs round up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Normalize a longitude coming from outside the crate, rejecting NaN and infinities.
pub fn checked_longitude(longitude: f64) -> Result<f64, NatalyError> {
    if !longitude.is_finite() {
        return Err(NatalyError::domain(format!(
            "longitude must be finite, got {}",
            longitude
        )));
    }
    Ok(normalize_longitude(longitude))
}

/// Validate a raw cusp list: exactly twelve finite longitudes.
pub fn checked_cusps(cusps: &[f64]) -> Result<[f64; HOUSE_COUNT], NatalyError> {
    if cusps.len() != HOUSE_COUNT {
        return Err(NatalyError::domain(format!(
            "expected {} house cusps, got {}",
            HOUSE_COUNT,
            cusps.len()
        )));
    }
    let mut checked = [0.0; HOUSE_COUNT];
    for (slot, &cusp) in checked.iter_mut().zip(cusps) {
        *slot = checked_longitude(cusp)?;
    }
    Ok(checked)
}

/// Get sign index (0-11) from longitude
pub fn get_sign_index(longitude: f64) -> usize {
    ((normalize_longitude(longitude) / 30.0) as usize).min(11)
}

pub fn sign_from_longitude(longitude: f64) -> &'static Sign {
    &SIGNS[get_sign_index(longitude)]
}

/// Offset of the longitude from the start of its sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_longitude(longitude);
    lon - get_sign_index(lon) as f64 * 30.0
}

/// House number (1-12) containing `longitude`.
///
/// Falls back to house 12 if no interval claims the point, which only
/// happens for degenerate cusp sets.
pub fn house_from_longitude(longitude: f64, cusps: &[f64; HOUSE_COUNT]) -> u8 {
    let ascendant = cusps[0];
    let relative = |value: f64| normalize_longitude(value - ascendant);
    let point = relative(longitude);

    for i in 0..HOUSE_COUNT {
        let start = relative(cusps[i]);
        let end = relative(cusps[(i + 1) % HOUSE_COUNT]);
        let inside = if end < start {
            point >= start || point < end
        } else {
            start <= point && point < end
        };
        if inside {
            return (i + 1) as u8;
        }
    }

    HOUSE_COUNT as u8
}
