//! Degree/minute rendering and parsing.
//!
//! Rendering truncates rather than rounds, so `29°59'` never rolls over
//! into the next sign.

use crate::error::NatalyError;
use crate::western::{degree_in_sign, normalize_longitude, sign_from_longitude, Sign};
use regex::Regex;

fn split_degrees(value: f64) -> (u32, u32) {
    let degrees = value.trunc();
    let minutes = ((value - degrees) * 60.0).trunc();
    (degrees as u32, (minutes as u32).min(59))
}

/// Position within its sign as `DD°MM'`.
pub fn dms(longitude: f64) -> String {
    let (deg, min) = split_degrees(degree_in_sign(longitude));
    format!("{:02}°{:02}'", deg, min)
}

/// Position within its sign followed by the sign symbol, e.g. `15°30' ♓`.
pub fn signed_dms(longitude: f64) -> String {
    format!("{} {}", dms(longitude), sign_from_longitude(longitude).symbol)
}

/// Orb magnitude as `D°MM'`; the sign of the orb is dropped.
pub fn orb_str(orb: f64) -> String {
    let (deg, min) = split_degrees(orb.abs());
    format!("{}°{:02}'", deg, min)
}

lazy_static::lazy_static! {
    // Degrees, then optional minutes, seconds and an applying/separating suffix
    static ref DMS: Result<Regex, regex::Error> = Regex::new(
        r#"^\s*(-)?(\d+)\s*°\s*(?:(\d+)\s*['′])?\s*(?:(\d+(?:\.\d+)?)\s*(?:"|″|''))?\s*([asAS])?\s*$"#
    );
}

fn dms_regex() -> Result<&'static Regex, NatalyError> {
    DMS.as_ref()
        .map_err(|e| NatalyError::domain(format!("regex error: {}", e)))
}

struct ParsedDms {
    value: f64,
    applying: Option<bool>,
}

fn parse_dms(text: &str) -> Result<ParsedDms, NatalyError> {
    let re = dms_regex()?;
    let caps = re
        .captures(text)
        .ok_or_else(|| NatalyError::domain(format!("not a degree value: '{}'", text)))?;

    let number = |idx: usize| -> Result<f64, NatalyError> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|e| NatalyError::domain(format!("bad number in '{}': {}", text, e))),
            None => Ok(0.0),
        }
    };

    let degrees = number(2)?;
    let minutes = number(3)?;
    let seconds = number(4)?;
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(NatalyError::domain(format!(
            "minutes and seconds must be below 60 in '{}'",
            text
        )));
    }

    let mut value = degrees + minutes / 60.0 + seconds / 3600.0;
    if caps.get(1).is_some() {
        value = -value;
    }
    let applying = caps
        .get(5)
        .map(|m| m.as_str().eq_ignore_ascii_case("a"));

    Ok(ParsedDms { value, applying })
}

/// Parse `D°M'S"` text (minutes and seconds optional) into decimal degrees.
pub fn parse_dms_to_decimal(text: &str) -> Result<f64, NatalyError> {
    Ok(parse_dms(text)?.value)
}

/// Parse an in-sign position and add the start of `sign` (when given) to
/// produce an absolute longitude.
pub fn parse_longitude_to_decimal(text: &str, sign: Option<&str>) -> Result<f64, NatalyError> {
    let offset = parse_dms_to_decimal(text)?;
    let base = match sign {
        Some(name) => Sign::by_name(name)
            .ok_or_else(|| NatalyError::domain(format!("unknown sign '{}'", name)))?
            .start_longitude(),
        None => 0.0,
    };
    Ok(normalize_longitude(base + offset))
}

/// Parse an orb such as `2°15'a` into a signed value: positive when marked
/// applying (`a`), negative when separating (`s`).
pub fn parse_orb_to_decimal(text: &str) -> Result<f64, NatalyError> {
    let parsed = parse_dms(text)?;
    Ok(match parsed.applying {
        Some(true) => parsed.value.abs(),
        Some(false) => -parsed.value.abs(),
        None => parsed.value,
    })
}
