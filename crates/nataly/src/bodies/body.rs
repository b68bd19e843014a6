use crate::bodies::catalogue::{body_kind, body_symbol, catalogue_name, BodyKind};
use crate::format;
use crate::western::{
    degree_in_sign, dignity_for, house_from_longitude, normalize_longitude, sign_from_longitude,
    Dignity, Sign, HOUSE_COUNT,
};
use serde::Serialize;

/// One celestial point resolved into symbolic placements for a single chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    /// Ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    /// Degrees per day; axes are always 0
    pub speed: f64,
    #[serde(rename = "isRetrograde")]
    pub is_retrograde: bool,
    pub sign: &'static Sign,
    pub house: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dignity: Option<Dignity>,
}

impl Body {
    /// Resolve a body whose category comes from the catalogue.
    pub fn new(
        name: impl Into<String>,
        longitude: f64,
        speed: f64,
        cusps: &[f64; HOUSE_COUNT],
    ) -> Self {
        let name = name.into();
        let kind = body_kind(&name);
        Self::with_kind(name, kind, longitude, speed, cusps)
    }

    pub fn with_kind(
        name: impl Into<String>,
        kind: BodyKind,
        longitude: f64,
        speed: f64,
        cusps: &[f64; HOUSE_COUNT],
    ) -> Self {
        let name = name.into();
        let longitude = normalize_longitude(longitude);
        let speed = if kind == BodyKind::Axis { 0.0 } else { speed };
        let sign = sign_from_longitude(longitude);
        let house = house_from_longitude(longitude, cusps);
        let dignity = dignity_for(catalogue_name(&name), sign.name);

        Self {
            name,
            kind,
            longitude,
            speed,
            is_retrograde: speed < 0.0,
            sign,
            house,
            dignity,
        }
    }

    pub fn symbol(&self) -> Option<&'static str> {
        body_symbol(&self.name)
    }

    pub fn dignity_label(&self) -> &'static str {
        self.dignity.map(|d| d.as_str()).unwrap_or("")
    }

    pub fn degree_in_sign(&self) -> f64 {
        degree_in_sign(self.longitude)
    }

    pub fn is_axis(&self) -> bool {
        self.kind == BodyKind::Axis
    }

    pub fn is_luminary(&self) -> bool {
        self.kind == BodyKind::Luminary
    }

    /// Position within the sign as `DD°MM'`.
    pub fn dms(&self) -> String {
        format::dms(self.longitude)
    }

    pub fn signed_dms(&self) -> String {
        format::signed_dms(self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSPS: [f64; 12] = [
        0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
    ];

    #[test]
    fn test_body_resolution() {
        let sun = Body::new("Sun", 135.0, 0.98, &CUSPS);
        assert_eq!(sun.kind, BodyKind::Luminary);
        assert_eq!(sun.sign.name, "Leo");
        assert_eq!(sun.house, 5);
        assert_eq!(sun.dignity, Some(Dignity::Domicile));
        assert!(!sun.is_retrograde);
    }

    #[test]
    fn test_retrograde_and_axes() {
        let mercury = Body::new("Mercury", 200.0, -0.4, &CUSPS);
        assert!(mercury.is_retrograde);
        assert_eq!(mercury.dignity_label(), "");

        let mc = Body::new("MC", 275.0, -1.0, &CUSPS);
        assert_eq!(mc.speed, 0.0);
        assert!(!mc.is_retrograde);
        assert_eq!(mc.house, 10);
    }

    #[test]
    fn test_longitude_is_normalized() {
        let moon = Body::new("Moon", -10.0, 13.2, &CUSPS);
        assert_eq!(moon.longitude, 350.0);
        assert_eq!(moon.sign.name, "Pisces");
        assert_eq!(moon.house, 12);
    }

    #[test]
    fn test_transit_body_keeps_kind_and_dignity() {
        let sun = Body::new("T-Sun", 135.0, 0.98, &CUSPS);
        assert_eq!(sun.name, "T-Sun");
        assert_eq!(sun.kind, BodyKind::Luminary);
        assert_eq!(sun.dignity, Some(Dignity::Domicile));
        assert_eq!(sun.symbol(), Some("☉"));
    }
}
