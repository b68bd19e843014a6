use crate::bodies::{catalogue_name, transit_name, Body};
use crate::format;
use crate::western::{get_sign_ruler, sign_from_longitude, RulerScheme, Sign};
use serde::Serialize;

/// One of the twelve houses of a chart.
///
/// Rulers are stored by name and resolved against the chart's own bodies,
/// together with the house each ruler occupies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    pub id: u8,
    #[serde(rename = "cuspLongitude")]
    pub cusp_longitude: f64,
    pub sign: &'static Sign,
    #[serde(rename = "classicRuler")]
    pub classic_ruler: Option<String>,
    #[serde(rename = "modernRuler")]
    pub modern_ruler: Option<String>,
    #[serde(rename = "classicRulerHouse")]
    pub classic_ruler_house: Option<u8>,
    #[serde(rename = "modernRulerHouse")]
    pub modern_ruler_house: Option<u8>,
}

impl House {
    /// Build house `id` from its cusp. A ruler absent from `bodies` is left unset.
    pub fn new(id: u8, cusp_longitude: f64, bodies: &[Body]) -> Self {
        let sign = sign_from_longitude(cusp_longitude);
        let ruler = |scheme| {
            get_sign_ruler(sign, scheme)
                .and_then(|name| bodies.iter().find(|b| catalogue_name(&b.name) == name))
        };
        let classic = ruler(RulerScheme::Classic);
        let modern = ruler(RulerScheme::Modern);

        Self {
            id,
            cusp_longitude,
            sign,
            classic_ruler: classic.map(|b| b.name.clone()),
            modern_ruler: modern.map(|b| b.name.clone()),
            classic_ruler_house: classic.map(|b| b.house),
            modern_ruler_house: modern.map(|b| b.house),
        }
    }

    pub fn ruler(&self, scheme: RulerScheme) -> Option<&str> {
        match scheme {
            RulerScheme::Classic => self.classic_ruler.as_deref(),
            RulerScheme::Modern => self.modern_ruler.as_deref(),
        }
    }

    pub fn ruler_house(&self, scheme: RulerScheme) -> Option<u8> {
        match scheme {
            RulerScheme::Classic => self.classic_ruler_house,
            RulerScheme::Modern => self.modern_ruler_house,
        }
    }

    /// Point the rulers at the transit-prefixed bodies of the same chart.
    pub(crate) fn into_transit(mut self) -> Self {
        self.classic_ruler = self.classic_ruler.map(|name| transit_name(&name));
        self.modern_ruler = self.modern_ruler.map(|name| transit_name(&name));
        self
    }

    /// Cusp position within its sign as `DD°MM'`.
    pub fn dms(&self) -> String {
        format::dms(self.cusp_longitude)
    }
}
