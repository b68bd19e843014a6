use crate::aspects::types::{Aspect, AspectKind, AspectSettings, MatchPolicy, OrbCategory};
use crate::bodies::Body;
use crate::western::normalize_longitude;
use std::collections::HashSet;

/// Major aspects closer than this win over any minor aspect
const MAJOR_PREFERENCE_CEILING: f64 = 10.0;
/// Degrees per day under which the faster body counts as stationary
const STATIONARY_SPEED: f64 = 0.001;
/// Test movement of the faster body when classifying the phase
const APPLYING_STEP: f64 = 0.1;

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_difference(lon1: f64, lon2: f64) -> f64 {
    let diff = normalize_longitude(lon1 - lon2);
    diff.min(360.0 - diff)
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aspects within one body collection.
    pub fn compute_chart_aspects<'a>(
        &self,
        bodies: &[&'a Body],
        settings: &AspectSettings,
    ) -> Vec<Aspect<'a>> {
        self.compute_aspects(bodies, bodies, settings)
    }

    /// Aspects between every distinct-named pair drawn one from each collection.
    ///
    /// Each unordered pair of names is reported at most once, in the order
    /// the pair is first met.
    pub fn compute_aspects<'a>(
        &self,
        first: &[&'a Body],
        second: &[&'a Body],
        settings: &AspectSettings,
    ) -> Vec<Aspect<'a>> {
        let mut processed: HashSet<(&str, &str)> = HashSet::new();
        let mut aspects = Vec::new();

        for &body1 in first.iter().filter(|b| settings.includes(&b.name)) {
            for &body2 in second.iter().filter(|b| settings.includes(&b.name)) {
                if body1.name == body2.name {
                    continue;
                }

                let key = if body1.name <= body2.name {
                    (body1.name.as_str(), body2.name.as_str())
                } else {
                    (body2.name.as_str(), body1.name.as_str())
                };
                if !processed.insert(key) {
                    continue;
                }

                if let Some(aspect) = self.calculate_aspect(body1, body2, settings) {
                    aspects.push(aspect);
                }
            }
        }

        log::debug!(
            "Detected {} aspects across {}x{} bodies",
            aspects.len(),
            first.len(),
            second.len()
        );
        aspects
    }

    /// Aspect for a single pair, or `None` when the policy finds no match.
    pub fn calculate_aspect<'a>(
        &self,
        first: &'a Body,
        second: &'a Body,
        settings: &AspectSettings,
    ) -> Option<Aspect<'a>> {
        let separation = angular_difference(first.longitude, second.longitude);
        let category = OrbCategory::for_pair(first.kind, second.kind);
        let candidates = settings.candidates();

        let kind = match settings.policy {
            MatchPolicy::Nearest => nearest_aspect(separation, candidates),
            MatchPolicy::InOrb => in_orb_aspect(separation, category, settings, candidates),
        };
        let kind = match kind {
            Some(kind) => kind,
            None => {
                log::debug!(
                    "No aspect between {} and {} at {:.4}°",
                    first.name,
                    second.name,
                    separation
                );
                return None;
            }
        };

        let deviation = (separation - kind.angle()).abs();
        let max_orb = settings.orbs.max_orb(category, kind);
        let in_orb = settings.orbs.has_orb(category, kind) && deviation <= max_orb;
        let is_applying = Self::is_applying(
            first.longitude,
            first.speed,
            second.longitude,
            second.speed,
            separation,
        );

        log::debug!(
            "{} {} {} (sep {:.4}°, dev {:.4}°, max {} {}, {})",
            first.name,
            kind,
            second.name,
            separation,
            deviation,
            category,
            max_orb,
            if is_applying { "applying" } else { "separating" }
        );

        Some(Aspect {
            first,
            second,
            kind,
            symbol: kind.symbol(),
            separation,
            orb: if is_applying { deviation } else { -deviation },
            is_applying,
            max_orb,
            in_orb,
        })
    }

    /// Whether the pair's separation is shrinking.
    ///
    /// The faster body by absolute speed (the second on a tie) is stepped
    /// forward along its direction of motion; a stationary faster body
    /// counts as applying.
    pub fn is_applying(
        lon1: f64,
        speed1: f64,
        lon2: f64,
        speed2: f64,
        separation: f64,
    ) -> bool {
        let ((fast_lon, fast_speed), slow_lon) = if speed1.abs() > speed2.abs() {
            ((lon1, speed1), lon2)
        } else {
            ((lon2, speed2), lon1)
        };

        if fast_speed.abs() < STATIONARY_SPEED {
            return true;
        }

        let direction = if fast_speed > 0.0 { 1.0 } else { -1.0 };
        let moved = normalize_longitude(fast_lon + direction * APPLYING_STEP);
        angular_difference(moved, slow_lon) < separation
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest catalogued aspect, preferring close major aspects.
///
/// Ties keep the earlier catalogue entry.
fn nearest_aspect(separation: f64, candidates: &[AspectKind]) -> Option<AspectKind> {
    let mut best = None;
    let mut smallest = f64::INFINITY;

    for &kind in candidates.iter().filter(|k| k.is_major()) {
        let deviation = (separation - kind.angle()).abs();
        if deviation < MAJOR_PREFERENCE_CEILING && deviation < smallest {
            smallest = deviation;
            best = Some(kind);
        }
    }

    if best.is_none() {
        for &kind in candidates {
            let deviation = (separation - kind.angle()).abs();
            if deviation < smallest {
                smallest = deviation;
                best = Some(kind);
            }
        }
    }

    best
}

/// Smallest-deviation aspect within the configured orb. Kinds without an
/// orb entry for the category never match.
fn in_orb_aspect(
    separation: f64,
    category: OrbCategory,
    settings: &AspectSettings,
    candidates: &[AspectKind],
) -> Option<AspectKind> {
    let mut best = None;
    let mut smallest = f64::INFINITY;

    for &kind in candidates {
        let max_orb = match settings.orbs.try_max_orb(category, kind) {
            Ok(orb) => orb,
            Err(_) => continue,
        };
        let deviation = (separation - kind.angle()).abs();
        if deviation <= max_orb && deviation < smallest {
            smallest = deviation;
            best = Some(kind);
        }
    }

    best
}
