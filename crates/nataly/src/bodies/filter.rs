//! Declarative body selection.
//!
//! Every `include_*` list constrains only when non-empty; every `exclude_*`
//! list removes matching bodies. All constraints must hold for a match.

use crate::bodies::body::Body;
use crate::bodies::catalogue::BodyKind;
use crate::western::{Dignity, Element, Modality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyFilter {
    pub include_kinds: Vec<BodyKind>,
    pub exclude_kinds: Vec<BodyKind>,
    pub include_bodies: Vec<String>,
    pub exclude_bodies: Vec<String>,
    pub include_signs: Vec<String>,
    pub exclude_signs: Vec<String>,
    pub include_elements: Vec<Element>,
    pub exclude_elements: Vec<Element>,
    pub include_modalities: Vec<Modality>,
    pub exclude_modalities: Vec<Modality>,
    pub include_houses: Vec<u8>,
    pub exclude_houses: Vec<u8>,
    pub include_dignities: Vec<Dignity>,
    pub exclude_dignities: Vec<Dignity>,
    /// `Some(true)` keeps only retrograde bodies, `Some(false)` only direct ones.
    pub retrograde: Option<bool>,
}

fn admits<T: PartialEq>(include: &[T], exclude: &[T], value: &T) -> bool {
    (include.is_empty() || include.contains(value)) && !exclude.contains(value)
}

fn admits_name(include: &[String], exclude: &[String], value: &str) -> bool {
    (include.is_empty() || include.iter().any(|n| n.eq_ignore_ascii_case(value)))
        && !exclude.iter().any(|n| n.eq_ignore_ascii_case(value))
}

impl BodyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Luminaries and planets only.
    pub fn planets_only() -> Self {
        Self::new().with_kinds(&[BodyKind::Luminary, BodyKind::Planet])
    }

    pub fn with_kinds(mut self, kinds: &[BodyKind]) -> Self {
        self.include_kinds.extend_from_slice(kinds);
        self
    }

    pub fn without_kinds(mut self, kinds: &[BodyKind]) -> Self {
        self.exclude_kinds.extend_from_slice(kinds);
        self
    }

    pub fn with_bodies(mut self, names: &[&str]) -> Self {
        self.include_bodies
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn without_bodies(mut self, names: &[&str]) -> Self {
        self.exclude_bodies
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_signs(mut self, signs: &[&str]) -> Self {
        self.include_signs.extend(signs.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_elements(mut self, elements: &[Element]) -> Self {
        self.include_elements.extend_from_slice(elements);
        self
    }

    pub fn with_modalities(mut self, modalities: &[Modality]) -> Self {
        self.include_modalities.extend_from_slice(modalities);
        self
    }

    pub fn with_houses(mut self, houses: &[u8]) -> Self {
        self.include_houses.extend_from_slice(houses);
        self
    }

    pub fn with_dignities(mut self, dignities: &[Dignity]) -> Self {
        self.include_dignities.extend_from_slice(dignities);
        self
    }

    pub fn retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = Some(retrograde);
        self
    }

    pub fn matches(&self, body: &Body) -> bool {
        if !admits(&self.include_kinds, &self.exclude_kinds, &body.kind) {
            return false;
        }
        if !admits_name(&self.include_bodies, &self.exclude_bodies, &body.name) {
            return false;
        }
        if !admits_name(&self.include_signs, &self.exclude_signs, body.sign.name) {
            return false;
        }
        if !admits(&self.include_elements, &self.exclude_elements, &body.sign.element) {
            return false;
        }
        if !admits(
            &self.include_modalities,
            &self.exclude_modalities,
            &body.sign.modality,
        ) {
            return false;
        }
        if !admits(&self.include_houses, &self.exclude_houses, &body.house) {
            return false;
        }
        // A body without dignity never satisfies a dignity inclusion list
        match body.dignity {
            Some(dignity) => {
                if !admits(&self.include_dignities, &self.exclude_dignities, &dignity) {
                    return false;
                }
            }
            None => {
                if !self.include_dignities.is_empty() {
                    return false;
                }
            }
        }
        if let Some(retrograde) = self.retrograde {
            if body.is_retrograde != retrograde {
                return false;
            }
        }
        true
    }

    /// Matching bodies in input order.
    pub fn apply<'a, I>(&self, bodies: I) -> Vec<&'a Body>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        bodies.into_iter().filter(|b| self.matches(b)).collect()
    }
}
