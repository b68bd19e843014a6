//! Grouping of body collections into category buckets.
//!
//! Every bucket of a category is always present, in declaration order, and
//! members keep the order of the input collection. Each body lands in
//! exactly one bucket per category.

use crate::bodies::Body;
use crate::western::{Element, Modality, Polarity};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    /// Houses 1-3
    First,
    /// Houses 4-6
    Second,
    /// Houses 7-9
    Third,
    /// Houses 10-12
    Fourth,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    pub fn from_house(house: u8) -> Quadrant {
        match house {
            1..=3 => Quadrant::First,
            4..=6 => Quadrant::Second,
            7..=9 => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::First => "First",
            Quadrant::Second => "Second",
            Quadrant::Third => "Third",
            Quadrant::Fourth => "Fourth",
        }
    }
}

/// Split along the horizon: houses 1-6 lie below it, 7-12 above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hemisphere {
    Lower,
    Upper,
}

impl Hemisphere {
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Lower, Hemisphere::Upper];

    pub fn from_house(house: u8) -> Hemisphere {
        if house <= 6 {
            Hemisphere::Lower
        } else {
            Hemisphere::Upper
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Lower => "Lower",
            Hemisphere::Upper => "Upper",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<'a, K> {
    pub key: K,
    pub bodies: Vec<&'a Body>,
}

impl<'a, K> Bucket<'a, K> {
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.bodies.iter().map(|b| b.name.as_str()).collect()
    }
}

/// All buckets of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution<'a, K> {
    pub buckets: Vec<Bucket<'a, K>>,
}

impl<'a, K: Copy + PartialEq> Distribution<'a, K> {
    fn group<I>(keys: &[K], bodies: I, key_of: impl Fn(&Body) -> K) -> Self
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut buckets: Vec<Bucket<'a, K>> = keys
            .iter()
            .map(|&key| Bucket {
                key,
                bodies: Vec::new(),
            })
            .collect();

        for body in bodies {
            let key = key_of(body);
            if let Some(bucket) = buckets.iter_mut().find(|b| b.key == key) {
                bucket.bodies.push(body);
            }
        }

        Self { buckets }
    }

    pub fn get(&self, key: K) -> Option<&Bucket<'a, K>> {
        self.buckets.iter().find(|b| b.key == key)
    }

    pub fn count(&self, key: K) -> usize {
        self.get(key).map(|b| b.count()).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count()).sum()
    }

    /// Buckets holding the most bodies, in declaration order.
    pub fn dominant(&self) -> Vec<K> {
        let max = self.buckets.iter().map(|b| b.count()).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.buckets
            .iter()
            .filter(|b| b.count() == max)
            .map(|b| b.key)
            .collect()
    }
}

/// Every category grouping for one body collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDistributions<'a> {
    pub elements: Distribution<'a, Element>,
    pub modalities: Distribution<'a, Modality>,
    pub polarities: Distribution<'a, Polarity>,
    pub quadrants: Distribution<'a, Quadrant>,
    pub hemispheres: Distribution<'a, Hemisphere>,
}

pub struct DistributionAggregator;

impl DistributionAggregator {
    pub fn by_element<'a, I>(bodies: I) -> Distribution<'a, Element>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        Distribution::group(&Element::ALL, bodies, |b| b.sign.element)
    }

    pub fn by_modality<'a, I>(bodies: I) -> Distribution<'a, Modality>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        Distribution::group(&Modality::ALL, bodies, |b| b.sign.modality)
    }

    pub fn by_polarity<'a, I>(bodies: I) -> Distribution<'a, Polarity>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        Distribution::group(&Polarity::ALL, bodies, |b| b.sign.polarity)
    }

    pub fn by_quadrant<'a, I>(bodies: I) -> Distribution<'a, Quadrant>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        Distribution::group(&Quadrant::ALL, bodies, |b| Quadrant::from_house(b.house))
    }

    pub fn by_hemisphere<'a, I>(bodies: I) -> Distribution<'a, Hemisphere>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        Distribution::group(&Hemisphere::ALL, bodies, |b| Hemisphere::from_house(b.house))
    }

    pub fn aggregate<'a>(bodies: &[&'a Body]) -> ChartDistributions<'a> {
        let all = || bodies.iter().copied();
        ChartDistributions {
            elements: Self::by_element(all()),
            modalities: Self::by_modality(all()),
            polarities: Self::by_polarity(all()),
            quadrants: Self::by_quadrant(all()),
            hemispheres: Self::by_hemisphere(all()),
        }
    }
}
