//! Additive modifier algebra.
//!
//! ```text
//! combine(a, b)        = per-tag a + b
//! combine(a, identity) = a
//! fold([m1, .., mn])   = m1 + .. + mn   (any order)
//! scale(m, k)          = per-tag m * k
//! ```

use strum::{EnumCount, IntoEnumIterator};

use super::StatTag;

const TAGS: usize = <StatTag as EnumCount>::COUNT;

/// A vector of stat deltas indexed by [`StatTag`].
///
/// Modifiers are value objects: every operation returns a new modifier and
/// never touches its inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    values: [f64; TAGS],
}

impl Modifier {
    /// The neutral element (all zeros).
    pub const IDENTITY: Self = Self {
        values: [0.0; TAGS],
    };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a modifier from `(tag, magnitude)` pairs. Repeated tags add up.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (StatTag, f64)>) -> Self {
        let mut values = [0.0; TAGS];
        for (tag, value) in pairs {
            values[tag.index()] += value;
        }
        Self { values }
    }

    /// Returns a copy with `tag` set to `value` (builder pattern).
    #[must_use]
    pub fn with(mut self, tag: StatTag, value: f64) -> Self {
        self.values[tag.index()] = value;
        self
    }

    #[inline]
    pub fn get(&self, tag: StatTag) -> f64 {
        self.values[tag.index()]
    }

    /// Per-tag sum.
    #[must_use]
    pub fn combine(&self, other: &Modifier) -> Modifier {
        let mut values = self.values;
        for (slot, rhs) in values.iter_mut().zip(other.values.iter()) {
            *slot += rhs;
        }
        Modifier { values }
    }

    /// Combines every modifier of the sequence, starting from the identity.
    pub fn fold<'a>(modifiers: impl IntoIterator<Item = &'a Modifier>) -> Modifier {
        modifiers
            .into_iter()
            .fold(Modifier::IDENTITY, |acc, m| acc.combine(m))
    }

    /// Per-tag multiply.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Modifier {
        let mut values = self.values;
        for slot in values.iter_mut() {
            *slot *= factor;
        }
        Modifier { values }
    }

    pub fn is_identity(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Iterates over the tags with a non-zero magnitude.
    pub fn iter(&self) -> impl Iterator<Item = (StatTag, f64)> + '_ {
        StatTag::iter()
            .map(|tag| (tag, self.get(tag)))
            .filter(|(_, value)| *value != 0.0)
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Add for Modifier {
    type Output = Modifier;
    fn add(self, rhs: Modifier) -> Modifier {
        self.combine(&rhs)
    }
}

impl std::iter::Sum for Modifier {
    fn sum<I: Iterator<Item = Modifier>>(iter: I) -> Modifier {
        iter.fold(Modifier::IDENTITY, |acc, m| acc.combine(&m))
    }
}

impl<'a> std::iter::Sum<&'a Modifier> for Modifier {
    fn sum<I: Iterator<Item = &'a Modifier>>(iter: I) -> Modifier {
        Modifier::fold(iter)
    }
}
