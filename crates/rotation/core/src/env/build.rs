//! Character-build data consulted during skill resolution.

use std::collections::BTreeMap;

/// Provides named build scalars such as the enhancement tier of a skill slot.
pub trait BuildOracle: Send + Sync {
    /// Returns the value recorded for `tier` under `slot`, if any.
    fn value(&self, slot: &str, tier: &str) -> Option<f64>;
}

/// In-memory build table keyed by slot, then tier.
///
/// ```
/// # use rotation_core::{BuildOracle, BuildTable};
/// let build = BuildTable::new()
///     .with("vskill", "level", 30.0)
///     .with("hyper", "reinforce", 1.0);
/// assert_eq!(build.value("vskill", "level"), Some(30.0));
/// assert_eq!(build.value("vskill", "boost"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuildTable {
    slots: BTreeMap<String, BTreeMap<String, f64>>,
}

impl BuildTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `slot`/`tier`, replacing any previous value.
    pub fn insert(&mut self, slot: impl Into<String>, tier: impl Into<String>, value: f64) {
        self.slots
            .entry(slot.into())
            .or_default()
            .insert(tier.into(), value);
    }

    /// Builder-style [`BuildTable::insert`].
    #[must_use]
    pub fn with(mut self, slot: impl Into<String>, tier: impl Into<String>, value: f64) -> Self {
        self.insert(slot, tier, value);
        self
    }

    /// Number of recorded values across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BuildOracle for BuildTable {
    fn value(&self, slot: &str, tier: &str) -> Option<f64> {
        self.slots.get(slot)?.get(tier).copied()
    }
}
