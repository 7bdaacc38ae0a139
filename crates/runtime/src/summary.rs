//! Per-skill reduction of a [`Timeline`].

use std::collections::BTreeMap;
use std::fmt;

use rotation_core::{Millis, Timeline, TriggerSource};
use serde::{Deserialize, Serialize};

/// Activation counts of one skill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub activations: usize,
    pub hits: u64,
    /// Activations caused by trigger edges rather than the policy.
    pub triggered: usize,
    pub first_at: Option<Millis>,
    pub last_at: Option<Millis>,
}

/// Aggregate view of a finished run, keyed by skill name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub horizon: Millis,
    pub activations: usize,
    pub hits: u64,
    pub skills: BTreeMap<String, SkillSummary>,
}

impl RunSummary {
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let mut skills: BTreeMap<String, SkillSummary> = BTreeMap::new();
        for event in timeline.events() {
            let entry = skills.entry(event.name.clone()).or_default();
            entry.activations += 1;
            entry.hits += u64::from(event.hit);
            if event.trigger != TriggerSource::Policy {
                entry.triggered += 1;
            }
            entry.first_at.get_or_insert(event.timestamp);
            entry.last_at = Some(event.timestamp);
        }

        Self {
            horizon: timeline.horizon,
            activations: timeline.len(),
            hits: timeline.total_hits(),
            skills,
        }
    }

    pub fn skill(&self, name: &str) -> Option<&SkillSummary> {
        self.skills.get(name)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} activations, {} hits over {}",
            self.activations, self.hits, self.horizon
        )?;
        for (name, skill) in &self.skills {
            writeln!(
                f,
                "  {name:<16} x{:<4} hits {:<6} triggered {}",
                skill.activations, skill.hits, skill.triggered
            )?;
        }
        Ok(())
    }
}
