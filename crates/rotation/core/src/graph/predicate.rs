//! Conditions over the live instance roster.

use crate::skill::{Roster, SkillId};

/// Declarative condition evaluated against a [`Roster`].
///
/// Predicates are plain data so that graphs stay immutable and can be shared
/// between runs. Unknown skill ids evaluate to `false`; graph validation
/// rejects them before any run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Predicate {
    Always,
    IsActive(SkillId),
    IsNotActive(SkillId),
    IsAvailable(SkillId),
    /// Stacking instance holds at least this many stacks.
    StackAtLeast(SkillId, u32),
    Not(Box<Predicate>),
    /// True when every operand holds (vacuously true when empty).
    All(Vec<Predicate>),
    /// True when any operand holds (false when empty).
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn is_active(id: SkillId) -> Self {
        Predicate::IsActive(id)
    }

    pub fn is_not_active(id: SkillId) -> Self {
        Predicate::IsNotActive(id)
    }

    pub fn is_available(id: SkillId) -> Self {
        Predicate::IsAvailable(id)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    pub fn evaluate(&self, roster: &Roster) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::IsActive(id) => roster.get(*id).is_some_and(|i| i.is_active()),
            Predicate::IsNotActive(id) => roster.get(*id).is_some_and(|i| i.is_not_active()),
            Predicate::IsAvailable(id) => roster.get(*id).is_some_and(|i| i.is_available()),
            Predicate::StackAtLeast(id, min) => roster
                .get(*id)
                .and_then(|i| i.stack_count())
                .is_some_and(|count| count >= *min),
            Predicate::Not(inner) => !inner.evaluate(roster),
            Predicate::All(parts) => parts.iter().all(|p| p.evaluate(roster)),
            Predicate::Any(parts) => parts.iter().any(|p| p.evaluate(roster)),
        }
    }

    /// Collects every skill the predicate looks at.
    pub(crate) fn referenced(&self, out: &mut Vec<SkillId>) {
        match self {
            Predicate::Always => {}
            Predicate::IsActive(id)
            | Predicate::IsNotActive(id)
            | Predicate::IsAvailable(id)
            | Predicate::StackAtLeast(id, _) => out.push(*id),
            Predicate::Not(inner) => inner.referenced(out),
            Predicate::All(parts) | Predicate::Any(parts) => {
                for part in parts {
                    part.referenced(out);
                }
            }
        }
    }
}
