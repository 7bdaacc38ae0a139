//! Arena of resolved skill definitions.

use std::fmt;
use std::sync::Arc;

use crate::env::BuildOracle;

use super::{ResolutionError, SkillDefinition, SkillTemplate};

/// Stable handle of a skill inside a [`SkillBook`] (and of its instance in
/// every [`Roster`](super::Roster) built from that book).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl SkillId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Owned collection of immutable skill definitions.
///
/// Definitions are reference counted so that rosters of independent runs
/// share them without copying.
#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    skills: Vec<Arc<SkillDefinition>>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolved definition and returns its handle.
    pub fn insert(&mut self, definition: SkillDefinition) -> SkillId {
        let id = SkillId(self.skills.len() as u32);
        self.skills.push(Arc::new(definition));
        id
    }

    /// Resolves `template` against `build` and adds the result.
    pub fn insert_template<B>(
        &mut self,
        template: &SkillTemplate,
        build: &B,
    ) -> Result<SkillId, ResolutionError>
    where
        B: BuildOracle + ?Sized,
    {
        let definition = template.resolve(build)?;
        Ok(self.insert(definition))
    }

    /// Resolves every template, failing on the first missing build value.
    pub fn from_templates<'t, B>(
        templates: impl IntoIterator<Item = &'t SkillTemplate>,
        build: &B,
    ) -> Result<Self, ResolutionError>
    where
        B: BuildOracle + ?Sized,
    {
        let mut book = Self::new();
        for template in templates {
            book.insert_template(template, build)?;
        }
        Ok(book)
    }

    pub fn get(&self, id: SkillId) -> Option<&Arc<SkillDefinition>> {
        self.skills.get(id.index())
    }

    pub fn contains(&self, id: SkillId) -> bool {
        id.index() < self.skills.len()
    }

    /// Looks a skill up by name (first match).
    pub fn find(&self, name: &str) -> Option<SkillId> {
        self.skills
            .iter()
            .position(|def| def.name == name)
            .map(|index| SkillId(index as u32))
    }

    /// Name of a skill, or `"?"` for unknown handles.
    pub fn name(&self, id: SkillId) -> &str {
        self.get(id).map_or("?", |def| def.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillId, &Arc<SkillDefinition>)> {
        self.skills
            .iter()
            .enumerate()
            .map(|(index, def)| (SkillId(index as u32), def))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BuildTable;
    use crate::skill::SkillKind;

    #[test]
    fn handles_are_dense_and_stable() {
        let mut book = SkillBook::new();
        let a = book.insert(SkillDefinition::buff("a"));
        let b = book.insert(SkillDefinition::damage("b", 300.0, 4));

        assert_eq!((a, b), (SkillId(0), SkillId(1)));
        assert_eq!(book.find("b"), Some(b));
        assert_eq!(book.name(a), "a");
        assert_eq!(book.name(SkillId(7)), "?");
        assert!(!book.contains(SkillId(2)));
    }

    #[test]
    fn from_templates_stops_at_first_error() {
        let templates = [
            SkillTemplate::new("ok", SkillKind::Buff),
            SkillTemplate::new("broken", SkillKind::Buff)
                .with_duration(crate::skill::Formula::build("vskill", "level")),
        ];
        let err = SkillBook::from_templates(&templates, &BuildTable::new()).unwrap_err();
        assert!(matches!(err, ResolutionError::MissingBuildValue { ref skill, .. } if skill == "broken"));
    }
}
