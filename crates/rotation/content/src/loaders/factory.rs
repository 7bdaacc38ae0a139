//! One-stop loading of a resolved skill book.

use std::path::Path;

use rotation_core::{BuildTable, SkillBook, SkillTemplate};
use tracing::info;

use crate::loaders::{BuildLoader, LoadResult, SkillLoader};

/// Loads a skill catalog and a build, then resolves the catalog into a
/// [`SkillBook`].
pub struct ContentFactory;

impl ContentFactory {
    pub fn load_book(skills: &Path, build: &Path) -> LoadResult<SkillBook> {
        let templates = SkillLoader::load(skills)?;
        let build = BuildLoader::load(build)?;
        Self::resolve(&templates, &build)
    }

    pub fn resolve(templates: &[SkillTemplate], build: &BuildTable) -> LoadResult<SkillBook> {
        let book = SkillBook::from_templates(templates, build)
            .map_err(|e| anyhow::anyhow!("Failed to resolve skill catalog: {}", e))?;
        info!(skills = book.len(), build_values = build.len(), "skill book resolved");
        Ok(book)
    }
}
