//! Character build loader.

use std::path::Path;

use rotation_core::BuildTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BuildTable`]s from RON files.
///
/// The file is a map of slot to tier values:
///
/// ```ron
/// {
///     "vskill": { "level": 25.0 },
///     "hyper": { "reinforce": 1.0, "cooldown": 1.0 },
/// }
/// ```
pub struct BuildLoader;

impl BuildLoader {
    pub fn load(path: &Path) -> LoadResult<BuildTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BuildTable> {
        let build: BuildTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build RON: {}", e))?;
        Ok(build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::BuildOracle;

    #[test]
    fn parses_nested_map() {
        let build = BuildLoader::parse(r#"{ "vskill": { "level": 25.0 }, "hyper": { "tier": 2.0 } }"#)
            .unwrap();
        assert_eq!(build.value("vskill", "level"), Some(25.0));
        assert_eq!(build.value("hyper", "tier"), Some(2.0));
        assert_eq!(build.len(), 2);
    }

    #[test]
    fn malformed_build_is_an_error() {
        let err = BuildLoader::parse("{ \"vskill\": 3 }").unwrap_err();
        assert!(err.to_string().contains("build RON"));
    }
}
