//! Demo content compiled into the crate.

use rotation_core::{BuildTable, SimulationConfig, SkillBook, SkillTemplate};

use crate::loaders::{BuildLoader, ConfigLoader, ContentFactory, LoadResult, SkillLoader};

pub const SKILLS: &str = include_str!("../data/skills.ron");
pub const BUILD: &str = include_str!("../data/build.ron");
pub const CONFIG: &str = include_str!("../data/sim.toml");

pub fn skills() -> LoadResult<Vec<SkillTemplate>> {
    SkillLoader::parse(SKILLS)
}

pub fn build() -> LoadResult<BuildTable> {
    BuildLoader::parse(BUILD)
}

pub fn config() -> LoadResult<SimulationConfig> {
    ConfigLoader::parse(CONFIG)
}

/// Bundled catalog resolved against `build`.
pub fn book_for(build: &BuildTable) -> LoadResult<SkillBook> {
    ContentFactory::resolve(&skills()?, build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::{Cooldown, Millis, StatTag};

    #[test]
    fn bundled_content_resolves() {
        let book = book_for(&build().unwrap()).unwrap();
        assert_eq!(book.len(), 10);

        let war_cry = book.get(book.find("war cry").unwrap()).unwrap();
        assert_eq!(war_cry.duration, Millis(40_000));
        assert_eq!(war_cry.modifier.get(StatTag::DamagePercent), 30.0);

        let meteor = book.get(book.find("meteor").unwrap()).unwrap();
        assert_eq!(meteor.cooldown, Cooldown::Fixed(Millis(15_000)));
        assert_eq!(meteor.damage, Some(1_650.0));

        let echo = book.get(book.find("echo").unwrap()).unwrap();
        assert_eq!(echo.cooldown, Cooldown::Untriggerable);
    }

    #[test]
    fn bundled_config_parses() {
        let config = config().unwrap();
        assert_eq!(config.horizon, Millis(180_000));
        assert_eq!(config.remain_bonus, 0.1);
    }
}
