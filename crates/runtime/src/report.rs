//! JSON export of a batch of runs.
use std::fs;
use std::path::Path;

use rotation_core::{SimulationConfig, Timeline};
use serde::{Deserialize, Serialize};

use crate::{Result, RunSummary, RuntimeError};

/// One policy's run: the summary plus the full timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub policy: String,
    pub summary: RunSummary,
    pub timeline: Timeline,
}

/// Everything needed to compare policies offline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub config: SimulationConfig,
    pub runs: Vec<PolicyReport>,
}

impl Report {
    pub fn new(config: SimulationConfig, runs: Vec<(String, Timeline)>) -> Self {
        let runs = runs
            .into_iter()
            .map(|(policy, timeline)| PolicyReport {
                policy,
                summary: RunSummary::from_timeline(&timeline),
                timeline,
            })
            .collect();
        Self { config, runs }
    }

    pub fn run(&self, policy: &str) -> Option<&PolicyReport> {
        self.runs.iter().find(|r| r.policy == policy)
    }

    /// Writes the report through a temp file and an atomic rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");

        let json =
            serde_json::to_string_pretty(self).map_err(|e| RuntimeError::Json(e.to_string()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;

        tracing::info!("Saved report: {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| RuntimeError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::{Millis, PolicyView, SkillBook, SkillDefinition, SkillId, TriggerGraph};

    use crate::Runner;

    #[test]
    fn save_then_load_preserves_runs() {
        let mut book = SkillBook::new();
        let jab = book.insert(SkillDefinition::damage("jab", 100.0, 2).with_delay(Millis(250)));
        let runner = Runner::new(
            book,
            TriggerGraph::empty(1),
            SimulationConfig::new().with_horizon(Millis(2_000)),
        );
        let mut spam = |_: Millis, _: &PolicyView<'_>| -> Option<SkillId> { Some(jab) };
        let timeline = runner.run(&mut spam).unwrap();

        let report = Report::new(runner.config().clone(), vec![("spam".into(), timeline)]);
        assert_eq!(report.run("spam").unwrap().summary.hits, 14);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save(&path).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(Report::load(&path).unwrap(), report);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Report::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
    }
}
