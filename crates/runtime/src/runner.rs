//! Executes simulations over shared, read-only definitions.

use std::sync::Arc;

use rotation_core::{RotationPolicy, Simulation, SimulationConfig, SkillBook, Timeline, TriggerGraph};
use tracing::{debug, info};

use crate::{Result, RuntimeError};

/// Owns one skill book and its trigger graph and runs policies against them.
///
/// Cloning a runner is cheap; clones share the same definitions.
#[derive(Clone, Debug)]
pub struct Runner {
    book: Arc<SkillBook>,
    graph: Arc<TriggerGraph>,
    config: SimulationConfig,
}

impl Runner {
    pub fn new(book: SkillBook, graph: TriggerGraph, config: SimulationConfig) -> Self {
        Self {
            book: Arc::new(book),
            graph: Arc::new(graph),
            config,
        }
    }

    pub fn book(&self) -> &SkillBook {
        &self.book
    }

    pub fn graph(&self) -> &TriggerGraph {
        &self.graph
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one policy to the horizon on the current thread.
    pub fn run<P>(&self, policy: &mut P) -> Result<Timeline>
    where
        P: RotationPolicy + ?Sized,
    {
        let timeline = Simulation::new(&self.book, &self.graph, self.config.clone())?.run(policy)?;
        debug!(events = timeline.len(), "run finished");
        Ok(timeline)
    }

    /// Runs every named policy in its own simulation on the blocking pool.
    ///
    /// Results come back in input order. The first failing run aborts the
    /// batch with its error.
    pub async fn run_many<P>(&self, policies: Vec<(String, P)>) -> Result<Vec<(String, Timeline)>>
    where
        P: RotationPolicy + Send + 'static,
    {
        info!(runs = policies.len(), horizon = %self.config.horizon, "starting simulation batch");

        let handles: Vec<_> = policies
            .into_iter()
            .map(|(name, mut policy)| {
                let runner = self.clone();
                let handle = tokio::task::spawn_blocking(move || runner.run(&mut policy));
                (name, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let timeline = handle.await.map_err(RuntimeError::WorkerJoin)??;
            info!(policy = %name, events = timeline.len(), hits = timeline.total_hits(), "run complete");
            results.push((name, timeline));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::{Millis, PolicyView, SkillDefinition, SkillId};

    fn runner() -> Runner {
        let mut book = SkillBook::new();
        book.insert(SkillDefinition::damage("jab", 100.0, 1).with_delay(Millis(500)));
        let graph = TriggerGraph::empty(book.len());
        Runner::new(book, graph, SimulationConfig::new().with_horizon(Millis(5_000)))
    }

    #[test]
    fn run_uses_shared_config() {
        let mut spam = |_: Millis, _: &PolicyView<'_>| -> Option<SkillId> { Some(SkillId(0)) };
        let timeline = runner().run(&mut spam).unwrap();
        // Casts at 0, 500, .., 4000 complete before the horizon; the 4500 cast does not.
        assert_eq!(timeline.len(), 9);
    }

    #[tokio::test]
    async fn run_many_keeps_input_order() {
        fn spam(_: Millis, _: &PolicyView<'_>) -> Option<SkillId> {
            Some(SkillId(0))
        }
        fn idle(_: Millis, _: &PolicyView<'_>) -> Option<SkillId> {
            None
        }

        let policies: Vec<(String, fn(Millis, &PolicyView<'_>) -> Option<SkillId>)> =
            vec![("spam".into(), spam), ("idle".into(), idle)];
        let results = runner().run_many(policies).await.unwrap();

        assert_eq!(results[0].0, "spam");
        assert_eq!(results[0].1.len(), 9);
        assert_eq!(results[1].0, "idle");
        assert!(results[1].1.is_empty());
    }
}
