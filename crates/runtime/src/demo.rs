//! Wiring of the bundled demo kit.
//!
//! ```text
//! meteor    --chain-->  aftershock
//! totem     --tick 1.5s--> totem strike
//! totem     --tick 3s-->   fury (+1 stack)
//! slash     --chain-->  gate(war cry active) -> repeat(echo, 2, 150ms)
//! overload  --chain-->  branch(time warp active ? aftershock : echo)
//! overload  requires    fury stacks >= 3
//! ```

use policy_tree::builder::{cast, cast_buff, cast_when, priority};
use policy_tree::{Condition, PolicyTree, PriorityPolicy};
use rotation_core::{Millis, PolicyView, Predicate, RotationPolicy, SkillBook, SkillId, TriggerGraph};

use crate::config::RunnerConfig;
use crate::{Result, Runner, RuntimeError};

fn skill(book: &SkillBook, name: &str) -> Result<SkillId> {
    book.find(name).ok_or_else(|| RuntimeError::UnknownSkill {
        name: name.to_string(),
    })
}

/// Bundled catalog resolved against the configured (or bundled) build.
pub fn book(config: &RunnerConfig) -> Result<SkillBook> {
    let build = match &config.build_path {
        Some(path) => rotation_content::BuildLoader::load(path)?,
        None => rotation_content::bundled::build()?,
    };
    Ok(rotation_content::bundled::book_for(&build)?)
}

pub fn graph(book: &SkillBook) -> Result<TriggerGraph> {
    let id = |name: &str| skill(book, name);
    let mut builder = TriggerGraph::builder(book);

    builder
        .chain(id("meteor")?, id("aftershock")?)
        .tick(id("totem")?, id("totem strike")?, Millis(1_500))
        .tick(id("totem")?, id("fury")?, Millis(3_000))
        .constraint(id("overload")?, Predicate::StackAtLeast(id("fury")?, 3));

    let echoes = builder.repeat_every(id("echo")?, 2, Millis(150));
    let window = builder.gate(Predicate::is_active(id("war cry")?), echoes);
    builder.chain(id("slash")?, window);

    let follow_up = builder.branch(
        Predicate::is_active(id("time warp")?),
        id("aftershock")?,
        id("echo")?,
    );
    builder.chain(id("overload")?, follow_up);

    Ok(builder.build()?)
}

/// Buff-aware tree: keep buffs up, spend bursts inside the war cry window,
/// fill with slash.
pub fn tree_policy(book: &SkillBook) -> Result<PolicyTree> {
    let id = |name: &str| skill(book, name);
    let war_cry = id("war cry")?;

    Ok(PolicyTree::new(priority(vec![
        cast_buff(id("time warp")?),
        cast_buff(war_cry),
        cast(id("totem")?),
        cast_buff(id("fury")?),
        cast(id("overload")?),
        cast_when(Condition::IsActive(war_cry), id("meteor")?),
        cast(id("slash")?),
    ])))
}

/// Naive list that fires everything on cooldown.
pub fn priority_policy(book: &SkillBook) -> Result<PriorityPolicy> {
    let order = [
        "war cry", "totem", "fury", "overload", "meteor", "time warp", "slash",
    ]
    .into_iter()
    .map(|name| skill(book, name))
    .collect::<Result<Vec<_>>>()?;
    Ok(PriorityPolicy::new(order))
}

/// Either demo policy, so both can share one batch.
pub enum DemoPolicy {
    Tree(PolicyTree),
    Priority(PriorityPolicy),
}

impl RotationPolicy for DemoPolicy {
    fn next_action(&mut self, now: Millis, view: &PolicyView<'_>) -> Option<SkillId> {
        match self {
            Self::Tree(tree) => tree.next_action(now, view),
            Self::Priority(list) => list.next_action(now, view),
        }
    }
}

/// Both demo policies, named.
pub fn policies(book: &SkillBook) -> Result<Vec<(String, DemoPolicy)>> {
    Ok(vec![
        ("tree".to_string(), DemoPolicy::Tree(tree_policy(book)?)),
        ("priority".to_string(), DemoPolicy::Priority(priority_policy(book)?)),
    ])
}

/// Runner over the demo kit with the configured build and settings.
pub fn runner(config: &RunnerConfig) -> Result<Runner> {
    let book = book(config)?;
    let graph = graph(&book)?;
    Ok(Runner::new(book, graph, config.simulation_config()?))
}
