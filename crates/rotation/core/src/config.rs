use crate::time::Millis;

/// Tunable parameters of a single simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// End of the simulated window. Nothing is resolved at or after it.
    pub horizon: Millis,

    /// Upper bound on the gap between two driver steps. The rotation policy
    /// is consulted at least this often while the caster is free.
    pub min_step: Millis,

    /// Baseline buff-duration extension (0.2 = +20%), added to the
    /// `BuffRemain` stat of the live snapshot.
    pub remain_bonus: f64,

    /// Baseline cooldown reduction (0.1 = -10%), added to the
    /// `CooldownReduce` stat of the live snapshot.
    pub reduce_bonus: f64,
}

impl SimulationConfig {
    pub const DEFAULT_HORIZON: Millis = Millis(60_000);
    pub const DEFAULT_MIN_STEP: Millis = Millis(10);

    pub fn new() -> Self {
        Self {
            horizon: Self::DEFAULT_HORIZON,
            min_step: Self::DEFAULT_MIN_STEP,
            remain_bonus: 0.0,
            reduce_bonus: 0.0,
        }
    }

    pub fn with_horizon(mut self, horizon: Millis) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_min_step(mut self, min_step: Millis) -> Self {
        self.min_step = min_step;
        self
    }

    pub fn with_bonuses(mut self, remain_bonus: f64, reduce_bonus: f64) -> Self {
        self.remain_bonus = remain_bonus;
        self.reduce_bonus = reduce_bonus;
        self
    }

    /// Step granularity, never below one millisecond.
    pub(crate) fn step(&self) -> Millis {
        if self.min_step.is_zero() {
            Millis(1)
        } else {
            self.min_step
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
