//! Runtime orchestration for the rotation simulation kernel.
//!
//! This crate wires content loading, trigger graph construction and policy
//! selection into runs of [`rotation_core::Simulation`]. Definitions and the
//! graph are loaded once and shared read-only; every run owns its roster, so
//! independent policies can be evaluated in parallel on tokio's blocking
//! pool.
//!
//! Modules are organized by responsibility:
//! - [`config`] reads runner settings from the environment
//! - [`runner`] executes one or many runs over shared definitions
//! - [`summary`] reduces a timeline to per-skill counts
//! - [`report`] persists finished runs as JSON
//! - [`demo`] wires the bundled skill kit into a graph and policies
//! - [`logging`] installs the tracing subscriber used by binaries
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod summary;

pub use config::{ConfigOverrides, RunnerConfig};
pub use error::{Result, RuntimeError};
pub use report::{PolicyReport, Report};
pub use runner::Runner;
pub use summary::{RunSummary, SkillSummary};
