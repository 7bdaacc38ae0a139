//! Traits describing the kernel's external collaborators.
//!
//! The kernel talks to exactly two outside parties:
//! - a [`BuildOracle`], consulted once while skill templates are resolved
//! - a [`RotationPolicy`], consulted every step to decide what to cast next
mod build;
mod policy;

pub use build::{BuildOracle, BuildTable};
pub use policy::{PolicyView, RotationPolicy};
