//! Data-driven skill content and loaders.
//!
//! This crate reads the inputs of a rotation run from RON/TOML files:
//! - Skill catalogs (RON list of templates)
//! - Character builds (RON map of slot → tier → value)
//! - Simulation configuration (TOML)
//!
//! All loaders deserialize rotation-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod bundled;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BuildLoader, ConfigLoader, ContentFactory, SkillCatalog, SkillLoader};
