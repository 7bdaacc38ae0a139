//! Stat modifiers granted by active skills.
//!
//! A [`Modifier`] is a fixed-size vector of magnitudes indexed by the closed
//! [`StatTag`] set. Modifiers only ever combine by per-tag addition, which
//! makes folding the buffs of every active skill order independent.

pub mod modifier;
pub mod tag;

pub use modifier::Modifier;
pub use tag::StatTag;
