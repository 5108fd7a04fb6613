//! Fleet battle resolution - deterministic, round-based, seed-reproducible
//!
//! The engine is a closed computation: two sides of aggregate rosters go in
//! with a non-zero seed, up to six rounds of shield restoration, volleys and
//! casualty compaction run, and the surviving composition comes back out.
//! Identical inputs and seed always produce identical outcomes, which is
//! what makes Monte-Carlo dataset generation over it reproducible.

pub mod constants;
pub mod engine;
pub mod party;
pub mod rng;
pub mod units;

// Re-exports for convenient access
pub use constants::*;
pub use engine::simulate;
pub use party::{max_hull, max_shield, CombatUnit, Party, Roster, TechLevels};
pub use units::{UnitAttrs, UnitKind, NUM_KINDS, NUM_SHIP_KINDS, UNIT_ATTRS};
