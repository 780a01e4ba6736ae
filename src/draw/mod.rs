//! Drawing the gift cycle
//!
//! This module handles exclusion rules, the constrained cycle search,
//! and splitting the resulting cycle between two administrators.

pub mod finder;
pub mod partition;
pub mod rules;

pub use finder::{Assignment, CycleFinder, GiftCycle, DEFAULT_MAX_ATTEMPTS};
pub use partition::{partition, AdminPartition};
pub use rules::Banlist;
