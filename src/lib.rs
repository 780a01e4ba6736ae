//! Santa - Secret Santa cycle drawing
//!
//! Draws a single gift cycle over all participants that respects a banlist
//! of forbidden giver → receiver pairs, then splits the pairings between two
//! administrators so neither sees their own.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod doctor;
pub mod draw;
pub mod error;
pub mod exchange;
pub mod roster;

// Re-export commonly used types
pub use config::SantaConfig;
pub use doctor::{diagnose, DiagnosticReport};
pub use draw::{partition, AdminPartition, Assignment, Banlist, CycleFinder, GiftCycle};
pub use error::DrawError;
pub use exchange::{Draw, Exchange};
pub use roster::Roster;
