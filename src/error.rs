//! Draw errors
//!
//! Input problems that stop a draw, plus the soft "no cycle" outcome once
//! it has been turned into an error for reporting.

use thiserror::Error;

/// Errors surfaced while setting up or running a draw
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer than two administrators are configured
    #[error("need at least 2 admins, found {found}")]
    InsufficientAdmins {
        /// Number of administrators configured
        found: usize,
    },

    /// The administrator choice was not a number in `1..=count`
    #[error("invalid admin selection '{input}': expected a number from 1 to {count}")]
    InvalidAdminSelection {
        /// What the user typed
        input: String,
        /// Number of administrators on offer
        count: usize,
    },

    /// The selected person is not one of the administrators
    #[error("no assignments found for {name}")]
    UnknownAdmin {
        /// The selected name
        name: String,
    },

    /// The search exhausted its attempt budget
    #[error("could not find a valid assignment after {attempts} attempts")]
    NoCycleFound {
        /// Attempt budget that was used up
        attempts: u32,
    },
}

impl DrawError {
    /// Whether the run can end normally after reporting this error
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::NoCycleFound { .. } | Self::UnknownAdmin { .. })
    }
}
