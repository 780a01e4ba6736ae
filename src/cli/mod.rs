//! CLI input and output
//!
//! Interactive prompts for the seed and administrator choice, and
//! coloured terminal display of the selected administrator's list.

pub mod display;
pub mod prompt;

pub use display::{print_assignments, render_diagnostic_report};
pub use prompt::{ask_admin, ask_seed, parse_admin_choice, parse_seed, SeedChoice};
