//! CLI commands
//!
//! Command implementations for the `crowdin-progress` binary.

mod style;
mod update;

pub use update::{run_update, UpdateArgs};
