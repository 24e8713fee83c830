//! Command implementations for the CLI.

mod stats;
mod temps;

pub use stats::cmd_stats;
pub use temps::cmd_temps;
