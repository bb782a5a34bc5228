//! Subcommands of the `gameplan` binary

pub mod generate;
pub mod show;
pub mod stats;
