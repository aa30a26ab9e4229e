//! CLI subcommands.

pub mod defaults;
pub mod run;
