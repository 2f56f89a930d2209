//! board-cli library
//!
//! Command definitions and the command runner, exported for the `board`
//! binary and its tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod position;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use position::parse_position;
pub use runner::run;
