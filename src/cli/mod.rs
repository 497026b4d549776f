//! CLI layer: argument parsing, the interactive loop and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod repl;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
pub use repl::{Repl, ReplState};
