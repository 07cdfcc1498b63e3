//! CLI command implementations.
//!
//! Each subcommand lives in its own module and exposes an `execute` function
//! returning a [`CommandResult`]; [`dispatch`] routes parsed CLI arguments to
//! the right one.

pub mod plan;
pub mod run;
pub mod symbols;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Route a parsed CLI invocation to its command implementation.
pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
    match &cli.command {
        Commands::Plan(args) => plan::execute(args),
        Commands::Run(args) => run::execute(args),
        Commands::Symbols(args) => symbols::execute(args),
    }
}
