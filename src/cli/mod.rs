//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - Argument definitions (clap derive)
//! - [`commands`] - Subcommand implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::{dispatch, CommandResult};
