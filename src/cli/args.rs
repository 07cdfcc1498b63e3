//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// multicheck - Declarative dependency-check bridge.
#[derive(Debug, Parser)]
#[command(name = "multicheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the invocation batch a declaration file translates to
    Plan(PlanArgs),

    /// Execute declared checks serially and report outcomes
    Run(RunArgs),

    /// Show the symbols referenced by a dependency expression
    Symbols(SymbolsArgs),
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Declaration file to translate
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Declaration file to run
    pub file: PathBuf,

    /// Print facts recorded by checks after the run
    #[arg(long)]
    pub facts: bool,
}

/// Arguments for the `symbols` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SymbolsArgs {
    /// Dependency expression (e.g., "zlib and os-linux")
    pub expression: String,
}

/// Output format for machine-consumable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    Human,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_parses_file_and_format() {
        let cli = Cli::try_parse_from(["multicheck", "plan", "checks.yml", "--format", "json"])
            .unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.file, PathBuf::from("checks.yml"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn run_defaults_facts_off() {
        let cli = Cli::try_parse_from(["multicheck", "run", "checks.yml"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert!(!args.facts),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn symbols_takes_expression() {
        let cli = Cli::try_parse_from(["multicheck", "symbols", "a and b"]).unwrap();
        match cli.command {
            Commands::Symbols(args) => assert_eq!(args.expression, "a and b"),
            _ => panic!("expected symbols"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli =
            Cli::try_parse_from(["multicheck", "run", "checks.yml", "--debug", "--no-color"])
                .unwrap();
        assert!(cli.debug);
        assert!(cli.no_color);
    }
}
