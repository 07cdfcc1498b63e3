//! The `symbols` command: debug helper for dependency expressions.

use crate::cli::args::SymbolsArgs;
use crate::cli::commands::CommandResult;
use crate::error::Result;
use crate::expr::symbols_list;

/// Print the symbols a dependency expression references, one per line.
pub fn execute(args: &SymbolsArgs) -> Result<CommandResult> {
    for symbol in symbols_list(&args.expression)? {
        println!("{}", symbol);
    }
    Ok(CommandResult::success())
}
