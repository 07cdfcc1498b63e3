//! The `run` command: execute declared checks serially.

use console::style;

use crate::bridge::translate;
use crate::cli::args::RunArgs;
use crate::cli::commands::CommandResult;
use crate::config::load_descriptors;
use crate::error::{MulticheckError, Result};
use crate::runner::SerialRunner;

/// Translate the declarations, execute every check in order, and report
/// pass/fail per check. Exits nonzero if a mandatory check failed.
pub fn execute(args: &RunArgs) -> Result<CommandResult> {
    let descriptors = load_descriptors(&args.file)?;
    let mut runner = SerialRunner::new();
    let outcome = translate(&descriptors, &mut runner);

    for check in runner.outcomes() {
        let status = if check.passed {
            style("ok").green()
        } else if check.mandatory {
            style("FAILED").red().bold()
        } else {
            style("missing").yellow()
        };
        println!("{:<40} {}", check.msg, status);
    }

    if args.facts {
        let mut facts: Vec<_> = runner.context().facts().iter().collect();
        facts.sort();
        for (key, value) in facts {
            println!("  {} = {}", style(key).dim(), value);
        }
    }

    match outcome {
        Ok(_translation) => Ok(CommandResult::success()),
        Err(MulticheckError::MandatoryCheckFailed { check }) => {
            eprintln!(
                "{} mandatory check '{}' failed",
                style("error:").red().bold(),
                check
            );
            Ok(CommandResult::failure(1))
        }
        Err(other) => Err(other),
    }
}
