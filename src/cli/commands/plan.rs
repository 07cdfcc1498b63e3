//! The `plan` command: translate a declaration file and show the batch.

use crate::bridge::translate;
use crate::cli::args::{OutputFormat, PlanArgs};
use crate::cli::commands::CommandResult;
use crate::config::load_descriptors;
use crate::error::Result;
use crate::runner::RecordingRunner;

/// Translate the declarations and print the resulting invocation batch
/// without executing any check.
pub fn execute(args: &PlanArgs) -> Result<CommandResult> {
    let descriptors = load_descriptors(&args.file)?;
    let mut runner = RecordingRunner::new();
    translate(&descriptors, &mut runner)?;

    match args.format {
        OutputFormat::Json => {
            let summaries: Vec<_> = runner.records().iter().map(|r| r.summary()).collect();
            let rendered =
                serde_json::to_string_pretty(&summaries).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
        }
        OutputFormat::Human => {
            for record in runner.records() {
                let marker = if record.mandatory { "required" } else { "optional" };
                print!("{:<20} {:<9} {}", record.id, marker, record.msg);
                if let Some(after) = &record.after_tests {
                    if !after.is_empty() {
                        print!("  (after: {})", after.join(", "));
                    }
                }
                println!();
            }
            println!("{} check(s)", runner.records().len());
        }
    }

    Ok(CommandResult::success())
}
