//! A runner that executes checks one by one.
//!
//! Checks run in batch order; `after_tests` hints are not consulted, which is
//! harmless here because a serial pass in declaration order already sees
//! every earlier check complete first. Every check in the batch runs even
//! after a failure, so the outcome list is always complete; the run as a
//! whole fails if any mandatory check failed.

use crate::bridge::invocation::InvocationRecord;
use crate::declare::CheckContext;
use crate::error::{MulticheckError, Result};
use crate::runner::MulticheckRunner;

/// Result of executing one invocation record.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Check identifier.
    pub id: String,
    /// Display message from the record.
    pub msg: String,
    /// Whether the check function returned pass.
    pub passed: bool,
    /// Whether the record was mandatory.
    pub mandatory: bool,
}

/// Executes invocation batches synchronously, in arrival order.
#[derive(Debug, Default)]
pub struct SerialRunner {
    ctx: CheckContext,
    outcomes: Vec<CheckOutcome>,
}

impl SerialRunner {
    /// Create a runner with an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner around an existing context (pre-seeded facts).
    pub fn with_context(ctx: CheckContext) -> Self {
        Self {
            ctx,
            outcomes: Vec::new(),
        }
    }

    /// Outcomes of every check executed so far, in execution order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// The context checks have been recording facts into.
    pub fn context(&self) -> &CheckContext {
        &self.ctx
    }
}

impl MulticheckRunner for SerialRunner {
    fn multicheck(&mut self, records: Vec<InvocationRecord>) -> Result<()> {
        let mut failed_mandatory: Option<String> = None;

        for record in records {
            let passed = (record.func)(&mut self.ctx);
            tracing::debug!(check = %record.id, passed, mandatory = record.mandatory, "check finished");

            if !passed && record.mandatory && failed_mandatory.is_none() {
                failed_mandatory = Some(record.id.clone());
            }

            self.outcomes.push(CheckOutcome {
                id: record.id,
                msg: record.msg,
                passed,
                mandatory: record.mandatory,
            });
        }

        match failed_mandatory {
            Some(check) => Err(MulticheckError::MandatoryCheckFailed { check }),
            None => Ok(()),
        }
    }
}
