//! A runner that captures batches without executing them.
//!
//! Backs the `plan` command and tests: translation runs end to end, but no
//! check function is invoked.

use crate::bridge::invocation::InvocationRecord;
use crate::error::Result;
use crate::runner::MulticheckRunner;

/// Captures every record handed to it, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    records: Vec<InvocationRecord>,
}

impl RecordingRunner {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The records received so far.
    pub fn records(&self) -> &[InvocationRecord] {
        &self.records
    }

    /// Consume the recorder, yielding the captured records.
    pub fn into_records(self) -> Vec<InvocationRecord> {
        self.records
    }
}

impl MulticheckRunner for RecordingRunner {
    fn multicheck(&mut self, records: Vec<InvocationRecord>) -> Result<()> {
        tracing::debug!(count = records.len(), "recording invocation batch");
        self.records.extend(records);
        Ok(())
    }
}
