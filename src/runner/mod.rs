//! Multicheck runner seam.
//!
//! The bridge hands invocation batches to a [`MulticheckRunner`]; how the
//! batch is scheduled (ordering by `after_tests`, parallelism, cancellation)
//! is entirely the runner's business. Two in-crate runners are provided:
//!
//! - [`RecordingRunner`] - captures the batch without executing anything
//! - [`SerialRunner`] - executes checks one by one in batch order

pub mod recording;
pub mod serial;

pub use recording::RecordingRunner;
pub use serial::{CheckOutcome, SerialRunner};

use crate::bridge::invocation::InvocationRecord;
use crate::error::Result;

/// Consumer of invocation batches.
///
/// Implementations own scheduling: they may honor `after_tests` ordering,
/// run checks in parallel, or ignore both. Check identifiers are expected to
/// be unique within a batch; the bridge does not enforce this.
pub trait MulticheckRunner {
    /// Accept a batch of invocation records.
    fn multicheck(&mut self, records: Vec<InvocationRecord>) -> Result<()>;
}
