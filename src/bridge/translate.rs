//! Descriptor-to-invocation translation.
//!
//! [`translate`] is the single entry point of the bridge: it derives one
//! [`InvocationRecord`] per descriptor, hands the whole batch to the runner
//! in one call, and returns a [`Translation`] carrying the dependency
//! bookkeeping for later build steps.

use crate::bridge::invocation::InvocationRecord;
use crate::declare::CheckDescriptor;
use crate::error::Result;
use crate::runner::MulticheckRunner;

/// Result of a translation, threaded explicitly into subsequent build steps.
///
/// `satisfied_deps` is always a subset of `known_deps`. Neither set is
/// populated yet: translation hands the batch to the runner without getting
/// per-check outcomes back, so both stay empty and
/// [`Translation::is_dependency_satisfied`] reports every dependency as
/// unsatisfied.
// TODO: populate both sets once MulticheckRunner reports per-check outcomes
// back through its return value.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    /// Dependency identifiers that exist.
    pub known_deps: Vec<String>,
    /// Dependency identifiers whose checks succeeded.
    pub satisfied_deps: Vec<String>,
}

impl Translation {
    /// Whether the given dependency identifier has been satisfied.
    ///
    /// Currently returns `false` for every identifier; see the type-level
    /// note on the unpopulated sets.
    pub fn is_dependency_satisfied(&self, _identifier: &str) -> bool {
        false
    }
}

/// Derive one invocation record per descriptor, preserving input order.
pub fn build_invocations(checks: &[CheckDescriptor]) -> Result<Vec<InvocationRecord>> {
    checks.iter().map(InvocationRecord::from_descriptor).collect()
}

/// Translate descriptors into invocation records and hand them to the runner.
pub fn translate(
    checks: &[CheckDescriptor],
    runner: &mut dyn MulticheckRunner,
) -> Result<Translation> {
    let records = build_invocations(checks)?;
    tracing::debug!(count = records.len(), "handing invocation batch to runner");
    runner.multicheck(records)?;

    Ok(Translation::default())
}
