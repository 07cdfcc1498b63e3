//! The dependency declaration bridge.
//!
//! Converts ordered check declarations into the invocation format a
//! multicheck runner expects, and hands them over in a single batch.
//!
//! # Modules
//!
//! - [`invocation`] - Runner-facing invocation records and the currying adapter
//! - [`translate`] - The batch translation entry point and its result object

pub mod invocation;
pub mod translate;

pub use invocation::{
    InvocationFn, InvocationRecord, InvocationSummary, MSG_PREFIX, OS_SYMBOL_PREFIX,
};
pub use translate::{build_invocations, translate, Translation};
