//! Invocation records handed to the multicheck runner.
//!
//! An [`InvocationRecord`] is the runner-facing form of a
//! [`CheckDescriptor`]: same identity and mandatory flag, a derived display
//! message, the check function curried down to the runner's one-argument
//! shape, and the filtered ordering hints extracted from the dependency
//! expression.

use serde::Serialize;

use crate::declare::{CheckContext, CheckDescriptor};
use crate::error::Result;
use crate::expr::symbols_list;

/// Prefix prepended to a descriptor's label to form the runner message.
pub const MSG_PREFIX: &str = "Checking for ";

/// Symbols with this prefix denote OS-level capability checks and are
/// excluded from the after-test ordering list.
pub const OS_SYMBOL_PREFIX: &str = "os-";

/// The runner-facing check callable: context in, pass/fail out.
pub type InvocationFn = Box<dyn Fn(&mut CheckContext) -> bool + Send>;

/// One entry in a multicheck invocation batch.
pub struct InvocationRecord {
    /// Check identifier, copied from the descriptor name.
    pub id: String,
    /// Display message shown while the check runs.
    pub msg: String,
    /// One-argument check callable.
    pub func: InvocationFn,
    /// Whether failure aborts the whole run.
    pub mandatory: bool,
    /// Checks that should complete before this one, if the descriptor
    /// declared a dependency expression.
    pub after_tests: Option<Vec<String>>,
}

impl InvocationRecord {
    /// Derive a record from a single descriptor.
    ///
    /// Declared check functions take `(ctx, name)`; the runner calls
    /// `func(ctx)`. The descriptor's name is curried into the wrapper so the
    /// same declared function can back many checks.
    pub fn from_descriptor(check: &CheckDescriptor) -> Result<Self> {
        let name = check.name().to_string();
        let func = check.func().clone();
        let curried: InvocationFn = Box::new(move |ctx: &mut CheckContext| func(ctx, &name));

        let after_tests = match check.deps() {
            Some(expression) => {
                let symbols = symbols_list(expression)?;
                Some(
                    symbols
                        .into_iter()
                        .filter(|symbol| !symbol.starts_with(OS_SYMBOL_PREFIX))
                        .collect(),
                )
            }
            None => None,
        };

        Ok(Self {
            id: check.name().to_string(),
            msg: format!("{}{}", MSG_PREFIX, check.desc()),
            func: curried,
            mandatory: check.required(),
            after_tests,
        })
    }

    /// Serializable view of the record, without the callable.
    pub fn summary(&self) -> InvocationSummary {
        InvocationSummary {
            id: self.id.clone(),
            msg: self.msg.clone(),
            mandatory: self.mandatory,
            after_tests: self.after_tests.clone(),
        }
    }
}

impl std::fmt::Debug for InvocationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationRecord")
            .field("id", &self.id)
            .field("msg", &self.msg)
            .field("mandatory", &self.mandatory)
            .field("after_tests", &self.after_tests)
            .finish_non_exhaustive()
    }
}

/// Callable-free projection of an [`InvocationRecord`] for display output.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationSummary {
    pub id: String,
    pub msg: String,
    pub mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_tests: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::declare::CheckFn;

    fn always_pass() -> CheckFn {
        Arc::new(|_, _| true)
    }

    #[test]
    fn id_and_mandatory_copied_from_descriptor() {
        let check = CheckDescriptor::builder("zlib", "zlib compression", always_pass())
            .required(true)
            .build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert_eq!(record.id, "zlib");
        assert!(record.mandatory);
    }

    #[test]
    fn msg_carries_prefix_and_label() {
        let check = CheckDescriptor::builder("foo", "Foo lib", always_pass()).build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert_eq!(record.msg, "Checking for Foo lib");
    }

    #[test]
    fn no_deps_means_no_after_tests() {
        let check = CheckDescriptor::builder("foo", "Foo lib", always_pass()).build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert!(record.after_tests.is_none());
    }

    #[test]
    fn os_symbols_filtered_from_after_tests() {
        let check = CheckDescriptor::builder("foo", "Foo lib", always_pass())
            .deps("bar and os-linux")
            .build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert_eq!(record.after_tests, Some(vec!["bar".to_string()]));
    }

    #[test]
    fn after_tests_preserve_extractor_order() {
        let check = CheckDescriptor::builder("vo-gpu", "GPU video output", always_pass())
            .deps("egl and os-win32 and x11 and drm")
            .build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert_eq!(
            record.after_tests,
            Some(vec!["egl".to_string(), "x11".to_string(), "drm".to_string()])
        );
    }

    #[test]
    fn deps_of_only_os_symbols_yield_empty_after_tests() {
        let check = CheckDescriptor::builder("poll", "poll()", always_pass())
            .deps("os-posix or os-win32")
            .build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        assert_eq!(record.after_tests, Some(Vec::new()));
    }

    #[test]
    fn malformed_deps_expression_propagates_error() {
        let check = CheckDescriptor::builder("foo", "Foo lib", always_pass())
            .deps("bar and (baz")
            .build();
        assert!(InvocationRecord::from_descriptor(&check).is_err());
    }

    #[test]
    fn curried_func_binds_descriptor_name() {
        let func: CheckFn = Arc::new(|ctx, name| {
            ctx.set_fact("invoked-as", name);
            true
        });
        let check = CheckDescriptor::builder("libplacebo", "libplacebo", func).build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();

        let mut ctx = CheckContext::new();
        assert!((record.func)(&mut ctx));
        assert_eq!(ctx.fact("invoked-as"), Some("libplacebo"));
    }

    #[test]
    fn summary_round_trips_to_json() {
        let check = CheckDescriptor::builder("foo", "Foo lib", always_pass())
            .deps("bar")
            .build();
        let record = InvocationRecord::from_descriptor(&check).unwrap();
        let json = serde_json::to_value(record.summary()).unwrap();
        assert_eq!(json["id"], "foo");
        assert_eq!(json["mandatory"], false);
        assert_eq!(json["after_tests"][0], "bar");
    }
}
