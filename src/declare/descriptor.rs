//! Check descriptor and context types.
//!
//! A [`CheckDescriptor`] is the caller-facing declaration of a single
//! dependency check: a unique name, a display label, the check function
//! itself, whether failure is fatal, and an optional dependency expression
//! referencing other check names. Descriptors are read-only once built;
//! construction goes through [`DescriptorBuilder`].

use std::collections::HashMap;
use std::sync::Arc;

/// Host context threaded through every check function.
///
/// Carries a fact store that checks record into (e.g., a resolved library
/// version) and that later build steps can read back out.
#[derive(Debug, Clone, Default)]
pub struct CheckContext {
    facts: HashMap<String, String>,
}

impl CheckContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact under the given key, replacing any previous value.
    pub fn set_fact(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.facts.insert(key.into(), value.into());
    }

    /// Look up a previously recorded fact.
    pub fn fact(&self, key: &str) -> Option<&str> {
        self.facts.get(key).map(|s| s.as_str())
    }

    /// All recorded facts.
    pub fn facts(&self) -> &HashMap<String, String> {
        &self.facts
    }
}

/// A check function as declared by the caller.
///
/// Takes the host context and the name of the check being evaluated, and
/// returns whether the check passed. The second argument lets one function
/// serve many declarations (e.g., a generic pkg-config probe keyed by name).
pub type CheckFn = Arc<dyn Fn(&mut CheckContext, &str) -> bool + Send + Sync>;

/// A single dependency-check declaration.
///
/// Read-only after construction; the translation layer only borrows it.
#[derive(Clone)]
pub struct CheckDescriptor {
    name: String,
    desc: String,
    func: CheckFn,
    required: bool,
    deps: Option<String>,
}

impl CheckDescriptor {
    /// Start building a descriptor with the three mandatory fields.
    pub fn builder(
        name: impl Into<String>,
        desc: impl Into<String>,
        func: CheckFn,
    ) -> DescriptorBuilder {
        DescriptorBuilder {
            name: name.into(),
            desc: desc.into(),
            func,
            required: false,
            deps: None,
        }
    }

    /// Unique check identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// The declared check function.
    pub fn func(&self) -> &CheckFn {
        &self.func
    }

    /// Whether failure of this check aborts the run.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Dependency expression over other check names, if any.
    pub fn deps(&self) -> Option<&str> {
        self.deps.as_deref()
    }
}

impl std::fmt::Debug for CheckDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("required", &self.required)
            .field("deps", &self.deps)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CheckDescriptor`].
pub struct DescriptorBuilder {
    name: String,
    desc: String,
    func: CheckFn,
    required: bool,
    deps: Option<String>,
}

impl DescriptorBuilder {
    /// Mark the check as mandatory (failure aborts the run).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the dependency expression (e.g., `"zlib and os-linux"`).
    pub fn deps(mut self, deps: impl Into<String>) -> Self {
        self.deps = Some(deps.into());
        self
    }

    /// Finish building the descriptor.
    pub fn build(self) -> CheckDescriptor {
        CheckDescriptor {
            name: self.name,
            desc: self.desc,
            func: self.func,
            required: self.required,
            deps: self.deps,
        }
    }
}
