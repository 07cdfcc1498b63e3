//! Declaration file schema.
//!
//! This module contains the struct definitions that map to the YAML
//! declaration file format. A declaration file lists checks by name with a
//! probe each; the loader resolves probes against the declare catalog.

use serde::{Deserialize, Serialize};

/// Root structure of a checks.yml declaration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    /// Project name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Ordered check declarations
    #[serde(default)]
    pub checks: Vec<CheckDecl>,
}

/// One declared check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDecl {
    /// Unique check identifier
    pub name: String,

    /// Human-readable label
    pub desc: String,

    /// How to probe for this dependency
    pub probe: ProbeDecl,

    /// Whether failure aborts the run
    #[serde(default, skip_serializing_if = "is_false")]
    pub req: bool,

    /// Dependency expression over other check names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deps: Option<String>,
}

/// Probe type for a declared check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProbeDecl {
    /// Check if a command succeeds (exit code 0)
    CommandSucceeds {
        /// Command to run
        command: String,
    },

    /// Check if a file or directory exists
    FileExists {
        /// Path to check
        path: String,
    },

    /// Check if an environment variable is set and non-empty
    EnvSet {
        /// Variable name
        var: String,
    },

    /// Check if a pkg-config module is installed
    PkgConfigExists {
        /// Module name to query
        module: String,
    },
}

fn is_false(b: &bool) -> bool {
    !*b
}
