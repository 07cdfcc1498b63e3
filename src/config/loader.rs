//! Declaration file loading and descriptor resolution.
//!
//! Loading is two steps: parse the YAML file into [`Declarations`], then
//! resolve each entry's probe against the declare catalog to produce runnable
//! [`CheckDescriptor`]s.

use std::fs;
use std::path::Path;

use crate::config::schema::{CheckDecl, Declarations, ProbeDecl};
use crate::declare::{catalog, CheckDescriptor, CheckFn};
use crate::error::{MulticheckError, Result};

/// Load a declaration file from disk.
pub fn load_declarations(path: &Path) -> Result<Declarations> {
    if !path.exists() {
        return Err(MulticheckError::DeclarationsNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let declarations: Declarations =
        serde_yaml::from_str(&contents).map_err(|e| MulticheckError::DeclarationParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        checks = declarations.checks.len(),
        "loaded declaration file"
    );
    Ok(declarations)
}

/// Resolve parsed declarations into check descriptors, preserving order.
pub fn resolve_descriptors(declarations: &Declarations) -> Result<Vec<CheckDescriptor>> {
    declarations.checks.iter().map(resolve_one).collect()
}

/// Load a declaration file and resolve it in one call.
pub fn load_descriptors(path: &Path) -> Result<Vec<CheckDescriptor>> {
    let declarations = load_declarations(path)?;
    resolve_descriptors(&declarations)
}

fn resolve_one(decl: &CheckDecl) -> Result<CheckDescriptor> {
    if decl.name.trim().is_empty() {
        return Err(MulticheckError::DeclarationInvalid {
            message: "check name must not be empty".to_string(),
        });
    }
    if decl.desc.trim().is_empty() {
        return Err(MulticheckError::DeclarationInvalid {
            message: format!("check '{}' has an empty desc", decl.name),
        });
    }

    let func: CheckFn = match &decl.probe {
        ProbeDecl::CommandSucceeds { command } => catalog::command_succeeds(command.clone()),
        ProbeDecl::FileExists { path } => catalog::file_exists(path.clone()),
        ProbeDecl::EnvSet { var } => catalog::env_set(var.clone()),
        ProbeDecl::PkgConfigExists { module } => catalog::pkg_config_exists(module.clone()),
    };

    let mut builder = CheckDescriptor::builder(&decl.name, &decl.desc, func).required(decl.req);
    if let Some(deps) = &decl.deps {
        builder = builder.deps(deps);
    }
    Ok(builder.build())
}
