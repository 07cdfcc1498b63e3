//! Reusable check functions for common probes.
//!
//! Each constructor captures its configuration and returns a [`CheckFn`]
//! matching the two-argument check signature. On success, probes record a
//! fact under the check's name so later build steps can read what was found.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::declare::descriptor::CheckFn;

/// Run a command through the platform shell, discarding output.
fn shell_succeeds(command: &str) -> bool {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run a command through the platform shell and capture trimmed stdout.
fn shell_output(command: &str) -> Option<String> {
    let output = if cfg!(windows) {
        Command::new("cmd").arg("/C").arg(command).output()
    } else {
        Command::new("sh").arg("-c").arg(command).output()
    }
    .ok()?;

    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Check that a shell command exits with status 0.
pub fn command_succeeds(command: impl Into<String>) -> CheckFn {
    let command = command.into();
    Arc::new(move |ctx, name| {
        let passed = shell_succeeds(&command);
        tracing::debug!(check = name, command = %command, passed, "command probe");
        if passed {
            ctx.set_fact(name, "ok");
        }
        passed
    })
}

/// Check that a file or directory exists.
pub fn file_exists(path: impl Into<String>) -> CheckFn {
    let path = path.into();
    Arc::new(move |ctx, name| {
        let passed = Path::new(&path).exists();
        tracing::debug!(check = name, path = %path, passed, "file probe");
        if passed {
            ctx.set_fact(name, path.clone());
        }
        passed
    })
}

/// Check that an environment variable is set and non-empty.
pub fn env_set(var: impl Into<String>) -> CheckFn {
    let var = var.into();
    Arc::new(move |ctx, name| {
        match std::env::var(&var) {
            Ok(value) if !value.is_empty() => {
                tracing::debug!(check = name, var = %var, "env probe passed");
                ctx.set_fact(name, value);
                true
            }
            _ => {
                tracing::debug!(check = name, var = %var, "env probe failed");
                false
            }
        }
    })
}

/// Check that a pkg-config module is installed, recording its version.
pub fn pkg_config_exists(module: impl Into<String>) -> CheckFn {
    let module = module.into();
    Arc::new(move |ctx, name| {
        if !shell_succeeds(&format!("pkg-config --exists {}", module)) {
            tracing::debug!(check = name, module = %module, "pkg-config probe failed");
            return false;
        }
        let version = shell_output(&format!("pkg-config --modversion {}", module))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(check = name, module = %module, %version, "pkg-config probe passed");
        ctx.set_fact(name, version);
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declare::descriptor::CheckContext;

    #[test]
    fn command_succeeds_passes_for_true() {
        let func = command_succeeds(if cfg!(windows) { "cd" } else { "true" });
        let mut ctx = CheckContext::new();
        assert!(func(&mut ctx, "shell"));
        assert_eq!(ctx.fact("shell"), Some("ok"));
    }

    #[test]
    fn command_succeeds_fails_for_false() {
        let func = command_succeeds(if cfg!(windows) { "exit 1" } else { "false" });
        let mut ctx = CheckContext::new();
        assert!(!func(&mut ctx, "shell"));
        assert!(ctx.fact("shell").is_none());
    }

    #[test]
    fn command_succeeds_fails_for_missing_binary() {
        let func = command_succeeds("definitely-not-a-real-binary-7f3a --version");
        let mut ctx = CheckContext::new();
        assert!(!func(&mut ctx, "ghost"));
    }

    #[test]
    fn file_exists_passes_for_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marker");
        std::fs::write(&path, "x").unwrap();

        let func = file_exists(path.to_string_lossy().to_string());
        let mut ctx = CheckContext::new();
        assert!(func(&mut ctx, "marker"));
        assert!(ctx.fact("marker").unwrap().contains("marker"));
    }

    #[test]
    fn file_exists_fails_for_missing_path() {
        let func = file_exists("/nonexistent/path/7f3a");
        let mut ctx = CheckContext::new();
        assert!(!func(&mut ctx, "marker"));
    }

    #[test]
    fn env_set_passes_when_var_present() {
        std::env::set_var("MULTICHECK_CATALOG_TEST_VAR", "yes");
        let func = env_set("MULTICHECK_CATALOG_TEST_VAR");
        let mut ctx = CheckContext::new();
        assert!(func(&mut ctx, "envcheck"));
        assert_eq!(ctx.fact("envcheck"), Some("yes"));
        std::env::remove_var("MULTICHECK_CATALOG_TEST_VAR");
    }

    #[test]
    fn env_set_fails_when_var_absent() {
        let func = env_set("MULTICHECK_CATALOG_TEST_UNSET_VAR");
        let mut ctx = CheckContext::new();
        assert!(!func(&mut ctx, "envcheck"));
    }
}
