//! multicheck - Declarative dependency-check bridge.
//!
//! multicheck converts ordered dependency-check declarations into the
//! invocation format a parallel check runner expects, hands the whole batch
//! over in one call, and returns an explicit [`bridge::Translation`] for
//! later build steps.
//!
//! # Modules
//!
//! - [`bridge`] - Descriptor-to-invocation translation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Declaration file loading, parsing, and resolution
//! - [`declare`] - Check descriptors and the probe catalog
//! - [`error`] - Error types and result aliases
//! - [`expr`] - Dependency-expression symbol extraction
//! - [`runner`] - The multicheck runner seam and in-crate runners
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use multicheck::bridge::translate;
//! use multicheck::declare::CheckDescriptor;
//! use multicheck::runner::RecordingRunner;
//!
//! let checks = vec![
//!     CheckDescriptor::builder("foo", "Foo lib", Arc::new(|_, _| true))
//!         .deps("bar and os-linux")
//!         .build(),
//! ];
//!
//! let mut runner = RecordingRunner::new();
//! translate(&checks, &mut runner).unwrap();
//!
//! let record = &runner.records()[0];
//! assert_eq!(record.msg, "Checking for Foo lib");
//! assert_eq!(record.after_tests, Some(vec!["bar".to_string()]));
//! ```

pub mod bridge;
pub mod cli;
pub mod config;
pub mod declare;
pub mod error;
pub mod expr;
pub mod runner;

pub use error::{MulticheckError, Result};
