//! Dependency-check declarations.
//!
//! This module defines the caller-facing half of the bridge: check
//! descriptors, the context threaded through check functions, and a catalog
//! of reusable probe functions.
//!
//! # Modules
//!
//! - [`descriptor`] - Check descriptor, builder, and host context
//! - [`catalog`] - Reusable check functions (command, file, env, pkg-config)

pub mod catalog;
pub mod descriptor;

pub use descriptor::{CheckContext, CheckDescriptor, CheckFn, DescriptorBuilder};
