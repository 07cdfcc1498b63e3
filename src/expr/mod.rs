//! Dependency-expression parsing.

pub mod symbols;

pub use symbols::symbols_list;
