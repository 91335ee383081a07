//! Abstract Syntax Tree definitions for the Rill language.
//!
//! This crate provides the data structures consumed by the code generator.
//! Trees are produced by an external parser and are immutable once built;
//! the constructors here exist so that drivers and tests can assemble
//! programs directly.

mod decl;
mod expr;
mod stmt;
mod types;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;
