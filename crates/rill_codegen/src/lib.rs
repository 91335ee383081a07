//! LLVM code generation for the Rill language.
//!
//! This crate translates a parsed Rill AST into an LLVM module and drives
//! the backend's finishing services: JIT execution and AOT emission.
//!
//! # Architecture
//!
//! Translation is a single depth-first walk over the tree:
//!
//! 1. **Scope discipline**: one symbol-table frame per function activation,
//!    entered and left through a scoped combinator
//! 2. **Expression translation**: literals, loads, integer arithmetic,
//!    calls, and stores
//! 3. **Statement translation**: blocks, declarations, and pending returns
//! 4. **Control flow**: conditional chains and while loops built as
//!    basic-block graphs with a shared merge block
//! 5. **Finishing**: JIT execution, or object / assembly / textual-IR
//!    emission through a target machine
//!
//! # Example
//!
//! ```ignore
//! use inkwell::context::Context;
//! use rill_codegen::Compiler;
//!
//! let context = Context::create();
//! let mut compiler = Compiler::new(&context, "main");
//! compiler.compile_program(&program)?;
//! let module = compiler.into_module();
//! ```

mod control;
mod expr;
mod function;
mod stmt;

pub mod aot;
pub mod compiler;
pub mod error;
#[cfg(feature = "jit")]
pub mod jit;
pub mod scope;

pub use aot::*;
pub use compiler::*;
pub use error::*;
pub use function::ENTRY_FUNCTION;
#[cfg(feature = "jit")]
pub use jit::*;
pub use scope::*;
