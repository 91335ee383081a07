//! Compilation driver for the Rill language.
//!
//! This crate orchestrates the pipeline from a parsed AST to a running
//! program or an emitted artifact:
//!
//! ```text
//! AST → Codegen (LLVM IR) → JIT execution | object / assembly / IR file
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rill_ast::{Block, Expr, Stmt};
//! use rill_driver::Driver;
//!
//! let program = Block::new(vec![Stmt::Return(Expr::IntLiteral(42))]);
//! let result = Driver::new().run(&program, "answer")?;
//! assert_eq!(result, 42);
//! ```

pub mod compile;
pub mod error;
pub mod session;

pub use compile::*;
pub use error::*;
pub use session::*;
