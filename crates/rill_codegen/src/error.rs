//! Error types for code generation.

use thiserror::Error;

/// A code generation error.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("undeclared variable: {0}")]
    UndeclaredVariable(String),

    #[error("undefined function: {0}")]
    UndefinedFunction(String),

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("malformed control flow: {0}")]
    MalformedControlFlow(String),

    #[error("builder error: {0}")]
    Builder(#[from] inkwell::builder::BuilderError),

    #[error("LLVM error: {0}")]
    Llvm(String),
}

/// Result type for code generation.
pub type CodegenResult<T> = Result<T, CodegenError>;
