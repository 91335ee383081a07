//! Error types for the compilation driver.

use thiserror::Error;

/// Errors that can occur while driving a compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("code generation error: {0}")]
    Codegen(#[from] rill_codegen::CodegenError),
}

/// Result type for driver operations.
pub type CompileResult<T> = Result<T, CompileError>;
