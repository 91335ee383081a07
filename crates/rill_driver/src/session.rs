//! Compilation options.

/// Options controlling AOT emission.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Target triple (defaults to native).
    pub target: Option<String>,

    /// Optimization level (0-3) handed to the backend.
    pub opt_level: u32,

    /// Also write textual LLVM IR next to the emitted file.
    pub emit_ir: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            target: None,
            opt_level: 0,
            emit_ir: false,
        }
    }
}

impl CompileOptions {
    /// Set the optimization level.
    pub fn with_opt_level(mut self, level: u32) -> Self {
        self.opt_level = level.min(3);
        self
    }

    /// Set the target triple.
    pub fn with_target(mut self, triple: impl Into<String>) -> Self {
        self.target = Some(triple.into());
        self
    }

    /// Also emit textual LLVM IR.
    pub fn with_emit_ir(mut self) -> Self {
        self.emit_ir = true;
        self
    }
}
