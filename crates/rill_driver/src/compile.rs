//! The top-level compilation driver.

use std::path::Path;

use inkwell::context::Context;
use inkwell::OptimizationLevel;
use rill_ast::Block;
use rill_codegen::AotCompiler;
#[cfg(feature = "jit")]
use rill_codegen::JitCompiler;

use crate::error::CompileResult;
use crate::session::CompileOptions;

/// The compilation driver.
///
/// Owns nothing long-lived: each entry point creates a fresh backend
/// context, translates the program into it, and hands the module to the
/// requested finishing service.
pub struct Driver {
    verbose: bool,
}

impl Driver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a verbose driver.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Compile a top-level block and execute it, returning the program's
    /// result.
    #[cfg(feature = "jit")]
    pub fn run(&self, program: &Block, name: &str) -> CompileResult<i64> {
        if self.verbose {
            eprintln!("[driver] Generating code...");
        }
        let context = Context::create();
        let mut jit = JitCompiler::new(&context);
        jit.compile(program, name)?;

        if self.verbose {
            eprintln!("[driver] Running code...");
        }
        let result = unsafe { jit.run_main()? };
        if self.verbose {
            eprintln!("[driver] Program returned {result}");
        }
        Ok(result)
    }

    /// Compile a top-level block to textual LLVM IR.
    pub fn emit_ir(&self, program: &Block, name: &str) -> CompileResult<String> {
        if self.verbose {
            eprintln!("[driver] Generating code...");
        }
        let context = Context::create();
        let aot = AotCompiler::new(&context)?;
        Ok(aot.compile_to_ir_string(program, name)?)
    }

    /// Compile a top-level block to textual LLVM IR and write it to
    /// `output`.
    pub fn emit_ir_to_file(
        &self,
        program: &Block,
        name: &str,
        output: &Path,
    ) -> CompileResult<()> {
        let ir = self.emit_ir(program, name)?;
        std::fs::write(output, ir)?;
        if self.verbose {
            eprintln!("[driver] Wrote IR to: {}", output.display());
        }
        Ok(())
    }

    /// Compile a top-level block to an object file.
    pub fn emit_object(
        &self,
        program: &Block,
        name: &str,
        output: &Path,
        options: &CompileOptions,
    ) -> CompileResult<()> {
        if self.verbose {
            eprintln!("[driver] Generating object file...");
        }
        let context = Context::create();
        let mut aot = self.configure_aot(&context, options)?;
        aot.compile_to_object(program, name, output)?;

        if options.emit_ir {
            aot.write_ir_to_file(program, name, &output.with_extension("ll"))?;
        }
        if self.verbose {
            eprintln!("[driver] Wrote object file to: {}", output.display());
        }
        Ok(())
    }

    /// Compile a top-level block to target assembly.
    pub fn emit_assembly(
        &self,
        program: &Block,
        name: &str,
        output: &Path,
        options: &CompileOptions,
    ) -> CompileResult<()> {
        if self.verbose {
            eprintln!("[driver] Generating assembly...");
        }
        let context = Context::create();
        let mut aot = self.configure_aot(&context, options)?;
        aot.compile_to_assembly(program, name, output)?;

        if self.verbose {
            eprintln!("[driver] Wrote assembly to: {}", output.display());
        }
        Ok(())
    }

    fn configure_aot<'ctx>(
        &self,
        context: &'ctx Context,
        options: &CompileOptions,
    ) -> CompileResult<AotCompiler<'ctx>> {
        let mut aot = AotCompiler::new(context)?;
        if let Some(ref target) = options.target {
            aot.set_target(target);
        }
        aot.set_opt_level(match options.opt_level {
            0 => OptimizationLevel::None,
            1 => OptimizationLevel::Less,
            2 => OptimizationLevel::Default,
            _ => OptimizationLevel::Aggressive,
        });
        Ok(aot)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_ast::{Expr, Stmt};

    #[test]
    fn test_emit_ir_contains_entry_function() {
        let program = Block::new(vec![Stmt::Return(Expr::IntLiteral(7))]);
        let ir = Driver::new().emit_ir(&program, "ir_test").unwrap();

        assert!(ir.contains("define"));
        assert!(ir.contains("main"));
    }

    #[cfg(feature = "jit")]
    #[test]
    fn test_empty_program_returns_zero() {
        let result = Driver::new().run(&Block::default(), "empty_test").unwrap();
        assert_eq!(result, 0);
    }
}
