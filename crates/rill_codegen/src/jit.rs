//! JIT execution of compiled programs.

use inkwell::context::Context;
use inkwell::execution_engine::ExecutionEngine;
use inkwell::targets::{InitializationConfig, Target};
use inkwell::OptimizationLevel;
use rill_ast::Block;

use crate::compiler::Compiler;
use crate::error::{CodegenError, CodegenResult};
use crate::function::ENTRY_FUNCTION;

/// A JIT compiler for Rill programs.
pub struct JitCompiler<'ctx> {
    context: &'ctx Context,
    execution_engine: Option<ExecutionEngine<'ctx>>,
}

impl<'ctx> JitCompiler<'ctx> {
    /// Create a new JIT compiler.
    pub fn new(context: &'ctx Context) -> Self {
        Self {
            context,
            execution_engine: None,
        }
    }

    /// Compile a top-level block and prepare it for execution.
    pub fn compile(&mut self, program: &Block, name: &str) -> CodegenResult<()> {
        Target::initialize_native(&InitializationConfig::default())
            .map_err(CodegenError::Llvm)?;

        let mut compiler = Compiler::new(self.context, name);
        compiler.compile_program(program)?;
        let module = compiler.into_module();

        let engine = module
            .create_jit_execution_engine(OptimizationLevel::None)
            .map_err(|e| CodegenError::Llvm(e.to_string()))?;
        self.execution_engine = Some(engine);
        Ok(())
    }

    /// Run the entry function and return the program's result.
    ///
    /// # Safety
    ///
    /// Runs arbitrary generated code. External functions declared by the
    /// program must resolve to in-process symbols whose actual signatures
    /// match their declarations.
    pub unsafe fn run_main(&self) -> CodegenResult<i64> {
        let engine = self
            .execution_engine
            .as_ref()
            .ok_or_else(|| CodegenError::Llvm("no program compiled".into()))?;

        let main = engine
            .get_function_value(ENTRY_FUNCTION)
            .map_err(|e| CodegenError::Llvm(e.to_string()))?;

        let result = unsafe { engine.run_function(main, &[]) };
        Ok(result.as_int(true) as i64)
    }

    /// Check whether a program has been compiled and can be run.
    pub fn is_ready(&self) -> bool {
        self.execution_engine.is_some()
    }
}
