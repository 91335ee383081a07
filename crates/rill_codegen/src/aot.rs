//! Ahead-of-time compilation: textual IR, assembly, and object files.

use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::targets::{
    CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetMachine, TargetTriple,
};
use inkwell::OptimizationLevel;
use rill_ast::Block;
use std::path::Path;

use crate::compiler::Compiler;
use crate::error::{CodegenError, CodegenResult};

/// AOT compiler lowering Rill programs through a target machine.
pub struct AotCompiler<'ctx> {
    context: &'ctx Context,
    target_triple: TargetTriple,
    target_machine: Option<TargetMachine>,
    opt_level: OptimizationLevel,
}

impl<'ctx> AotCompiler<'ctx> {
    /// Create a new AOT compiler targeting the host platform.
    pub fn new(context: &'ctx Context) -> CodegenResult<Self> {
        Target::initialize_all(&InitializationConfig::default());

        Ok(Self {
            context,
            target_triple: TargetMachine::get_default_triple(),
            target_machine: None,
            opt_level: OptimizationLevel::None,
        })
    }

    /// Select a target triple other than the host's.
    pub fn set_target(&mut self, triple: &str) {
        self.target_triple = TargetTriple::create(triple);
        self.target_machine = None;
    }

    /// Set the optimization level handed to the target machine. This core
    /// runs no passes of its own.
    pub fn set_opt_level(&mut self, level: OptimizationLevel) {
        self.opt_level = level;
        self.target_machine = None;
    }

    /// Get or create the target machine.
    fn target_machine(&mut self) -> CodegenResult<&TargetMachine> {
        if self.target_machine.is_none() {
            let target = Target::from_triple(&self.target_triple)
                .map_err(|e| CodegenError::Llvm(e.to_string()))?;

            let machine = target
                .create_target_machine(
                    &self.target_triple,
                    "generic",
                    "",
                    self.opt_level,
                    RelocMode::Default,
                    CodeModel::Default,
                )
                .ok_or_else(|| CodegenError::Llvm("failed to create target machine".into()))?;

            self.target_machine = Some(machine);
        }

        Ok(self.target_machine.as_ref().unwrap())
    }

    /// Translate a top-level block into an LLVM module.
    pub fn compile_to_module(&self, program: &Block, name: &str) -> CodegenResult<Module<'ctx>> {
        let mut compiler = Compiler::new(self.context, name);
        compiler.compile_program(program)?;
        Ok(compiler.into_module())
    }

    /// Render the compiled program as textual LLVM IR.
    pub fn compile_to_ir_string(&self, program: &Block, name: &str) -> CodegenResult<String> {
        let module = self.compile_to_module(program, name)?;
        Ok(module.print_to_string().to_string())
    }

    /// Write textual LLVM IR to a file.
    pub fn write_ir_to_file(
        &self,
        program: &Block,
        name: &str,
        output: &Path,
    ) -> CodegenResult<()> {
        let module = self.compile_to_module(program, name)?;
        module
            .print_to_file(output)
            .map_err(|e| CodegenError::Llvm(e.to_string()))?;
        Ok(())
    }

    /// Lower the compiled program to an object file for the selected target.
    pub fn compile_to_object(
        &mut self,
        program: &Block,
        name: &str,
        output: &Path,
    ) -> CodegenResult<()> {
        self.write_machine_code(program, name, output, FileType::Object)
    }

    /// Lower the compiled program to target assembly.
    pub fn compile_to_assembly(
        &mut self,
        program: &Block,
        name: &str,
        output: &Path,
    ) -> CodegenResult<()> {
        self.write_machine_code(program, name, output, FileType::Assembly)
    }

    fn write_machine_code(
        &mut self,
        program: &Block,
        name: &str,
        output: &Path,
        file_type: FileType,
    ) -> CodegenResult<()> {
        let module = self.compile_to_module(program, name)?;
        module.set_triple(&self.target_triple);

        let machine = self.target_machine()?;
        machine
            .write_to_file(&module, file_type, output)
            .map_err(|e| CodegenError::Llvm(e.to_string()))?;
        Ok(())
    }
}
