//! Function compilation: signatures, parameter binding, bodies, and the
//! program entry function.

use inkwell::module::Linkage;
use inkwell::types::{BasicMetadataTypeEnum, BasicType, BasicTypeEnum, FunctionType};
use inkwell::values::{BasicValueEnum, FunctionValue};
use rill_ast::{Block, ExternDecl, FunctionDecl, Param, TypeExpr};

use crate::compiler::Compiler;
use crate::error::{CodegenError, CodegenResult};

/// Name of the generated entry function.
pub const ENTRY_FUNCTION: &str = "main";

impl<'ctx> Compiler<'ctx> {
    /// Create the program entry function and translate the top-level block
    /// into it.
    ///
    /// The entry behaves like any function body: it gets its own scope
    /// frame, a top-level `return` becomes the program's result, and a
    /// program that never returns yields zero. The finished module is
    /// verified before it is handed on.
    pub fn compile_program(&mut self, program: &Block) -> CodegenResult<FunctionValue<'ctx>> {
        let i64_type = self.context.i64_type();
        let fn_type = i64_type.fn_type(&[], false);
        let function = self
            .module
            .add_function(ENTRY_FUNCTION, fn_type, Some(Linkage::External));
        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        self.with_frame(|this| {
            this.compile_block(program)?;
            this.emit_return(Some(i64_type.into()))
        })?;

        self.module
            .verify()
            .map_err(|e| CodegenError::Llvm(e.to_string()))?;
        Ok(function)
    }

    /// Register an external function signature in the module. No body, no
    /// scope frame.
    pub(crate) fn declare_extern(
        &mut self,
        decl: &ExternDecl,
    ) -> CodegenResult<FunctionValue<'ctx>> {
        let fn_type = self.function_type(&decl.ret_ty, &decl.params)?;
        Ok(self
            .module
            .add_function(&decl.name, fn_type, Some(Linkage::External)))
    }

    /// Compile a full function declaration.
    ///
    /// Parameters are bound by position: each gets a named storage slot in
    /// the function's fresh frame, with the incoming argument stored into
    /// it. The insertion cursor is restored to wherever it was before this
    /// function began, so sibling declarations resume in their own block.
    /// This holds when body translation fails, too.
    pub(crate) fn compile_function(
        &mut self,
        decl: &FunctionDecl,
    ) -> CodegenResult<FunctionValue<'ctx>> {
        let fn_type = self.function_type(&decl.ret_ty, &decl.params)?;
        let ret_ty = self.return_type(&decl.ret_ty)?;
        let function = self
            .module
            .add_function(&decl.name, fn_type, Some(Linkage::Internal));
        let entry = self.context.append_basic_block(function, "entry");

        let previous = self.builder.get_insert_block();
        self.builder.position_at_end(entry);

        let body = self.with_frame(|this| {
            for (param, value) in decl.params.iter().zip(function.get_param_iter()) {
                value.set_name(&param.name);
                let ty = this.basic_type(&param.ty)?;
                let slot = this.builder.build_alloca(ty, &param.name)?;
                this.scopes.declare(param.name.clone(), slot);
                this.builder.build_store(slot, value)?;
            }
            this.compile_block(&decl.body)?;
            this.emit_return(ret_ty)
        });

        if let Some(block) = previous {
            self.builder.position_at_end(block);
        }
        body.map(|_| function)
    }

    /// Build a function type from declared parameter and return types.
    fn function_type(
        &self,
        ret_ty: &TypeExpr,
        params: &[Param],
    ) -> CodegenResult<FunctionType<'ctx>> {
        let param_types = params
            .iter()
            .map(|param| self.basic_type(&param.ty).map(Into::into))
            .collect::<CodegenResult<Vec<BasicMetadataTypeEnum>>>()?;

        Ok(match self.return_type(ret_ty)? {
            Some(ty) => ty.fn_type(&param_types, false),
            None => self.context.void_type().fn_type(&param_types, false),
        })
    }

    /// Emit the function's single return instruction.
    ///
    /// Returns the frame's pending return value when a `return` statement
    /// executed, and a zero of the declared return type otherwise, so the
    /// block always ends in exactly one well-formed terminator.
    fn emit_return(&mut self, ret_ty: Option<BasicTypeEnum<'ctx>>) -> CodegenResult<()> {
        match ret_ty {
            None => {
                self.builder.build_return(None)?;
            }
            Some(ty) => match self.scopes.return_value() {
                Some(value) => {
                    self.builder.build_return(Some(&value))?;
                }
                None => {
                    let zero = zero_value(ty);
                    self.builder.build_return(Some(&zero))?;
                }
            },
        }
        Ok(())
    }
}

/// The zero value of a backend type.
fn zero_value(ty: BasicTypeEnum<'_>) -> BasicValueEnum<'_> {
    match ty {
        BasicTypeEnum::IntType(t) => t.const_zero().into(),
        BasicTypeEnum::FloatType(t) => t.const_zero().into(),
        BasicTypeEnum::PointerType(t) => t.const_null().into(),
        BasicTypeEnum::StructType(t) => t.const_zero().into(),
        BasicTypeEnum::ArrayType(t) => t.const_zero().into(),
        BasicTypeEnum::VectorType(t) => t.const_zero().into(),
        BasicTypeEnum::ScalableVectorType(t) => t.const_zero().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell::context::Context;

    #[test]
    fn test_empty_program_compiles_to_entry_returning_zero() {
        let context = Context::create();
        let mut compiler = Compiler::new(&context, "entry_test");

        let function = compiler.compile_program(&Block::default()).unwrap();
        assert_eq!(function.get_name().to_str().unwrap(), ENTRY_FUNCTION);
        assert_eq!(function.count_basic_blocks(), 1);
    }

    #[test]
    fn test_extern_registers_signature_without_body() {
        let context = Context::create();
        let mut compiler = Compiler::new(&context, "extern_test");

        let decl = ExternDecl::new("int", "putnum", vec![Param::new("int", "value")]);
        let function = compiler.declare_extern(&decl).unwrap();

        assert_eq!(function.count_basic_blocks(), 0);
        assert!(compiler.module().get_function("putnum").is_some());
    }
}
