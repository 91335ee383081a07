//! The translation context shared by every translator.

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::BasicTypeEnum;
use inkwell::values::FunctionValue;
use rill_ast::TypeExpr;

use crate::error::{CodegenError, CodegenResult};
use crate::scope::ScopeStack;

/// The Rill code generator.
///
/// Owns the module under construction, the instruction builder (whose
/// insertion cursor is the "current block" of the translation), and the
/// scope stack. A single `Compiler` drives one compilation; it is never
/// shared across translations.
pub struct Compiler<'ctx> {
    pub(crate) context: &'ctx Context,
    pub(crate) module: Module<'ctx>,
    pub(crate) builder: Builder<'ctx>,
    pub(crate) scopes: ScopeStack<'ctx>,
}

impl<'ctx> Compiler<'ctx> {
    /// Create a compiler producing a module with the given name.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();

        Self {
            context,
            module,
            builder,
            scopes: ScopeStack::new(),
        }
    }

    /// Get a reference to the module under construction.
    pub fn module(&self) -> &Module<'ctx> {
        &self.module
    }

    /// Consume the compiler and return the generated module.
    pub fn into_module(self) -> Module<'ctx> {
        self.module
    }

    /// Run `f` inside a fresh scope frame.
    ///
    /// The frame is popped on every exit path, including early `Err`
    /// returns out of `f`.
    pub(crate) fn with_frame<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> CodegenResult<T>,
    ) -> CodegenResult<T> {
        self.scopes.push();
        let result = f(self);
        self.scopes.pop();
        result
    }

    /// The function owning the block the cursor currently points into.
    pub(crate) fn current_function(&self) -> CodegenResult<FunctionValue<'ctx>> {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_parent())
            .ok_or_else(|| {
                CodegenError::MalformedControlFlow(
                    "insertion cursor is not inside a function".into(),
                )
            })
    }

    /// Map a declared type name onto the backend type used for storage
    /// slots and parameters.
    ///
    /// `void` has no storage representation and is rejected here; it is
    /// only meaningful in return position (see [`Self::return_type`]).
    pub(crate) fn basic_type(&self, ty: &TypeExpr) -> CodegenResult<BasicTypeEnum<'ctx>> {
        match ty.name.as_str() {
            "int" => Ok(self.context.i64_type().into()),
            "double" => Ok(self.context.f64_type().into()),
            name => Err(CodegenError::UnsupportedType(name.to_string())),
        }
    }

    /// Map a declared return type. `None` means `void`.
    pub(crate) fn return_type(
        &self,
        ty: &TypeExpr,
    ) -> CodegenResult<Option<BasicTypeEnum<'ctx>>> {
        if ty.name == "void" {
            return Ok(None);
        }
        self.basic_type(ty).map(Some)
    }
}
