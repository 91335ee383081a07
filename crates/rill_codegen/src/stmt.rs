//! Statement translation.

use rill_ast::{Block, Stmt, VarDecl};

use crate::compiler::Compiler;
use crate::error::CodegenResult;

impl<'ctx> Compiler<'ctx> {
    /// Translate every statement of a block, in order, into the current
    /// basic block.
    pub(crate) fn compile_block(&mut self, block: &Block) -> CodegenResult<()> {
        for stmt in &block.stmts {
            self.compile_stmt(stmt)?;
        }
        Ok(())
    }

    fn compile_stmt(&mut self, stmt: &Stmt) -> CodegenResult<()> {
        match stmt {
            Stmt::Expr(expr) => {
                self.compile_expr(expr)?;
                Ok(())
            }
            // A return records the pending value; the single terminator is
            // emitted by the function epilogue, and statements after the
            // return keep translating.
            Stmt::Return(expr) => {
                let value = self.compile_operand(expr)?;
                self.scopes.set_return_value(value);
                Ok(())
            }
            Stmt::Var(decl) => self.compile_var_decl(decl),
            Stmt::Extern(decl) => {
                self.declare_extern(decl)?;
                Ok(())
            }
            Stmt::Function(decl) => {
                self.compile_function(decl)?;
                Ok(())
            }
            Stmt::If(chain) => self.compile_conditional(chain),
            Stmt::While { condition, body } => self.compile_while(condition, body),
        }
    }

    /// Allocate a named storage slot sized for the declared type, bind it
    /// in the active frame, and store the initializer if one is present.
    fn compile_var_decl(&mut self, decl: &VarDecl) -> CodegenResult<()> {
        let ty = self.basic_type(&decl.ty)?;
        let slot = self.builder.build_alloca(ty, &decl.name)?;
        self.scopes.declare(decl.name.clone(), slot);

        if let Some(init) = &decl.init {
            let value = self.compile_operand(init)?;
            self.builder.build_store(slot, value)?;
        }
        Ok(())
    }
}
