//! Expression translation.
//!
//! Expressions translate to IR values in left-to-right source order, so
//! side effects of calls and assignments land in the order written.
//! Operands are handled in the 64-bit integer representation regardless of
//! declared type: floating literals exist and can be stored, but arithmetic
//! on them is out of scope and is rejected rather than miscompiled.

use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, IntValue};
use rill_ast::{BinaryOp, Expr};

use crate::compiler::Compiler;
use crate::error::{CodegenError, CodegenResult};

impl<'ctx> Compiler<'ctx> {
    /// Translate an expression, yielding its value.
    ///
    /// `None` means the expression was a call to a `void` function and
    /// produced no value.
    pub(crate) fn compile_expr(
        &mut self,
        expr: &Expr,
    ) -> CodegenResult<Option<BasicValueEnum<'ctx>>> {
        match expr {
            Expr::IntLiteral(value) => Ok(Some(
                self.context.i64_type().const_int(*value as u64, true).into(),
            )),
            Expr::DoubleLiteral(value) => {
                Ok(Some(self.context.f64_type().const_float(*value).into()))
            }
            Expr::Ident(name) => self.compile_ident(name).map(Some),
            Expr::Binary { op, lhs, rhs } => self.compile_binary(*op, lhs, rhs).map(Some),
            Expr::Assign { target, value } => self.compile_assign(target, value).map(Some),
            Expr::Call { callee, args } => self.compile_call(callee, args),
        }
    }

    /// Translate an expression that must produce a value.
    pub(crate) fn compile_operand(&mut self, expr: &Expr) -> CodegenResult<BasicValueEnum<'ctx>> {
        self.compile_expr(expr)?.ok_or_else(|| {
            CodegenError::UnsupportedOperation("void call used as a value".into())
        })
    }

    /// Translate an expression that must produce an integer value.
    pub(crate) fn int_operand(&mut self, expr: &Expr) -> CodegenResult<IntValue<'ctx>> {
        match self.compile_operand(expr)? {
            BasicValueEnum::IntValue(value) => Ok(value),
            other => Err(CodegenError::UnsupportedOperation(format!(
                "expected an integer operand, found a value of type {:?}",
                other.get_type()
            ))),
        }
    }

    fn compile_ident(&mut self, name: &str) -> CodegenResult<BasicValueEnum<'ctx>> {
        let slot = self
            .scopes
            .resolve(name)
            .ok_or_else(|| CodegenError::UndeclaredVariable(name.to_string()))?;
        Ok(self.builder.build_load(self.context.i64_type(), slot, name)?)
    }

    fn compile_binary(
        &mut self,
        op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
    ) -> CodegenResult<BasicValueEnum<'ctx>> {
        let lhs = self.int_operand(lhs)?;
        let rhs = self.int_operand(rhs)?;
        let value = match op {
            BinaryOp::Add => self.builder.build_int_add(lhs, rhs, "add")?,
            BinaryOp::Sub => self.builder.build_int_sub(lhs, rhs, "sub")?,
            BinaryOp::Mul => self.builder.build_int_mul(lhs, rhs, "mul")?,
            BinaryOp::Div => self.builder.build_int_signed_div(lhs, rhs, "div")?,
        };
        Ok(value.into())
    }

    fn compile_assign(
        &mut self,
        target: &str,
        value: &Expr,
    ) -> CodegenResult<BasicValueEnum<'ctx>> {
        let slot = self
            .scopes
            .resolve(target)
            .ok_or_else(|| CodegenError::UndeclaredVariable(target.to_string()))?;
        let value = self.compile_operand(value)?;
        self.builder.build_store(slot, value)?;
        Ok(value)
    }

    fn compile_call(
        &mut self,
        callee: &str,
        args: &[Expr],
    ) -> CodegenResult<Option<BasicValueEnum<'ctx>>> {
        let function = self
            .module
            .get_function(callee)
            .ok_or_else(|| CodegenError::UndefinedFunction(callee.to_string()))?;

        let mut arg_values: Vec<BasicMetadataValueEnum> = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.compile_operand(arg)?.into());
        }

        let site = self.builder.build_call(function, &arg_values, "call")?;
        Ok(site.try_as_basic_value().left())
    }
}
