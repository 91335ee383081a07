//! Structured control flow: conditional chains and while loops.
//!
//! Conditions follow the integer truth convention: zero is false, any
//! non-zero value is true. Every construct reconverges in a merge block,
//! where translation of subsequent statements resumes.

use inkwell::IntPredicate;
use rill_ast::{Block, ConditionalChain, Expr};

use crate::compiler::Compiler;
use crate::error::{CodegenError, CodegenResult};

impl<'ctx> Compiler<'ctx> {
    /// Emit an `if` / `else if` / `else` chain.
    ///
    /// One body block per arm, a shared merge block, and a condition block
    /// per arm after the first (the first condition evaluates in the
    /// current block). Arm `i`'s false edge leads to arm `i + 1`'s
    /// condition block, then to the else block, then to the merge block.
    pub(crate) fn compile_conditional(&mut self, chain: &ConditionalChain) -> CodegenResult<()> {
        if chain.arms.is_empty() {
            return Err(CodegenError::MalformedControlFlow(
                "conditional chain with no arms".into(),
            ));
        }

        let function = self.current_function()?;
        let else_block = chain
            .else_body
            .as_ref()
            .map(|_| self.context.append_basic_block(function, "if.else"));
        let merge_block = self.context.append_basic_block(function, "if.end");

        for (i, arm) in chain.arms.iter().enumerate() {
            let body_block = self.context.append_basic_block(function, "if.then");
            let next_block = if i + 1 < chain.arms.len() {
                self.context.append_basic_block(function, "if.cond")
            } else if let Some(else_block) = else_block {
                else_block
            } else {
                merge_block
            };

            let condition = self.int_operand(&arm.condition)?;
            let flag = self.builder.build_int_compare(
                IntPredicate::NE,
                condition,
                condition.get_type().const_zero(),
                "if.flag",
            )?;
            self.builder
                .build_conditional_branch(flag, body_block, next_block)?;

            self.builder.position_at_end(body_block);
            self.compile_block(&arm.body)?;
            self.builder.build_unconditional_branch(merge_block)?;

            if i + 1 < chain.arms.len() {
                self.builder.position_at_end(next_block);
            }
        }

        if let (Some(else_block), Some(else_body)) = (else_block, &chain.else_body) {
            self.builder.position_at_end(else_block);
            self.compile_block(else_body)?;
            self.builder.build_unconditional_branch(merge_block)?;
        }

        self.builder.position_at_end(merge_block);
        Ok(())
    }

    /// Emit a `while` loop: condition block, body block, merge block.
    ///
    /// Control branches into the condition block, exits to the merge block
    /// when the condition is zero, and the body's branch back to the
    /// condition block is the loop's only back-edge.
    pub(crate) fn compile_while(&mut self, condition: &Expr, body: &Block) -> CodegenResult<()> {
        let function = self.current_function()?;
        let cond_block = self.context.append_basic_block(function, "while.cond");
        let body_block = self.context.append_basic_block(function, "while.body");
        let merge_block = self.context.append_basic_block(function, "while.end");

        self.builder.build_unconditional_branch(cond_block)?;
        self.builder.position_at_end(cond_block);

        let condition = self.int_operand(condition)?;
        let flag = self.builder.build_int_compare(
            IntPredicate::NE,
            condition,
            condition.get_type().const_zero(),
            "while.flag",
        )?;
        self.builder
            .build_conditional_branch(flag, body_block, merge_block)?;

        self.builder.position_at_end(body_block);
        self.compile_block(body)?;
        self.builder.build_unconditional_branch(cond_block)?;

        self.builder.position_at_end(merge_block);
        Ok(())
    }
}
