//! Function-scoped symbol tables.

use indexmap::IndexMap;
use inkwell::values::{BasicValueEnum, PointerValue};

/// One function activation's symbol table plus its pending return slot.
///
/// Nested block statements (conditional and loop bodies) do not get a frame
/// of their own: every variable declared anywhere in a function body lands
/// in the function's single frame, and redeclaring a name silently replaces
/// the earlier slot.
#[derive(Debug, Default)]
pub struct ScopeFrame<'ctx> {
    locals: IndexMap<String, PointerValue<'ctx>>,
    return_value: Option<BasicValueEnum<'ctx>>,
}

/// A LIFO stack of [`ScopeFrame`]s, one per function currently being
/// translated.
///
/// Name resolution looks at the active frame only; there is no lexical
/// nesting across frames.
#[derive(Debug, Default)]
pub struct ScopeStack<'ctx> {
    frames: Vec<ScopeFrame<'ctx>>,
}

impl<'ctx> ScopeStack<'ctx> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Enter a new, empty frame.
    pub fn push(&mut self) {
        self.frames.push(ScopeFrame::default());
    }

    /// Leave the active frame, discarding its locals and pending return.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// The number of frames currently on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bind `name` to a storage slot in the active frame, replacing any
    /// earlier binding of the same name. No effect outside a frame.
    pub fn declare(&mut self, name: impl Into<String>, slot: PointerValue<'ctx>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.locals.insert(name.into(), slot);
        }
    }

    /// Look up `name` in the active frame.
    pub fn resolve(&self, name: &str) -> Option<PointerValue<'ctx>> {
        self.frames.last().and_then(|frame| frame.locals.get(name).copied())
    }

    /// Record the active frame's pending return value.
    pub fn set_return_value(&mut self, value: BasicValueEnum<'ctx>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.return_value = Some(value);
        }
    }

    /// The active frame's pending return value, if a `return` statement has
    /// been translated in it.
    pub fn return_value(&self) -> Option<BasicValueEnum<'ctx>> {
        self.frames.last().and_then(|frame| frame.return_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell::context::Context;
    use inkwell::module::Module;

    // The returned slots live in the module; it must stay alive alongside
    // them.
    fn slots(context: &Context, count: usize) -> (Module<'_>, Vec<PointerValue<'_>>) {
        let module = context.create_module("scope_test");
        let builder = context.create_builder();
        let fn_type = context.void_type().fn_type(&[], false);
        let function = module.add_function("slots", fn_type, None);
        let entry = context.append_basic_block(function, "entry");
        builder.position_at_end(entry);
        let slots = (0..count)
            .map(|i| {
                builder
                    .build_alloca(context.i64_type(), &format!("slot{i}"))
                    .unwrap()
            })
            .collect();
        (module, slots)
    }

    #[test]
    fn test_declare_and_resolve() {
        let context = Context::create();
        let (_module, slots) = slots(&context, 2);
        let mut scopes = ScopeStack::new();

        scopes.push();
        scopes.declare("x", slots[0]);
        scopes.declare("y", slots[1]);

        assert_eq!(scopes.resolve("x"), Some(slots[0]));
        assert_eq!(scopes.resolve("y"), Some(slots[1]));
        assert_eq!(scopes.resolve("z"), None);
    }

    #[test]
    fn test_redeclaration_replaces_slot() {
        let context = Context::create();
        let (_module, slots) = slots(&context, 2);
        let mut scopes = ScopeStack::new();

        scopes.push();
        scopes.declare("x", slots[0]);
        scopes.declare("x", slots[1]);

        assert_eq!(scopes.resolve("x"), Some(slots[1]));
    }

    #[test]
    fn test_resolve_searches_active_frame_only() {
        let context = Context::create();
        let (_module, slots) = slots(&context, 1);
        let mut scopes = ScopeStack::new();

        scopes.push();
        scopes.declare("x", slots[0]);
        scopes.push();

        assert_eq!(scopes.resolve("x"), None);

        scopes.pop();
        assert_eq!(scopes.resolve("x"), Some(slots[0]));
    }

    #[test]
    fn test_pop_discards_frame() {
        let context = Context::create();
        let (_module, slots) = slots(&context, 1);
        let mut scopes = ScopeStack::new();

        scopes.push();
        scopes.declare("x", slots[0]);
        scopes.pop();

        assert_eq!(scopes.depth(), 0);
        assert_eq!(scopes.resolve("x"), None);
    }

    #[test]
    fn test_return_slot_is_per_frame() {
        let context = Context::create();
        let value = context.i64_type().const_int(7, true).into();
        let mut scopes = ScopeStack::new();

        scopes.push();
        scopes.set_return_value(value);
        scopes.push();

        assert_eq!(scopes.return_value(), None);

        scopes.pop();
        assert_eq!(scopes.return_value(), Some(value));
    }
}
