//! Declared type names.

/// A declared type, as written in the source (`int`, `double`, `void`).
///
/// The AST records only the name. Mapping a name onto a backend type, and
/// rejecting names that have none, happens during code generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    pub name: String,
}

impl TypeExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for TypeExpr {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
