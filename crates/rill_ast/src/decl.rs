//! Declaration AST nodes.

use crate::{Block, Expr, TypeExpr};

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub ty: TypeExpr,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<TypeExpr>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A variable declaration with an optional initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub ty: TypeExpr,
    pub name: String,
    pub init: Option<Expr>,
}

impl VarDecl {
    pub fn new(ty: impl Into<TypeExpr>, name: impl Into<String>, init: Option<Expr>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            init,
        }
    }
}

/// An external function signature (no body).
#[derive(Clone, Debug, PartialEq)]
pub struct ExternDecl {
    pub ret_ty: TypeExpr,
    pub name: String,
    pub params: Vec<Param>,
}

impl ExternDecl {
    pub fn new(ret_ty: impl Into<TypeExpr>, name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            ret_ty: ret_ty.into(),
            name: name.into(),
            params,
        }
    }
}

/// A full function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub ret_ty: TypeExpr,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
}

impl FunctionDecl {
    pub fn new(
        ret_ty: impl Into<TypeExpr>,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Block,
    ) -> Self {
        Self {
            ret_ty: ret_ty.into(),
            name: name.into(),
            params,
            body,
        }
    }
}
