//! Expression AST nodes.

/// An expression in Rill.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// An integer literal (`42`).
    IntLiteral(i64),

    /// A floating-point literal (`3.5`).
    DoubleLiteral(f64),

    /// A reference to a declared variable.
    Ident(String),

    /// A binary operation (`a + b`).
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// An assignment to a declared variable (`x = e`). Assignments are
    /// expressions; their value is the stored value.
    Assign { target: String, value: Box<Expr> },

    /// A call to a declared function.
    Call { callee: String, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            target: target.into(),
            value: Box::new(value),
        }
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args,
        }
    }
}

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}
