//! The expression tree accepted by the front end.

use texl_ir::Literal;

/// A node in a caller-supplied expression tree.
///
/// The lowering pass only reads the tree; ownership stays with the caller.
/// The set of node kinds is closed, so the lowerer's exhaustive matches
/// are checked by the compiler when a variant is added.
#[derive(Clone, Debug)]
pub enum Expr {
    /// Reference to a named symbol declared in the type environment.
    Variable(String),
    /// A literal scalar constant.
    Literal(Literal),
    /// A named binary operation over two subtrees.
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Shorthand for a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Shorthand for a binary operation node.
    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
