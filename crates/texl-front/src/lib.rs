//! TEXL front end.
//!
//! Walks a caller-supplied expression tree, validates it against a
//! [`TypeEnv`], and lowers it into a linear [`texl_ir::Module`] with one
//! designated output. Construct one [`TypeEnv`] per compilation unit and
//! pass it to [`lower`]; nothing outlives the call.

mod ast;
mod env;
mod lower;

pub use ast::Expr;
pub use env::{TypeEnv, DEFAULT_DTYPES};

/// Lowers an expression tree into an IR module.
///
/// The whole tree is type-checked before any instruction is emitted, so a
/// failed compilation returns an error and leaves no partially
/// materialized inputs behind.
pub fn lower(expr: &Expr, env: &mut TypeEnv) -> Result<texl_ir::Module, TypeError> {
    lower::lower_expr(expr, env)
}

/// Static validation failures raised while checking or lowering.
///
/// All variants are deterministic functions of the expression tree and the
/// environment contents; identical inputs always fail identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A type references a dtype outside the registered set.
    #[error("unknown dtype '{0}'")]
    UnknownDtype(String),

    /// A variable reference names a symbol with no binding.
    #[error("symbol '{0}' is not declared")]
    UndeclaredSymbol(String),

    /// Binary operation operands have different element kinds.
    #[error("dtype mismatch for {op}: {lhs} vs {rhs}")]
    DtypeMismatch { op: String, lhs: String, rhs: String },

    /// Binary operation operands have incompatible non-scalar shapes.
    #[error("shape mismatch for {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: String,
        lhs: Vec<u64>,
        rhs: Vec<u64>,
    },
}
