//! Lowering pass: `Expr` tree → `texl_ir::Module`.

use texl_ir::{Literal, Module, TensorType, ValueId};

use crate::ast::Expr;
use crate::env::TypeEnv;
use crate::TypeError;

/// Per-session lowering context.
struct LowerCtx<'a> {
    env: &'a mut TypeEnv,
    module: Module,
}

/// Type-checks `expr` against `env`, then emits the corresponding module.
///
/// Checking runs over the whole tree before any instruction is emitted, so
/// a failed program produces no instructions at all, not even `Input`s for
/// operands that were themselves well-typed.
pub(crate) fn lower_expr(expr: &Expr, env: &mut TypeEnv) -> Result<Module, TypeError> {
    let mut ctx = LowerCtx {
        env,
        module: Module::new(),
    };
    ctx.check(expr)?;
    ctx.emit(expr)?;
    log::debug!(
        "lowered expression into {} instructions, output {:?}",
        ctx.module.len(),
        ctx.module.output(),
    );
    Ok(ctx.module)
}

impl LowerCtx<'_> {
    /// Computes the type of `expr` without emitting instructions.
    fn check(&self, expr: &Expr) -> Result<TensorType, TypeError> {
        match expr {
            Expr::Variable(name) => self.env.resolve_symbol(name).cloned(),
            Expr::Literal(lit) => self.literal_type(*lit),
            Expr::Binary { op, left, right } => {
                let lhs = self.check(left)?;
                let rhs = self.check(right)?;
                self.env.validate_binop(op, &lhs, &rhs)
            }
        }
    }

    /// Literals are scalar constants: the dtype follows the literal kind
    /// and must still belong to the registry.
    fn literal_type(&self, lit: Literal) -> Result<TensorType, TypeError> {
        self.env.ensure_known_dtype(lit.dtype())?;
        Ok(TensorType::scalar(lit.dtype()))
    }

    /// Emits instructions for `expr`, left subtree before right, and
    /// returns the produced value with its type.
    fn emit(&mut self, expr: &Expr) -> Result<(ValueId, TensorType), TypeError> {
        match expr {
            Expr::Variable(name) => {
                let ty = self.env.resolve_symbol(name)?.clone();
                let id = self.env.materialize_symbol(&mut self.module, name, &ty);
                Ok((id, ty))
            }
            Expr::Literal(lit) => {
                let ty = self.literal_type(*lit)?;
                let id = self.module.append_const(*lit, ty.clone());
                Ok((id, ty))
            }
            Expr::Binary { op, left, right } => {
                let (lhs_id, lhs_ty) = self.emit(left)?;
                let (rhs_id, rhs_ty) = self.emit(right)?;
                let result_ty = self.env.validate_binop(op, &lhs_ty, &rhs_ty)?;
                let id = self
                    .module
                    .append_binary_op(op, result_ty.clone(), lhs_id, rhs_id);
                Ok((id, result_ty))
            }
        }
    }
}
