//! End-to-end: every validation failure is deterministic and leaves no
//! partially built module behind.

use texl_front::{lower, Expr, TypeEnv, TypeError};
use texl_ir::TensorType;

/// `Add(x, z)` with mismatched dtypes fails with the exact mismatch and
/// emits nothing: lowering type-checks the whole tree before the first
/// instruction, so neither input is materialized.
#[test]
fn dtype_mismatch_rejected() {
    let mut env = TypeEnv::new();
    env.add_symbol("x", TensorType::new("f32", [2, 2])).unwrap();
    env.add_symbol("z", TensorType::new("i32", [2, 2])).unwrap();

    let expr = Expr::binary("Add", Expr::var("x"), Expr::var("z"));
    assert_eq!(
        lower(&expr, &mut env).unwrap_err(),
        TypeError::DtypeMismatch {
            op: "Add".into(),
            lhs: "f32".into(),
            rhs: "i32".into(),
        }
    );
}

#[test]
fn shape_mismatch_rejected() {
    let mut env = TypeEnv::new();
    env.add_symbol("a", TensorType::new("f32", [2, 2])).unwrap();
    env.add_symbol("b", TensorType::new("f32", [3, 3])).unwrap();

    let expr = Expr::binary("Sub", Expr::var("a"), Expr::var("b"));
    assert_eq!(
        lower(&expr, &mut env).unwrap_err(),
        TypeError::ShapeMismatch {
            op: "Sub".into(),
            lhs: vec![2, 2],
            rhs: vec![3, 3],
        }
    );
}

#[test]
fn undeclared_symbol_rejected() {
    let mut env = TypeEnv::new();
    env.add_symbol("x", TensorType::new("f32", [2])).unwrap();

    let expr = Expr::binary("Add", Expr::var("x"), Expr::var("missing"));
    assert_eq!(
        lower(&expr, &mut env).unwrap_err(),
        TypeError::UndeclaredSymbol("missing".into())
    );
}

#[test]
fn unknown_dtype_rejected_at_declaration() {
    let mut env = TypeEnv::with_dtypes(["f32"]);
    assert_eq!(
        env.add_symbol("x", TensorType::new("f16", [2])),
        Err(TypeError::UnknownDtype("f16".into()))
    );
}

/// Identical inputs always produce identical failures.
#[test]
fn failures_are_deterministic() {
    let build = || {
        let mut env = TypeEnv::new();
        env.add_symbol("x", TensorType::new("f32", [2, 2])).unwrap();
        env.add_symbol("z", TensorType::new("i32", [2, 2])).unwrap();
        let expr = Expr::binary("Add", Expr::var("x"), Expr::var("z"));
        lower(&expr, &mut env).unwrap_err()
    };
    assert_eq!(build(), build());
}
