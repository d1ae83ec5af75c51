//! Integration tests: full check-and-lower pipeline over caller-built
//! expression trees.

use texl_front::{lower, Expr, TypeEnv, TypeError};
use texl_ir::{InstKind, TensorType, ValueId};

#[test]
fn deep_tree_shares_materialized_inputs() {
    // ((w + x) * (x + w)) + w : w and x appear on both sides of the tree
    // but are declared once each.
    let mut env = TypeEnv::new();
    env.add_symbol("w", TensorType::new("f32", [8])).unwrap();
    env.add_symbol("x", TensorType::new("f32", [8])).unwrap();

    let expr = Expr::binary(
        "Add",
        Expr::binary(
            "Mul",
            Expr::binary("Add", Expr::var("w"), Expr::var("x")),
            Expr::binary("Add", Expr::var("x"), Expr::var("w")),
        ),
        Expr::var("w"),
    );

    let module = lower(&expr, &mut env).unwrap();
    let input_names: Vec<_> = module
        .instructions()
        .iter()
        .filter_map(|i| match &i.kind {
            InstKind::Input { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    // Left-first ordering: w before x; each exactly once.
    assert_eq!(input_names, ["w", "x"]);
    assert_eq!(module.len(), 6); // 2 inputs + 4 binary ops
    assert_eq!(module.output(), Some(ValueId(5)));
}

#[test]
fn redeclared_symbol_uses_latest_type() {
    let mut env = TypeEnv::new();
    env.add_symbol("x", TensorType::new("f32", [2, 2])).unwrap();
    env.add_symbol("x", TensorType::scalar("f32")).unwrap();
    env.add_symbol("y", TensorType::new("f32", [4, 4])).unwrap();

    // x is now scalar, so it broadcasts over y's 4x4 shape.
    let expr = Expr::binary("Add", Expr::var("x"), Expr::var("y"));
    let module = lower(&expr, &mut env).unwrap();
    assert_eq!(module.instructions()[2].ty, TensorType::new("f32", [4, 4]));
}

#[test]
fn validate_program_after_lowering() {
    let mut env = TypeEnv::new();
    env.add_symbol("x", TensorType::new("i32", [2])).unwrap();
    env.add_symbol("y", TensorType::new("i32", [2])).unwrap();

    let expr = Expr::binary("Add", Expr::var("x"), Expr::var("y"));
    let module = lower(&expr, &mut env).unwrap();

    // The final consistency sweep still holds after lowering.
    env.validate_program().unwrap();
    assert_eq!(module.len(), 3);
}

#[test]
fn nested_failure_reports_innermost_error() {
    let mut env = TypeEnv::new();
    env.add_symbol("a", TensorType::new("f32", [2])).unwrap();
    env.add_symbol("b", TensorType::new("f32", [3])).unwrap();
    env.add_symbol("c", TensorType::new("f32", [2])).unwrap();

    // The inner Add(a, b) fails before the outer Mul is ever validated.
    let expr = Expr::binary(
        "Mul",
        Expr::binary("Add", Expr::var("a"), Expr::var("b")),
        Expr::var("c"),
    );
    assert_eq!(
        lower(&expr, &mut env).unwrap_err(),
        TypeError::ShapeMismatch {
            op: "Add".into(),
            lhs: vec![2],
            rhs: vec![3],
        }
    );
}

#[test]
fn error_messages_name_the_offender() {
    assert_eq!(
        TypeError::UnknownDtype("q7".into()).to_string(),
        "unknown dtype 'q7'"
    );
    assert_eq!(
        TypeError::UndeclaredSymbol("ghost".into()).to_string(),
        "symbol 'ghost' is not declared"
    );
    assert_eq!(
        TypeError::DtypeMismatch {
            op: "Add".into(),
            lhs: "f32".into(),
            rhs: "i32".into(),
        }
        .to_string(),
        "dtype mismatch for Add: f32 vs i32"
    );
}
