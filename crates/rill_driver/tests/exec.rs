//! Integration tests that compile programs and execute them via the JIT.

#![cfg(feature = "jit")]

use rill_ast::{BinaryOp, Block, Expr, ExternDecl, FunctionDecl, Param, Stmt, VarDecl};
use rill_driver::Driver;

fn run(program: Block) -> i64 {
    Driver::new()
        .run(&program, "exec_test")
        .expect("program should compile and run")
}

fn int(value: i64) -> Expr {
    Expr::IntLiteral(value)
}

#[test]
fn test_addition() {
    let program = Block::new(vec![Stmt::Return(Expr::binary(
        BinaryOp::Add,
        int(1),
        int(2),
    ))]);
    assert_eq!(run(program), 3);
}

#[test]
fn test_division_truncates_toward_zero() {
    let program = Block::new(vec![Stmt::Return(Expr::binary(
        BinaryOp::Div,
        int(7),
        int(2),
    ))]);
    assert_eq!(run(program), 3);
}

#[test]
fn test_nested_arithmetic() {
    // 2 * 3 - 8 / 4 + 1
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Mul, int(2), int(3)),
            Expr::binary(BinaryOp::Div, int(8), int(4)),
        ),
        int(1),
    );
    let program = Block::new(vec![Stmt::Return(expr)]);
    assert_eq!(run(program), 5);
}

#[test]
fn test_program_without_return_yields_zero() {
    let program = Block::new(vec![Stmt::Expr(Expr::binary(BinaryOp::Add, int(1), int(1)))]);
    assert_eq!(run(program), 0);
}

#[test]
fn test_variable_declaration_and_use() {
    let program = Block::new(vec![
        Stmt::Var(VarDecl::new("int", "x", Some(int(4)))),
        Stmt::Return(Expr::binary(BinaryOp::Mul, Expr::ident("x"), int(2))),
    ]);
    assert_eq!(run(program), 8);
}

#[test]
fn test_assignment_updates_storage() {
    let program = Block::new(vec![
        Stmt::Var(VarDecl::new("int", "x", Some(int(1)))),
        Stmt::Expr(Expr::assign(
            "x",
            Expr::binary(BinaryOp::Add, Expr::ident("x"), int(41)),
        )),
        Stmt::Return(Expr::ident("x")),
    ]);
    assert_eq!(run(program), 42);
}

#[test]
fn test_redeclaration_shadows_previous_slot() {
    let program = Block::new(vec![
        Stmt::Var(VarDecl::new("int", "x", Some(int(1)))),
        Stmt::Var(VarDecl::new("int", "x", Some(int(2)))),
        Stmt::Return(Expr::ident("x")),
    ]);
    assert_eq!(run(program), 2);
}

#[test]
fn test_function_declaration_and_call() {
    let add = FunctionDecl::new(
        "int",
        "add",
        vec![Param::new("int", "a"), Param::new("int", "b")],
        Block::new(vec![Stmt::Return(Expr::binary(
            BinaryOp::Add,
            Expr::ident("a"),
            Expr::ident("b"),
        ))]),
    );
    let program = Block::new(vec![
        Stmt::Function(add),
        Stmt::Return(Expr::call("add", vec![int(40), int(2)])),
    ]);
    assert_eq!(run(program), 42);
}

#[test]
fn test_sequential_functions_are_isolated() {
    let first = FunctionDecl::new(
        "int",
        "first",
        vec![Param::new("int", "a")],
        Block::new(vec![Stmt::Return(Expr::binary(
            BinaryOp::Add,
            Expr::ident("a"),
            int(1),
        ))]),
    );
    let second = FunctionDecl::new(
        "int",
        "second",
        vec![Param::new("int", "b")],
        Block::new(vec![Stmt::Return(Expr::binary(
            BinaryOp::Mul,
            Expr::ident("b"),
            int(2),
        ))]),
    );
    let program = Block::new(vec![
        Stmt::Function(first),
        Stmt::Function(second),
        Stmt::Return(Expr::call(
            "second",
            vec![Expr::call("first", vec![int(10)])],
        )),
    ]);
    assert_eq!(run(program), 22);
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    // pick(a = 7, a) must see the store before the load.
    let pick = FunctionDecl::new(
        "int",
        "pick",
        vec![Param::new("int", "x"), Param::new("int", "y")],
        Block::new(vec![Stmt::Return(Expr::ident("y"))]),
    );
    let program = Block::new(vec![
        Stmt::Var(VarDecl::new("int", "a", Some(int(5)))),
        Stmt::Function(pick),
        Stmt::Return(Expr::call(
            "pick",
            vec![Expr::assign("a", int(7)), Expr::ident("a")],
        )),
    ]);
    assert_eq!(run(program), 7);
}

#[test]
fn test_statements_after_return_still_translate() {
    let program = Block::new(vec![
        Stmt::Return(int(1)),
        Stmt::Var(VarDecl::new("int", "x", Some(int(2)))),
        Stmt::Expr(Expr::ident("x")),
    ]);
    assert_eq!(run(program), 1);
}

#[test]
fn test_function_without_return_yields_zero_of_type() {
    let nothing = FunctionDecl::new(
        "int",
        "nothing",
        vec![],
        Block::new(vec![Stmt::Var(VarDecl::new("int", "x", Some(int(1))))]),
    );
    let program = Block::new(vec![
        Stmt::Function(nothing),
        Stmt::Return(Expr::binary(
            BinaryOp::Add,
            Expr::call("nothing", vec![]),
            int(9),
        )),
    ]);
    assert_eq!(run(program), 9);
}

#[test]
fn test_void_function_call_as_statement() {
    let noop = FunctionDecl::new("void", "noop", vec![], Block::default());
    let program = Block::new(vec![
        Stmt::Function(noop),
        Stmt::Expr(Expr::call("noop", vec![])),
        Stmt::Return(int(4)),
    ]);
    assert_eq!(run(program), 4);
}

#[test]
fn test_extern_call_resolves_libc_symbol() {
    let labs = ExternDecl::new("int", "labs", vec![Param::new("int", "v")]);
    let program = Block::new(vec![
        Stmt::Extern(labs),
        Stmt::Return(Expr::call("labs", vec![int(-5)])),
    ]);
    assert_eq!(run(program), 5);
}

#[test]
fn test_double_storage_is_allowed() {
    let program = Block::new(vec![
        Stmt::Var(VarDecl::new("double", "d", Some(Expr::DoubleLiteral(1.5)))),
        Stmt::Return(int(3)),
    ]);
    assert_eq!(run(program), 3);
}
