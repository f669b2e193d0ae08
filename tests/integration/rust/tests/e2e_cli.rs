//! End-to-End CLI Integration Tests
//!
//! Tests the complete compiler through the wordy_cli Compiler API.
//! This is the highest level integration test - source file to final output.

use codegen::Target;
use core_types::ErrorKind;
use integration_tests::samples::FIBONACCI;
use std::fs;
use tempfile::TempDir;
use wordy_cli::{Cli, CliError, Compiler};

/// Test: Compile the fibonacci sample from disk
#[test]
fn test_e2e_fibonacci_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fibonacci.wordy");
    fs::write(&path, FIBONACCI).unwrap();

    let cli = Cli::with_file(path.to_str().unwrap().to_string());
    let compiler = Compiler::new().with_target(cli.target.into());
    let output = compiler.compile_file(cli.file.as_ref().unwrap()).unwrap();

    assert!(output.code.starts_with("function fibonacci (n) {\n"));
    assert!(output.code.ends_with("listFibonacci(1, 20);\n"));
}

/// Test: Inline code with AST output
#[test]
fn test_e2e_eval_with_ast() {
    let cli = Cli::with_eval("call function f with arg 1 then put result into y".to_string());
    let compiler = Compiler::new().with_print_ast(true);
    let output = compiler
        .compile_string(cli.eval.as_deref().unwrap())
        .unwrap();

    let ast: serde_json::Value = serde_json::from_str(output.ast.as_deref().unwrap()).unwrap();
    let call = &ast["items"][0]["Statement"];
    assert_eq!(call["type"], "FunctionCall");
    assert_eq!(call["name"], "f");
    assert_eq!(call["result_target"], "y");
    assert_eq!(output.code, "y = f(1);\n");
}

/// Test: Both targets from the same compiler configuration
#[test]
fn test_e2e_switch_targets() {
    let mut compiler = Compiler::new();
    let source = "Define Variable greeting To Be String Equal To \"hi\"";

    assert_eq!(compiler.compile_string(source).unwrap().code, "var greeting = \"hi\";\n");

    compiler.set_target(Target::Wordy);
    assert_eq!(
        compiler.compile_string(source).unwrap().code,
        "define variable greeting to be string initialized to \"hi\"\n"
    );
}

/// Test: Every error kind surfaces through the CLI error type
#[test]
fn test_e2e_error_kinds() {
    let cases = [
        ("define variable x to be", ErrorKind::MissingTypeOrInitializer),
        ("print", ErrorKind::UnexpectedEndOfInput),
        ("define variable x be number", ErrorKind::UnexpectedToken),
        ("define variable string to be number", ErrorKind::ReservedWord),
        ("print 3x", ErrorKind::InvalidExpression),
    ];

    let compiler = Compiler::new();
    for (source, kind) in cases {
        match compiler.compile_string(source) {
            Err(CliError::Syntax(e)) => assert_eq!(e.kind, kind, "{}", source),
            other => panic!("Expected syntax error for {}, got {:?}", source, other),
        }
    }
}

/// Test: Deeply chained expressions fail cleanly instead of exhausting the stack
#[test]
fn test_e2e_deep_expression_rejected() {
    let compiler = Compiler::new().with_print_ast(true);
    for source in [
        format!("print {}x", "a plus ".repeat(5000)),
        format!("print {}x", "not ".repeat(5000)),
    ] {
        match compiler.compile_string(&source) {
            Err(CliError::Syntax(e)) => assert_eq!(e.kind, ErrorKind::ExpressionTooDeep),
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    let limit = format!("print {}x", "a plus ".repeat(parser::MAX_EXPRESSION_DEPTH));
    let output = compiler.compile_string(&limit).unwrap();
    assert!(output.ast.is_some());
    assert!(output.code.starts_with("VM.print(a + (a + ("));
    let closing = format!("a + x{});\n", ")".repeat(parser::MAX_EXPRESSION_DEPTH - 1));
    assert!(output.code.ends_with(&closing));
}

/// Test: Syntax error text matches the CLI's stderr format
#[test]
fn test_e2e_error_display() {
    let err = Compiler::new().compile_string("set x to be").unwrap_err();
    assert_eq!(err.to_string(), "Syntax Error: L1:C11\nUnexpected EOF.");
}
