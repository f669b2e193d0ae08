//! Parser to Code Generator Integration Tests
//!
//! Tests the integration between the parser and codegen components.
//! Verifies that Wordy source is parsed into an AST and then rendered
//! into the expected JavaScript.

use codegen::{compile, CodeGenerator, EcmaScriptGenerator, Target};
use integration_tests::samples::{FIBONACCI, KITCHEN_SINK};
use parser::{Item, Parser, Statement};

/// Test: Parse every statement form and generate JavaScript
#[test]
fn test_kitchen_sink_to_javascript() {
    let program = Parser::new(KITCHEN_SINK).parse().expect("Failed to parse");
    assert_eq!(program.items.len(), 9);
    assert!(matches!(program.items[0], Item::Function(_)));

    let js = EcmaScriptGenerator::new().generate(&program);
    let expected = "\
function describe (value, label) {
\tif (value < 0) {
\t\tlabel = \"negative\";
\t} else if (value === 0) {
\t\tlabel = \"zero\";
\t} else {
\t\tlabel = \"positive\";
\t}
\treturn label;
}
var total = 0;
var done = false;
var name = \"sum\";
for (var i = 1; i <= 10; i++) {
\ttotal += i;
}
while (!done) {
\ttotal -= 1;
\tif (total <= 50) {
\t\tdone = true;
\t}
}
name = describe(total - 50, name);
describe(-1, \"x\");
VM.print(name + (\": \" + total));
";
    assert_eq!(js, expected);
}

/// Test: Function declarations appear in source order among statements
#[test]
fn test_fibonacci_items() {
    let program = Parser::new(FIBONACCI).parse().expect("Failed to parse");
    assert_eq!(program.items.len(), 3);

    match &program.items[0] {
        Item::Function(function) => {
            assert_eq!(function.name, "fibonacci");
            assert_eq!(function.parameters.len(), 1);
            assert!(matches!(function.body[0], Statement::IfBlock { .. }));
        }
        other => panic!("Expected function, got {:?}", other),
    }
    match &program.items[2] {
        Item::Statement(Statement::FunctionCall { name, arguments, .. }) => {
            assert_eq!(name, "listFibonacci");
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("Expected call, got {:?}", other),
    }
}

/// Test: Keyword case and spacing do not change the generated code
#[test]
fn test_case_and_spacing_insensitive() {
    let upper = compile("WHILE x LESS   THAN 3 DO\n\tINCREASE x BY 1\nEND OF WHILE", Target::EcmaScript)
        .unwrap();
    let lower = compile("while x less than 3 do increase x by 1 end of while", Target::EcmaScript)
        .unwrap();
    assert_eq!(upper, lower);
}

/// Test: A snippet that fails to parse produces no output
#[test]
fn test_parse_error_stops_generation() {
    let err = compile("print 1\nprint\n", Target::EcmaScript).unwrap_err();
    assert_eq!(err.position.line, 3);
    assert_eq!(err.message, "Unexpected EOF.");
}
