//! Round-trip Integration Tests
//!
//! Rendering a parsed program back to Wordy and parsing it again must give
//! the same AST.

use codegen::{compile, generate, Target};
use integration_tests::samples::{FIBONACCI, KITCHEN_SINK};
use parser::parse;

fn assert_round_trip(source: &str) {
    let program = parse(source).expect("Failed to parse");
    let rendered = generate(&program, Target::Wordy);
    let reparsed = parse(&rendered).expect("Rendered source failed to parse");
    assert_eq!(reparsed, program, "rendered:\n{}", rendered);
}

/// Test: Sample programs survive a round trip
#[test]
fn test_samples_round_trip() {
    assert_round_trip(FIBONACCI);
    assert_round_trip(KITCHEN_SINK);
}

/// Test: Rendering is a fixed point after one pass
#[test]
fn test_rendering_is_idempotent() {
    for source in [FIBONACCI, KITCHEN_SINK] {
        let once = compile(source, Target::Wordy).unwrap();
        let twice = compile(&once, Target::Wordy).unwrap();
        assert_eq!(once, twice);
    }
}

/// Test: Round trip preserves expression grouping and literals
#[test]
fn test_expression_shapes_round_trip() {
    for source in [
        "print a plus b multiply c minus d",
        "print not a or not b",
        "print a greater than or equal to b and c less than d",
        "print \"it's\"",
        "print 'say \"hi\"'",
        "print `both ' and \"`",
        "print -.25",
        "print \"\"",
    ] {
        assert_round_trip(source);
    }
}

/// Test: Round-tripped JavaScript output is unchanged
#[test]
fn test_javascript_stable_across_round_trip() {
    let rendered = compile(KITCHEN_SINK, Target::Wordy).unwrap();
    assert_eq!(
        compile(&rendered, Target::EcmaScript).unwrap(),
        compile(KITCHEN_SINK, Target::EcmaScript).unwrap()
    );
}
