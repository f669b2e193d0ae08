//! CLI argument parsing tests
//!
//! Tests for verifying clap argument parsing works correctly

use clap::Parser as ClapParser;
use codegen::Target;
use wordy_cli::{Cli, TargetArg};

/// Test parsing no arguments (default behavior)
#[test]
fn cli_parse_no_args() {
    let cli = Cli::try_parse_from(["wordy"]).unwrap();

    assert_eq!(cli.file, None);
    assert_eq!(cli.eval, None);
    assert!(!cli.repl);
    assert_eq!(cli.target, TargetArg::Js);
    assert!(!cli.print_ast);
    assert_eq!(cli.output, None);
    assert!(!cli.verbose);
}

/// Test parsing --file and -f
#[test]
fn cli_parse_file() {
    let cli = Cli::try_parse_from(["wordy", "--file", "prog.wordy"]).unwrap();
    assert_eq!(cli.file, Some("prog.wordy".to_string()));

    let cli = Cli::try_parse_from(["wordy", "-f", "prog.wordy"]).unwrap();
    assert_eq!(cli.file, Some("prog.wordy".to_string()));
}

/// Test parsing --eval and -e
#[test]
fn cli_parse_eval() {
    let cli = Cli::try_parse_from(["wordy", "-e", "print 1"]).unwrap();
    assert_eq!(cli.eval, Some("print 1".to_string()));
}

/// Test parsing --repl and -r
#[test]
fn cli_parse_repl() {
    assert!(Cli::try_parse_from(["wordy", "--repl"]).unwrap().repl);
    assert!(Cli::try_parse_from(["wordy", "-r"]).unwrap().repl);
}

/// Test parsing --target values
#[test]
fn cli_parse_target() {
    let cli = Cli::try_parse_from(["wordy", "--target", "wordy"]).unwrap();
    assert_eq!(cli.target, TargetArg::Wordy);
    assert_eq!(Target::from(cli.target), Target::Wordy);

    let cli = Cli::try_parse_from(["wordy", "-t", "js"]).unwrap();
    assert_eq!(Target::from(cli.target), Target::EcmaScript);
}

/// Test parsing an unknown target fails
#[test]
fn cli_parse_unknown_target_fails() {
    assert!(Cli::try_parse_from(["wordy", "-t", "python"]).is_err());
}

/// Test parsing debug and output options together
#[test]
fn cli_parse_multiple_options() {
    let cli = Cli::try_parse_from([
        "wordy",
        "-f",
        "in.wordy",
        "--print-ast",
        "-o",
        "out.js",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.file, Some("in.wordy".to_string()));
    assert!(cli.print_ast);
    assert_eq!(cli.output, Some("out.js".to_string()));
    assert!(cli.verbose);
}

/// Test parsing preserves original file path format
#[test]
fn cli_preserves_file_path() {
    for path in [
        "./local.wordy",
        "../parent/prog.wordy",
        "path/to/my prog.wordy",
        "C:\\Programs\\prog.wordy",
    ] {
        let cli = Cli::try_parse_from(["wordy", "-f", path]).unwrap();
        assert_eq!(cli.file, Some(path.to_string()));
    }
}

/// Test parsing unknown option fails
#[test]
fn cli_parse_unknown_option_fails() {
    assert!(Cli::try_parse_from(["wordy", "--jit"]).is_err());
}

/// Test parsing missing file argument fails
#[test]
fn cli_parse_missing_file_arg_fails() {
    assert!(Cli::try_parse_from(["wordy", "--file"]).is_err());
}

/// Test duplicate options cause an error (clap default behavior)
#[test]
fn cli_parse_duplicate_file_fails() {
    assert!(Cli::try_parse_from(["wordy", "-f", "a.wordy", "-f", "b.wordy"]).is_err());
    assert!(Cli::try_parse_from(["wordy", "--print-ast", "--print-ast"]).is_err());
}

/// Test the programmatic constructors
#[test]
fn cli_constructors() {
    let cli = Cli::with_file("prog.wordy".to_string());
    assert_eq!(cli.file, Some("prog.wordy".to_string()));
    assert!(cli.eval.is_none());
    assert_eq!(cli.target, TargetArg::Js);

    let cli = Cli::with_eval("print 1".to_string());
    assert_eq!(cli.eval, Some("print 1".to_string()));
    assert!(cli.file.is_none());
}
