//! Command-line argument definitions

use clap::{Parser as ClapParser, ValueEnum};
use codegen::Target;

/// Wordy compiler command-line interface
#[derive(ClapParser, Debug, Clone)]
#[command(name = "wordy", version, about = "Compile Wordy programs to JavaScript")]
pub struct Cli {
    /// Wordy source file to compile
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Inline Wordy code to compile
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Start interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Output language
    #[arg(short, long, value_enum, default_value_t = TargetArg::Js)]
    pub target: TargetArg,

    /// Print the AST as JSON before the generated code
    #[arg(long)]
    pub print_ast: bool,

    /// Write generated code to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output language as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    /// JavaScript
    Js,
    /// Canonical Wordy source
    Wordy,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Js => Target::EcmaScript,
            TargetArg::Wordy => Target::Wordy,
        }
    }
}

impl Cli {
    /// Arguments equivalent to `wordy --file <file>`
    pub fn with_file(file: String) -> Self {
        Self {
            file: Some(file),
            ..Self::empty()
        }
    }

    /// Arguments equivalent to `wordy --eval <code>`
    pub fn with_eval(code: String) -> Self {
        Self {
            eval: Some(code),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            file: None,
            eval: None,
            repl: false,
            target: TargetArg::Js,
            print_ast: false,
            output: None,
            verbose: false,
        }
    }
}
