//! Compilation driver for the CLI
//!
//! The Compiler ties the parser and the code generators together:
//! - Parser for building the AST
//! - serde_json for the optional AST dump
//! - codegen for the selected target language

use crate::error::CliResult;
use codegen::Target;
use core_types::ParseError;
use std::path::Path;

/// Output of a single compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// Pretty-printed AST JSON, when AST printing is enabled
    pub ast: Option<String>,
    /// Generated code
    pub code: String,
}

/// Compiles Wordy source for one target
#[derive(Debug, Clone)]
pub struct Compiler {
    /// Output language
    target: Target,
    /// Whether to dump the AST alongside the code
    print_ast: bool,
}

impl Compiler {
    /// Create a compiler targeting JavaScript
    ///
    /// # Example
    /// ```
    /// use wordy_cli::Compiler;
    ///
    /// let compiler = Compiler::new();
    /// assert!(!compiler.is_print_ast_enabled());
    /// ```
    pub fn new() -> Self {
        Self {
            target: Target::EcmaScript,
            print_ast: false,
        }
    }

    /// Select the output language
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Compile a Wordy file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or does not parse
    ///
    /// # Example
    /// ```no_run
    /// use wordy_cli::Compiler;
    ///
    /// let compiler = Compiler::new();
    /// let output = compiler.compile_file("demos/fibonacci.wordy").unwrap();
    /// println!("{}", output.code);
    /// ```
    pub fn compile_file(&self, path: impl AsRef<Path>) -> CliResult<Compilation> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading source file");
        let source = std::fs::read_to_string(path)?;
        self.compile_string(&source)
    }

    /// Compile a Wordy source string
    ///
    /// # Example
    /// ```
    /// use wordy_cli::Compiler;
    ///
    /// let output = Compiler::new().compile_string("print 1").unwrap();
    /// assert_eq!(output.code, "VM.print(1);\n");
    /// ```
    pub fn compile_string(&self, source: &str) -> CliResult<Compilation> {
        let program = parser::parse(source)?;

        let ast = if self.print_ast {
            Some(serde_json::to_string_pretty(&program)?)
        } else {
            None
        };

        let code = codegen::generate(&program, self.target);
        Ok(Compilation { ast, code })
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    /// Current output language
    pub fn target(&self) -> Target {
        self.target
    }

    /// Change the output language
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// Check if AST printing is enabled
    pub fn is_print_ast_enabled(&self) -> bool {
        self.print_ast
    }

    /// Enable or disable AST printing
    pub fn set_print_ast(&mut self, enabled: bool) {
        self.print_ast = enabled;
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `error` only means the source stopped too early
///
/// True when the error sits at the end of the (right-trimmed) source, so more
/// input could still make it parse.
pub fn is_incomplete(error: &ParseError, source: &str) -> bool {
    error.position.offset >= source.trim_end().len()
}
