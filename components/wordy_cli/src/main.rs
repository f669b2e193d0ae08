//! Wordy Compiler CLI
//!
//! Entry point for the `wordy` binary. Parses CLI arguments and delegates
//! to the Compiler.

use clap::Parser as ClapParser;
use wordy_cli::{Cli, CliError, CliResult, Compilation, Compiler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so generated code on stdout stays clean
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut compiler = Compiler::new()
        .with_target(cli.target.into())
        .with_print_ast(cli.print_ast);

    if let Some(file) = cli.file.as_deref() {
        match compiler.compile_file(file) {
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            result => emit(result, cli.output.as_deref()),
        }
    } else if let Some(code) = cli.eval.as_deref() {
        emit(compiler.compile_string(code), cli.output.as_deref());
    } else if cli.repl {
        compiler.repl()?;
    } else {
        // Default: show usage
        println!("Wordy Compiler v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  wordy --file <FILE>     Compile a Wordy file");
        println!("  wordy --eval <CODE>     Compile inline Wordy code");
        println!("  wordy --repl            Start interactive REPL");
        println!();
        println!("Run 'wordy --help' for more options.");
    }

    Ok(())
}

fn emit(result: CliResult<Compilation>, output: Option<&str>) {
    let compilation = match result {
        Ok(compilation) => compilation,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(ast) = &compilation.ast {
        println!("{}", ast);
    }

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &compilation.code) {
                eprintln!("Error: Could not write file '{}': {}", path, e);
                std::process::exit(1);
            }
            tracing::debug!(path, "wrote generated code");
        }
        None => print!("{}", compilation.code),
    }
}
