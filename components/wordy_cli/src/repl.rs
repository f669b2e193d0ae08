//! REPL (Read-Eval-Print Loop) implementation

use crate::compiler::{is_incomplete, Compilation, Compiler};
use crate::error::{CliError, CliResult};
use codegen::Target;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// # Arguments
/// * `compiler` - The Compiler used for every submitted snippet
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(compiler: &mut Compiler) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("Wordy Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Type Wordy code or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && is_exit_command(trimmed) {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed, compiler);
                    continue;
                }

                if !in_multiline && trimmed.is_empty() {
                    continue;
                }

                // An empty line ends a multiline snippet even if it is incomplete
                let force = in_multiline && trimmed.is_empty();

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                match compiler.compile_string(&line_buffer) {
                    Ok(output) => print_compilation(&output),
                    Err(CliError::Syntax(e)) if !force && is_incomplete(&e, &line_buffer) => {
                        in_multiline = true;
                        continue;
                    }
                    Err(e) => eprintln!("{}", e),
                }

                let _ = editor.add_history_entry(line_buffer.as_str());
                line_buffer.clear();
                in_multiline = false;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    matches!(input, "exit" | ".exit" | "quit")
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, compiler: &mut Compiler) {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();

    match name {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help          - Show this help message");
            println!("  .ast           - Toggle AST printing");
            println!("  .target <t>    - Select output language (js, wordy)");
            println!("  .clear         - Clear the screen");
            println!("  .exit          - Exit the REPL");
            println!("  exit           - Exit the REPL");
            println!("  quit           - Exit the REPL");
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        ".ast" => {
            let enabled = !compiler.is_print_ast_enabled();
            compiler.set_print_ast(enabled);
            println!("AST printing: {}", if enabled { "enabled" } else { "disabled" });
        }
        ".target" => match parts.next() {
            Some(value) => match value.parse::<Target>() {
                Ok(target) => {
                    compiler.set_target(target);
                    println!("Target: {}", target);
                }
                Err(message) => println!("{}", message),
            },
            None => println!("Target: {}", compiler.target()),
        },
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

fn print_compilation(output: &Compilation) {
    if let Some(ast) = &output.ast {
        println!("{}", ast);
    }
    print!("{}", output.code);
}
