//! JavaScript generation from the Wordy AST
//!
//! Printing goes through a host-provided `VM.print`. `for` loops are inclusive
//! and operator chains keep their right-associative grouping.

use crate::CodeGenerator;
use parser::ast::*;

/// Generates JavaScript source from a [`Program`]
pub struct EcmaScriptGenerator {
    output: String,
    indent: usize,
}

impl EcmaScriptGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push('\t');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn visit_function(&mut self, function: &Function) {
        let params: Vec<&str> = function.parameters.iter().map(|p| p.name.as_str()).collect();
        self.line(&format!("function {} ({}) {{", function.name, params.join(", ")));
        self.visit_block(&function.body);
        self.line("}");
    }

    fn visit_block(&mut self, body: &[Statement]) {
        self.indent += 1;
        for stmt in body {
            self.visit_statement(stmt);
        }
        self.indent -= 1;
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VariableDeclaration {
                name,
                initial_value,
                ..
            } => match initial_value {
                Some(value) => self.line(&format!("var {} = {};", name, expression(value))),
                None => self.line(&format!("var {};", name)),
            },

            Statement::AssignmentSet { target, value } => {
                self.line(&format!("{} = {};", target, expression(value)))
            }
            Statement::AssignmentIncrease { target, value } => {
                self.line(&format!("{} += {};", target, expression(value)))
            }
            Statement::AssignmentDecrease { target, value } => {
                self.line(&format!("{} -= {};", target, expression(value)))
            }

            Statement::PrintStatement { value } => {
                self.line(&format!("VM.print({});", expression(value)))
            }

            Statement::IfBlock {
                branches,
                otherwise,
            } => {
                for (index, branch) in branches.iter().enumerate() {
                    let condition = expression(&branch.condition);
                    if index == 0 {
                        self.line(&format!("if ({}) {{", condition));
                    } else {
                        self.line(&format!("}} else if ({}) {{", condition));
                    }
                    self.visit_block(&branch.body);
                }
                if let Some(body) = otherwise {
                    self.line("} else {");
                    self.visit_block(body);
                }
                self.line("}");
            }

            Statement::WhileBlock { condition, body } => {
                self.line(&format!("while ({}) {{", expression(condition)));
                self.visit_block(body);
                self.line("}");
            }

            Statement::ForBlock {
                iterator,
                from,
                to,
                body,
            } => {
                self.line(&format!(
                    "for (var {i} = {}; {i} <= {}; {i}++) {{",
                    expression(from),
                    expression(to),
                    i = iterator
                ));
                self.visit_block(body);
                self.line("}");
            }

            Statement::FunctionCall {
                name,
                arguments,
                result_target,
            } => {
                let args: Vec<String> = arguments.iter().map(expression).collect();
                let call = format!("{}({});", name, args.join(", "));
                match result_target {
                    Some(target) => self.line(&format!("{} = {}", target, call)),
                    None => self.line(&call),
                }
            }

            Statement::FunctionReturn { value } => {
                self.line(&format!("return {};", expression(value)))
            }
        }
    }
}

impl CodeGenerator for EcmaScriptGenerator {
    fn generate(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent = 0;

        for item in &program.items {
            match item {
                Item::Function(function) => self.visit_function(function),
                Item::Statement(stmt) => self.visit_statement(stmt),
            }
        }

        tracing::debug!(bytes = self.output.len(), "generated JavaScript");
        std::mem::take(&mut self.output)
    }
}

impl Default for EcmaScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Walks the right spine in a loop; nested operations are parenthesized so JS
// precedence cannot regroup them
fn expression(expr: &Expression) -> String {
    let mut out = String::new();
    let mut closers = 0;
    let mut current = expr;

    loop {
        let operand = match current {
            Expression::Atom(atom) => {
                out.push_str(&atom_text(atom));
                break;
            }
            Expression::Unary { operator, operand } => {
                out.push_str(match operator {
                    UnaryOperator::Not => "!",
                });
                &**operand
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                out.push_str(&atom_text(left));
                out.push(' ');
                out.push_str(binary_symbol(*operator));
                out.push(' ');
                &**right
            }
        };

        if operand.is_operation() {
            out.push('(');
            closers += 1;
        }
        current = operand;
    }

    out.extend(std::iter::repeat(')').take(closers));
    out
}

fn atom_text(atom: &Atom) -> String {
    match atom {
        Atom::Number(value) | Atom::Variable(value) => value.clone(),
        Atom::String(value) => serde_json::Value::from(value.as_str()).to_string(),
        Atom::Boolean(value) => value.to_string(),
    }
}

fn binary_symbol(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Plus => "+",
        BinaryOperator::Minus => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Modulo => "%",
        BinaryOperator::And => "&&",
        BinaryOperator::Or => "||",
        BinaryOperator::EqualTo => "===",
        BinaryOperator::NotEqualTo => "!==",
        BinaryOperator::GreaterThan => ">",
        BinaryOperator::GreaterThanOrEqualTo => ">=",
        BinaryOperator::LessThan => "<",
        BinaryOperator::LessThanOrEqualTo => "<=",
    }
}
