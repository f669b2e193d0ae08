//! Canonical Wordy source rendering
//!
//! Output uses lowercase keywords and four-space indentation. Parsing the
//! rendered text yields the same [`Program`] that was rendered.

use crate::CodeGenerator;
use parser::ast::*;

const INDENT: &str = "    ";

// Preference order when choosing a string delimiter
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Renders a [`Program`] as Wordy source
pub struct SurfaceRenderer {
    output: String,
    indent: usize,
}

impl SurfaceRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(&INDENT.repeat(self.indent));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn visit_function(&mut self, function: &Function) {
        let mut header = format!("define function {}", function.name);
        if !function.parameters.is_empty() {
            let params: Vec<String> = function
                .parameters
                .iter()
                .map(|p| format!("{} as {}", p.name, type_info_text(&p.type_info)))
                .collect();
            header.push_str(" with param ");
            header.push_str(&params.join(" , "));
        }
        if let Some(return_type) = function.return_type {
            header.push_str(" that return ");
            header.push_str(variable_type_text(return_type));
        }
        header.push_str(" do");

        self.line(&header);
        self.visit_block(&function.body);
        self.line("end of function");
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
                type_info,
                initial_value,
            } => {
                let mut text = format!("define variable {} to be", name);
                if let Some(info) = type_info {
                    text.push(' ');
                    text.push_str(&type_info_text(info));
                }
                if let Some(value) = initial_value {
                    text.push_str(" initialized to ");
                    text.push_str(&expression(value));
                }
                self.line(&text);
            }

            Statement::AssignmentSet { target, value } => {
                self.line(&format!("set {} to be {}", target, expression(value)))
            }
            Statement::AssignmentIncrease { target, value } => {
                self.line(&format!("increase {} by {}", target, expression(value)))
            }
            Statement::AssignmentDecrease { target, value } => {
                self.line(&format!("decrease {} by {}", target, expression(value)))
            }

            Statement::PrintStatement { value } => {
                self.line(&format!("print {}", expression(value)))
            }

            Statement::IfBlock {
                branches,
                otherwise,
            } => {
                for (index, branch) in branches.iter().enumerate() {
                    let keyword = if index == 0 { "if" } else { "but if" };
                    self.line(&format!("{} {} do", keyword, expression(&branch.condition)));
                    self.visit_block(&branch.body);
                }
                if let Some(body) = otherwise {
                    self.line("otherwise do");
                    self.visit_block(body);
                }
                self.line("end of if");
            }

            Statement::WhileBlock { condition, body } => {
                self.line(&format!("while {} do", expression(condition)));
                self.visit_block(body);
                self.line("end of while");
            }

            Statement::ForBlock {
                iterator,
                from,
                to,
                body,
            } => {
                self.line(&format!(
                    "for {} from {} to {} do",
                    iterator,
                    expression(from),
                    expression(to)
                ));
                self.visit_block(body);
                self.line("end of for");
            }

            Statement::FunctionCall {
                name,
                arguments,
                result_target,
            } => {
                let mut text = format!("call function {}", name);
                if !arguments.is_empty() {
                    let args: Vec<String> = arguments.iter().map(expression).collect();
                    text.push_str(" with arg ");
                    text.push_str(&args.join(" , "));
                }
                if let Some(target) = result_target {
                    text.push_str(" then put result into ");
                    text.push_str(target);
                }
                self.line(&text);
            }

            Statement::FunctionReturn { value } => {
                self.line(&format!("return {}", expression(value)))
            }
        }
    }
}

impl CodeGenerator for SurfaceRenderer {
    fn generate(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent = 0;

        for item in &program.items {
            match item {
                Item::Function(function) => self.visit_function(function),
                Item::Statement(stmt) => self.visit_statement(stmt),
            }
        }

        tracing::debug!(bytes = self.output.len(), "rendered Wordy source");
        std::mem::take(&mut self.output)
    }
}

impl Default for SurfaceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn type_info_text(info: &TypeInfo) -> String {
    if info.mutable {
        format!("mutable {}", variable_type_text(info.variable_type))
    } else {
        variable_type_text(info.variable_type).to_string()
    }
}

fn variable_type_text(variable_type: VariableType) -> &'static str {
    match variable_type {
        VariableType::Number => "number",
        VariableType::String => "string",
        VariableType::Boolean => "boolean",
    }
}

// Right-associative grouping is the parser's default, so no parentheses are needed
fn expression(expr: &Expression) -> String {
    let mut out = String::new();
    let mut current = expr;

    loop {
        match current {
            Expression::Atom(atom) => {
                out.push_str(&atom_text(atom));
                return out;
            }
            Expression::Unary { operator, operand } => {
                out.push_str(match operator {
                    UnaryOperator::Not => "not ",
                });
                current = &**operand;
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                out.push_str(&atom_text(left));
                out.push(' ');
                out.push_str(binary_keyword(*operator));
                out.push(' ');
                current = &**right;
            }
        }
    }
}

fn atom_text(atom: &Atom) -> String {
    match atom {
        Atom::Number(value) | Atom::Variable(value) => value.clone(),
        Atom::String(value) => {
            let quote = QUOTES
                .iter()
                .copied()
                .find(|q| !value.contains(*q))
                .unwrap_or('"');
            format!("{}{}{}", quote, value, quote)
        }
        Atom::Boolean(value) => value.to_string(),
    }
}

fn binary_keyword(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Plus => "plus",
        BinaryOperator::Minus => "minus",
        BinaryOperator::Multiply => "multiply",
        BinaryOperator::Divide => "divide",
        BinaryOperator::Modulo => "modulo",
        BinaryOperator::And => "and",
        BinaryOperator::Or => "or",
        BinaryOperator::EqualTo => "equal to",
        BinaryOperator::NotEqualTo => "not equal to",
        BinaryOperator::GreaterThan => "greater than",
        BinaryOperator::GreaterThanOrEqualTo => "greater than or equal to",
        BinaryOperator::LessThan => "less than",
        BinaryOperator::LessThanOrEqualTo => "less than or equal to",
    }
}
