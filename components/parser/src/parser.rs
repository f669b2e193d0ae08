//! Recursive descent parser for Wordy
//!
//! Every decision is a single `peek`/`extract` against a FIRST-set written
//! out at the call site, so each production documents exactly which phrases
//! may follow it.

use crate::ast::*;
use crate::error::*;
use crate::lexer::TokenMatcher;
use crate::token::{RuleTable, TokenKind};
use core_types::{ErrorKind, ParseError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that can start a statement
pub const STATEMENT_FIRST_SET: &[TokenKind] = &[
    TokenKind::VariableDeclaration,
    TokenKind::Set,
    TokenKind::Increase,
    TokenKind::Decrease,
    TokenKind::Print,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::FunctionCall,
    TokenKind::Return,
];

/// Phrases that can start a top-level item, plus end of input
pub const PROGRAM_FIRST_SET: &[TokenKind] = &[
    TokenKind::VariableDeclaration,
    TokenKind::Set,
    TokenKind::Increase,
    TokenKind::Decrease,
    TokenKind::Print,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::FunctionCall,
    TokenKind::Return,
    TokenKind::FunctionDeclaration,
    TokenKind::EndOfInput,
];

const VARIABLE_TYPE_FIRST_SET: &[TokenKind] = &[
    TokenKind::VariableTypeNumber,
    TokenKind::VariableTypeString,
    TokenKind::VariableTypeBoolean,
];

const BOOLEAN_VALUE_FIRST_SET: &[TokenKind] =
    &[TokenKind::BooleanValueTrue, TokenKind::BooleanValueFalse];

const INITIALIZER_FIRST_SET: &[TokenKind] = &[TokenKind::EqualTo, TokenKind::InitializedTo];

const IF_CONTINUATION_FIRST_SET: &[TokenKind] = &[TokenKind::ButIf, TokenKind::Otherwise];

// Longer phrases precede their prefixes ("greater than or equal to" before "greater than")
const BINARY_OPERATOR_FIRST_SET: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Multiply,
    TokenKind::Divide,
    TokenKind::Modulo,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::EqualTo,
    TokenKind::NotEqualTo,
    TokenKind::GreaterThanOrEqualTo,
    TokenKind::GreaterThan,
    TokenKind::LessThanOrEqualTo,
    TokenKind::LessThan,
];

/// Most `not` and binary operators one expression may chain.
///
/// The AST is a linked chain of boxes, and dropping, comparing or serializing
/// it recurses once per link.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?([0-9]*\.[0-9]+|[0-9]+)$").expect("valid number pattern"));

static VARIABLE_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid variable name pattern"));

/// Wordy parser
pub struct Parser<'a> {
    matcher: TokenMatcher<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str) -> Self {
        Self::with_matcher(TokenMatcher::new(source))
    }

    /// Create a parser over a custom keyword table
    pub fn with_rules(source: &'a str, rules: &'a RuleTable) -> Self {
        Self::with_matcher(TokenMatcher::with_rules(source, rules))
    }

    /// Create a parser driving an existing matcher
    pub fn with_matcher(matcher: TokenMatcher<'a>) -> Self {
        Self { matcher }
    }

    /// Parse the whole source into a [`Program`]
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        tracing::debug!("parsing program");
        let mut items = Vec::new();

        loop {
            match self.matcher.extract(PROGRAM_FIRST_SET)? {
                TokenKind::FunctionDeclaration => items.push(Item::Function(self.parse_function()?)),
                TokenKind::EndOfInput => break,
                kind => items.push(Item::Statement(self.parse_statement(Some(kind))?)),
            }
        }

        tracing::debug!(items = items.len(), "parsed program");
        Ok(Program { items })
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let name = self.matcher.extract_raw_token()?;

        let mut parameters = Vec::new();
        if self.accept(TokenKind::WithParam)? {
            loop {
                let offset = self.matcher.next_offset();
                let param_name = self.matcher.extract_raw_token()?;
                self.matcher.extract(&[TokenKind::As])?;

                let type_info = self.parse_type_info()?.ok_or_else(|| {
                    syntax_error(
                        ErrorKind::MissingParameterType,
                        format!(
                            "Parameter \"{}\" of function \"{}\" requires a valid type.",
                            param_name, name
                        ),
                        self.matcher.position(offset),
                    )
                })?;

                parameters.push(Parameter {
                    name: param_name,
                    type_info,
                });

                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
        }

        let return_type = if self.accept(TokenKind::ThatReturn)? {
            Some(self.parse_variable_type()?)
        } else {
            None
        };

        self.matcher.extract(&[TokenKind::Do])?;
        let body = self.parse_body()?;
        self.expect_block_end(TokenKind::EndOfFunction)?;

        Ok(Function {
            name,
            parameters,
            return_type,
            body,
        })
    }

    /// Statement list; may be empty
    fn parse_body(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        while let Some(kind) = self.matcher.peek(STATEMENT_FIRST_SET) {
            self.matcher.extract(&[kind])?;
            statements.push(self.parse_statement(Some(kind))?);
        }
        Ok(statements)
    }

    /// Require a block's closing phrase, reporting nested functions specially
    fn expect_block_end(&mut self, closing: TokenKind) -> Result<(), ParseError> {
        match self.matcher.extract(&[closing]) {
            Ok(_) => Ok(()),
            Err(err) => {
                if self.matcher.peek(&[TokenKind::FunctionDeclaration]).is_some() {
                    return Err(syntax_error(
                        ErrorKind::NestedFunction,
                        "Functions can only be declared at the top level.",
                        self.matcher.position(self.matcher.next_offset()),
                    ));
                }
                Err(err)
            }
        }
    }

    fn parse_statement(&mut self, kind: Option<TokenKind>) -> Result<Statement, ParseError> {
        let kind = match kind {
            Some(kind) => kind,
            None => self.matcher.extract(STATEMENT_FIRST_SET)?,
        };

        match kind {
            TokenKind::VariableDeclaration => self.parse_variable_declaration(),
            TokenKind::Set | TokenKind::Increase | TokenKind::Decrease => {
                self.parse_assignment(kind)
            }
            TokenKind::Print => Ok(Statement::PrintStatement {
                value: self.parse_expression()?,
            }),
            TokenKind::If => self.parse_if_block(),
            TokenKind::While => self.parse_while_block(),
            TokenKind::For => self.parse_for_block(),
            TokenKind::FunctionCall => self.parse_function_call(),
            TokenKind::Return => Ok(Statement::FunctionReturn {
                value: self.parse_expression()?,
            }),
            other => Err(syntax_error(
                ErrorKind::Internal,
                format!("Invalid token {:?}.", other),
                self.matcher.position(self.matcher.cursor()),
            )),
        }
    }

    fn parse_variable_declaration(&mut self) -> Result<Statement, ParseError> {
        let offset = self.matcher.next_offset();
        let name = self.matcher.extract_raw_token()?;
        self.matcher.extract(&[TokenKind::ToBe])?;

        let type_info = self.parse_type_info()?;

        let initial_value = if self.matcher.peek(INITIALIZER_FIRST_SET).is_some() {
            self.matcher.extract(INITIALIZER_FIRST_SET)?;
            Some(self.parse_expression()?)
        } else {
            None
        };

        if type_info.is_none() && initial_value.is_none() {
            return Err(syntax_error(
                ErrorKind::MissingTypeOrInitializer,
                format!(
                    "Variable declaration \"{}\" must either have a type or initial value.",
                    name
                ),
                self.matcher.position(offset),
            ));
        }

        Ok(Statement::VariableDeclaration {
            name,
            type_info,
            initial_value,
        })
    }

    fn parse_assignment(&mut self, kind: TokenKind) -> Result<Statement, ParseError> {
        let target = self.matcher.extract_raw_token()?;
        let connector = if kind == TokenKind::Set {
            TokenKind::ToBe
        } else {
            TokenKind::By
        };
        self.matcher.extract(&[connector])?;
        let value = self.parse_expression()?;

        Ok(match kind {
            TokenKind::Set => Statement::AssignmentSet { target, value },
            TokenKind::Increase => Statement::AssignmentIncrease { target, value },
            _ => Statement::AssignmentDecrease { target, value },
        })
    }

    fn parse_if_block(&mut self) -> Result<Statement, ParseError> {
        let mut branches = vec![self.parse_conditional_block()?];
        let mut otherwise = None;

        loop {
            match self.matcher.peek(IF_CONTINUATION_FIRST_SET) {
                Some(TokenKind::ButIf) => {
                    self.matcher.extract(&[TokenKind::ButIf])?;
                    branches.push(self.parse_conditional_block()?);
                }
                Some(_) => {
                    self.matcher.extract(&[TokenKind::Otherwise])?;
                    self.matcher.extract(&[TokenKind::Do])?;
                    otherwise = Some(self.parse_body()?);
                    break;
                }
                None => break,
            }
        }

        self.expect_block_end(TokenKind::EndOfIf)?;
        Ok(Statement::IfBlock {
            branches,
            otherwise,
        })
    }

    fn parse_conditional_block(&mut self) -> Result<ConditionalBlock, ParseError> {
        let condition = self.parse_expression()?;
        self.matcher.extract(&[TokenKind::Do])?;
        let body = self.parse_body()?;
        Ok(ConditionalBlock { condition, body })
    }

    fn parse_while_block(&mut self) -> Result<Statement, ParseError> {
        let condition = self.parse_expression()?;
        self.matcher.extract(&[TokenKind::Do])?;
        let body = self.parse_body()?;
        self.expect_block_end(TokenKind::EndOfWhile)?;
        Ok(Statement::WhileBlock { condition, body })
    }

    fn parse_for_block(&mut self) -> Result<Statement, ParseError> {
        let iterator = self.matcher.extract_raw_token()?;

        self.matcher.extract(&[TokenKind::From])?;
        let from = self.parse_expression()?;

        self.matcher.extract(&[TokenKind::To])?;
        let to = self.parse_expression()?;

        self.matcher.extract(&[TokenKind::Do])?;
        let body = self.parse_body()?;
        self.expect_block_end(TokenKind::EndOfFor)?;

        Ok(Statement::ForBlock {
            iterator,
            from,
            to,
            body,
        })
    }

    fn parse_function_call(&mut self) -> Result<Statement, ParseError> {
        let name = self.matcher.extract_raw_token()?;

        let mut arguments = Vec::new();
        if self.accept(TokenKind::WithArg)? {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
        }

        let result_target = if self.accept(TokenKind::ThenPutResultInto)? {
            Some(self.matcher.extract_raw_token()?)
        } else {
            None
        };

        Ok(Statement::FunctionCall {
            name,
            arguments,
            result_target,
        })
    }

    /// `[mutable] number|string|boolean`, or `None` when no annotation follows
    fn parse_type_info(&mut self) -> Result<Option<TypeInfo>, ParseError> {
        if self.accept(TokenKind::Mutable)? {
            return Ok(Some(TypeInfo {
                mutable: true,
                variable_type: self.parse_variable_type()?,
            }));
        }

        if self.matcher.peek(VARIABLE_TYPE_FIRST_SET).is_none() {
            return Ok(None);
        }

        Ok(Some(TypeInfo {
            mutable: false,
            variable_type: self.parse_variable_type()?,
        }))
    }

    fn parse_variable_type(&mut self) -> Result<VariableType, ParseError> {
        match self.matcher.extract(VARIABLE_TYPE_FIRST_SET)? {
            TokenKind::VariableTypeNumber => Ok(VariableType::Number),
            TokenKind::VariableTypeString => Ok(VariableType::String),
            _ => Ok(VariableType::Boolean),
        }
    }

    /// `not* atom [operator expression]`, parsed without recursion.
    ///
    /// Links of the chain are collected first and then folded from the right.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let start = self.matcher.next_offset();
        let mut links: Vec<(usize, Atom, BinaryOperator)> = Vec::new();
        let mut depth = 0;

        let (negations, last) = loop {
            let mut negations = 0;
            while self.accept(TokenKind::Not)? {
                negations += 1;
                depth += 1;
                self.check_depth(depth, start)?;
            }

            let left = self.parse_atom()?;

            let Some(kind) = self.matcher.peek(BINARY_OPERATOR_FIRST_SET) else {
                break (negations, left);
            };
            self.matcher.extract(&[kind])?;

            let operator = binary_operator(kind).ok_or_else(|| {
                syntax_error(
                    ErrorKind::Internal,
                    format!("Invalid token {:?}.", kind),
                    self.matcher.position(self.matcher.cursor()),
                )
            })?;

            depth += 1;
            self.check_depth(depth, start)?;
            links.push((negations, left, operator));
        };

        let mut expr = negate(Expression::Atom(last), negations);
        while let Some((negations, left, operator)) = links.pop() {
            expr = negate(Expression::binary(left, operator, expr), negations);
        }
        Ok(expr)
    }

    fn check_depth(&self, depth: usize, start: usize) -> Result<(), ParseError> {
        if depth <= MAX_EXPRESSION_DEPTH {
            return Ok(());
        }
        Err(syntax_error(
            ErrorKind::ExpressionTooDeep,
            format!(
                "Expression nests more than {} operators.",
                MAX_EXPRESSION_DEPTH
            ),
            self.matcher.position(start),
        ))
    }

    fn parse_atom(&mut self) -> Result<Atom, ParseError> {
        if let Some(kind) = self.matcher.peek(BOOLEAN_VALUE_FIRST_SET) {
            self.matcher.extract(&[kind])?;
            return Ok(Atom::Boolean(kind == TokenKind::BooleanValueTrue));
        }

        if let Some(value) = self.matcher.extract_string_literal() {
            return Ok(Atom::String(value));
        }

        let offset = self.matcher.next_offset();
        let token = self.matcher.extract_raw_token()?;

        if NUMBER_PATTERN.is_match(&token) {
            Ok(Atom::Number(token))
        } else if VARIABLE_NAME_PATTERN.is_match(&token) {
            Ok(Atom::Variable(token))
        } else {
            Err(syntax_error(
                ErrorKind::InvalidExpression,
                format!("Invalid expression \"{}\".", token),
                self.matcher.position(offset),
            ))
        }
    }

    /// Consume `kind` if it comes next
    fn accept(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.matcher.peek(&[kind]).is_none() {
            return Ok(false);
        }
        self.matcher.extract(&[kind])?;
        Ok(true)
    }
}

fn negate(mut expr: Expression, count: usize) -> Expression {
    for _ in 0..count {
        expr = Expression::not(expr);
    }
    expr
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    let operator = match kind {
        TokenKind::Plus => BinaryOperator::Plus,
        TokenKind::Minus => BinaryOperator::Minus,
        TokenKind::Multiply => BinaryOperator::Multiply,
        TokenKind::Divide => BinaryOperator::Divide,
        TokenKind::Modulo => BinaryOperator::Modulo,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        TokenKind::EqualTo => BinaryOperator::EqualTo,
        TokenKind::NotEqualTo => BinaryOperator::NotEqualTo,
        TokenKind::GreaterThan => BinaryOperator::GreaterThan,
        TokenKind::GreaterThanOrEqualTo => BinaryOperator::GreaterThanOrEqualTo,
        TokenKind::LessThan => BinaryOperator::LessThan,
        TokenKind::LessThanOrEqualTo => BinaryOperator::LessThanOrEqualTo,
        _ => return None,
    };
    Some(operator)
}
