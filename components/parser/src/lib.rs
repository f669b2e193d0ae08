//! Wordy Parser Component
//!
//! Provides the phrase matcher, recursive descent parser and AST for the
//! Wordy language, an English-like scripting language whose keywords are
//! multi-word phrases such as `define variable` or `end of while`.
//!
//! # Overview
//!
//! - [`TokenMatcher`] - Matches keyword phrases on demand at a cursor
//! - [`TokenKind`] - Keyword categories and the [`RuleTable`] that spells them
//! - [`Parser`] - Recursive descent parser producing a [`Program`]
//! - [`Statement`], [`Expression`] - AST node types
//!
//! # Example
//!
//! ```
//! use parser::{Item, Parser, Statement};
//!
//! let source = "define variable x to be number initialized to 42";
//! let program = Parser::new(source).parse().unwrap();
//!
//! assert!(matches!(
//!     program.items[0],
//!     Item::Statement(Statement::VariableDeclaration { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    Atom, BinaryOperator, ConditionalBlock, Expression, Function, Item, Parameter, Program,
    Statement, TypeInfo, UnaryOperator, VariableType,
};
pub use core_types::{ErrorKind, ParseError, SourcePosition};
pub use lexer::TokenMatcher;
pub use parser::{Parser, MAX_EXPRESSION_DEPTH};
pub use token::{MatchingRule, RuleTable, TokenKind, MATCHING_RULES};

/// Parse Wordy source text into a [`Program`]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse()
}
