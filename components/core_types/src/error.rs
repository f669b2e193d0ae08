//! Parse error types.
//!
//! Every failure aborts the parse, so a [`ParseError`] is always the first
//! and only diagnostic for a source unit.

use crate::SourcePosition;
use thiserror::Error;

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// None of the candidate token kinds matched, or a required keyword is missing
    UnexpectedToken,
    /// More input was required but the source ended
    UnexpectedEndOfInput,
    /// A reserved phrase appeared where a name or literal was expected
    ReservedWord,
    /// Variable declaration with neither a type nor an initial value
    MissingTypeOrInitializer,
    /// Function parameter without a type annotation
    MissingParameterType,
    /// Function declared anywhere other than the top level
    NestedFunction,
    /// Text that is neither a boolean, string, number, nor variable name
    InvalidExpression,
    /// Expression nests more operators than the parser accepts
    ExpressionTooDeep,
    /// Parser invariant violated
    Internal,
}

/// A parse error with a message and source position.
///
/// For [`ErrorKind::UnexpectedToken`] errors, `expected` holds the sorted,
/// deduplicated surface forms that would have been accepted.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ParseError, SourcePosition};
///
/// let error = ParseError {
///     kind: ErrorKind::UnexpectedEndOfInput,
///     message: "Unexpected EOF.".to_string(),
///     position: SourcePosition { line: 3, column: 4, offset: 20 },
///     expected: vec![],
/// };
///
/// assert_eq!(error.to_string(), "L3:C4\nUnexpected EOF.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("L{}:C{}\n{}", .position.line, .position.column, .message)]
pub struct ParseError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub position: SourcePosition,
    /// Accepted alternatives at the error position, if any
    pub expected: Vec<String>,
}

impl ParseError {
    /// Create an error without an expected-alternatives list
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            expected: Vec::new(),
        }
    }
}
