//! Parser error types and helpers

use core_types::{ErrorKind, ParseError, SourcePosition};

/// Create a syntax error of the given kind at a position
pub fn syntax_error(
    kind: ErrorKind,
    message: impl Into<String>,
    position: SourcePosition,
) -> ParseError {
    ParseError::new(kind, message, position)
}

/// Create an unexpected token error listing the accepted alternatives
pub fn unexpected_token(expected: Vec<String>, position: SourcePosition) -> ParseError {
    ParseError {
        kind: ErrorKind::UnexpectedToken,
        message: format!("Expected: {}.", expected.join(" | ")),
        position,
        expected,
    }
}

/// Create an unexpected end of input error
pub fn unexpected_eof(position: SourcePosition) -> ParseError {
    syntax_error(ErrorKind::UnexpectedEndOfInput, "Unexpected EOF.", position)
}

/// Create an error for a reserved phrase used as a name or literal
pub fn reserved_word(word: &str, position: SourcePosition) -> ParseError {
    syntax_error(
        ErrorKind::ReservedWord,
        format!("Unexpected identifier \"{}\".", word),
        position,
    )
}
