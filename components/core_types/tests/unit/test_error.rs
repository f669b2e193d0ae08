//! Unit tests for ParseError and ErrorKind

use core_types::{ErrorKind, ParseError, SourcePosition};

fn position(line: u32, column: u32, offset: usize) -> SourcePosition {
    SourcePosition {
        line,
        column,
        offset,
    }
}

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_is_comparable() {
        assert_eq!(ErrorKind::ReservedWord, ErrorKind::ReservedWord);
        assert_ne!(ErrorKind::ReservedWord, ErrorKind::UnexpectedToken);
    }
}

#[cfg(test)]
mod parse_error_tests {
    use super::*;

    #[test]
    fn test_parse_error_new_has_no_expected() {
        let error = ParseError::new(ErrorKind::NestedFunction, "nested", position(1, 0, 0));

        assert!(matches!(error.kind, ErrorKind::NestedFunction));
        assert_eq!(error.message, "nested");
        assert!(error.expected.is_empty());
    }

    #[test]
    fn test_parse_error_display_format() {
        let error = ParseError {
            kind: ErrorKind::UnexpectedToken,
            message: "Expected: do | plus.".to_string(),
            position: position(4, 12, 57),
            expected: vec!["do".to_string(), "plus".to_string()],
        };

        assert_eq!(error.to_string(), "L4:C12\nExpected: do | plus.");
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let error = ParseError::new(ErrorKind::Internal, "oops", position(1, 0, 0));
        let boxed: Box<dyn std::error::Error> = Box::new(error);

        assert!(boxed.source().is_none());
    }
}
