//! Unit tests for SourcePosition and LineMapper

use core_types::{LineMapper, SourcePosition};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_default_is_origin() {
        let pos = SourcePosition::default();

        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_source_position_is_copy() {
        let pos = SourcePosition {
            line: 1,
            column: 2,
            offset: 3,
        };
        let copied = pos;

        assert_eq!(pos, copied);
    }
}

#[cfg(test)]
mod line_mapper_tests {
    use super::*;

    #[test]
    fn test_empty_source_has_one_line() {
        let mapper = LineMapper::new("");

        assert_eq!(mapper.line_count(), 1);
        assert_eq!(mapper.line_and_column(0), (1, 0));
    }

    #[test]
    fn test_position_carries_offset() {
        let mapper = LineMapper::new("print 1\nprint 2\n");
        let pos = mapper.position(10);

        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 10);
    }

    #[test]
    fn test_crlf_counts_as_one_break() {
        let mapper = LineMapper::new("a\r\n\r\nb");

        assert_eq!(mapper.line_count(), 3);
        assert_eq!(mapper.line_and_column(5), (3, 0));
    }

    #[test]
    fn test_lone_carriage_return_breaks_line() {
        let mapper = LineMapper::new("a\rb");

        assert_eq!(mapper.line_and_column(2), (2, 0));
    }

    #[test]
    fn test_many_lines_lookup() {
        let source = "x\n".repeat(1000);
        let mapper = LineMapper::new(&source);

        assert_eq!(mapper.line_count(), 1001);
        assert_eq!(mapper.line_and_column(1001), (501, 1));
        assert_eq!(mapper.line_and_column(1998), (1000, 0));
    }

    #[test]
    fn test_offset_beyond_last_line_start() {
        let mapper = LineMapper::new("one\ntwo");

        assert_eq!(mapper.line_and_column(100), (2, 96));
    }
}
