//! Source position and line mapping types for diagnostics.
//!
//! This module provides [`SourcePosition`] for locating errors and
//! [`LineMapper`], which turns a flat byte offset into a line/column pair.

/// Represents a position in source code.
///
/// Used for error reporting to indicate where an issue occurred.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (0-indexed byte distance from the start of the line)
    pub column: u32,
    /// Byte offset from the start of the source text
    pub offset: usize,
}

/// Maps byte offsets to line/column pairs.
///
/// Line starts are precomputed once; lookups binary search the table.
/// `\r`, `\n` and `\r\n` each end a line.
///
/// # Examples
///
/// ```
/// use core_types::LineMapper;
///
/// let mapper = LineMapper::new("print 1\nprint 2");
/// let pos = mapper.position(14);
///
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 6);
/// ```
#[derive(Debug, Clone)]
pub struct LineMapper {
    line_starts: Vec<usize>,
}

impl LineMapper {
    /// Build the line table for `source`
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(i);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    line_starts.push(i);
                }
                _ => i += 1,
            }
        }

        Self { line_starts }
    }

    /// Number of lines in the source (an empty source has one line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the 1-based line and 0-based column of `offset`.
    ///
    /// Offsets past the end of the source resolve against the last line.
    pub fn line_and_column(&self, offset: usize) -> (u32, u32) {
        // line_starts[0] == 0, so at least one start is <= offset
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        (line as u32, (offset - start) as u32)
    }

    /// Returns a full [`SourcePosition`] for `offset`
    pub fn position(&self, offset: usize) -> SourcePosition {
        let (line, column) = self.line_and_column(offset);
        SourcePosition {
            line,
            column,
            offset,
        }
    }
}
