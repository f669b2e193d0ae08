//! Wordy tokenizer - matches phrase patterns on demand at a cursor
//!
//! There is no token stream. The parser asks the [`TokenMatcher`] whether one
//! of a handful of token kinds appears next, because whether a word is a
//! keyword or a name depends on where in the grammar it shows up.

use crate::error::{reserved_word, unexpected_eof, unexpected_token};
use crate::token::{RuleTable, TokenKind, END_OF_INPUT_SURFACE, STANDARD_RULES};
use core_types::{LineMapper, ParseError, SourcePosition};
use std::collections::BTreeSet;

/// Characters that open (and close) a string literal
pub const QUOTE_CHARACTERS: [char; 3] = ['\'', '"', '`'];

/// Cursor-based phrase matcher over one source text.
///
/// The cursor only moves forward, and only on a successful extraction.
/// Candidates that fail at the current position are remembered so that the
/// next lexical error can list every alternative that was tried there.
#[derive(Debug)]
pub struct TokenMatcher<'a> {
    source: &'a str,
    cursor: usize,
    expected: BTreeSet<String>,
    rules: &'a RuleTable,
}

impl<'a> TokenMatcher<'a> {
    /// Create a matcher using the standard keyword table
    pub fn new(source: &'a str) -> Self {
        Self::with_rules(source, &STANDARD_RULES)
    }

    /// Create a matcher with an explicit rule table
    pub fn with_rules(source: &'a str, rules: &'a RuleTable) -> Self {
        Self {
            source,
            cursor: 0,
            expected: BTreeSet::new(),
            rules,
        }
    }

    /// Current byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Offset of the next non-whitespace character (or the source length)
    pub fn next_offset(&self) -> usize {
        self.skip_whitespace(self.cursor)
    }

    /// The rule table this matcher was built with
    pub fn rules(&self) -> &'a RuleTable {
        self.rules
    }

    /// Translate a byte offset into a [`SourcePosition`]
    pub fn position(&self, offset: usize) -> SourcePosition {
        LineMapper::new(self.source).position(offset)
    }

    /// Report which candidate would match next, without moving the cursor.
    ///
    /// Candidates are tried in the order given and the first match wins.
    pub fn peek(&mut self, candidates: &[TokenKind]) -> Option<TokenKind> {
        self.find_match(candidates).map(|(kind, _)| kind)
    }

    /// Consume one of `candidates` or fail with the alternatives expected here
    pub fn extract(&mut self, candidates: &[TokenKind]) -> Result<TokenKind, ParseError> {
        match self.find_match(candidates) {
            Some((kind, next)) => {
                tracing::trace!(?kind, offset = self.next_offset(), "extracted token");
                self.advance_to(next);
                Ok(kind)
            }
            None => {
                let expected: Vec<String> = self.expected.iter().cloned().collect();
                Err(unexpected_token(expected, self.position(self.next_offset())))
            }
        }
    }

    /// Consume the next run of non-whitespace characters.
    ///
    /// Fails at end of input, and when the run spells a reserved phrase.
    pub fn extract_raw_token(&mut self) -> Result<String, ParseError> {
        let start = self.next_offset();
        if start == self.source.len() {
            return Err(unexpected_eof(self.position(start)));
        }

        let end = self.skip_non_whitespace(start);
        let token = &self.source[start..end];
        if self.rules.is_reserved(token) {
            return Err(reserved_word(token, self.position(start)));
        }

        tracing::trace!(token, offset = start, "extracted raw token");
        self.advance_to(self.skip_whitespace(end));
        Ok(token.to_string())
    }

    /// Consume a quoted string literal and return its contents.
    ///
    /// Returns `None`, leaving the cursor alone, when the next character is
    /// not a quote or the literal is never closed. There are no escapes.
    pub fn extract_string_literal(&mut self) -> Option<String> {
        let start = self.next_offset();
        let quote = self.source[start..]
            .chars()
            .next()
            .filter(|c| QUOTE_CHARACTERS.contains(c))?;

        let body_start = start + quote.len_utf8();
        let length = self.source[body_start..].find(quote)?;
        let body_end = body_start + length;
        let value = self.source[body_start..body_end].to_string();

        tracing::trace!(offset = start, "extracted string literal");
        self.advance_to(self.skip_whitespace(body_end + quote.len_utf8()));
        Some(value)
    }

    fn advance_to(&mut self, next: usize) {
        self.cursor = next;
        self.expected.clear();
    }

    fn find_match(&mut self, candidates: &[TokenKind]) -> Option<(TokenKind, usize)> {
        let start = self.next_offset();

        for &kind in candidates {
            if kind == TokenKind::EndOfInput {
                if start == self.source.len() {
                    return Some((kind, start));
                }
                self.expected.insert(END_OF_INPUT_SURFACE.to_string());
                continue;
            }

            match self.rules.pattern(kind) {
                Some(pattern) => {
                    if let Some(next) = self.match_pattern(start, pattern) {
                        return Some((kind, next));
                    }
                    self.expected.insert(pattern.to_string());
                }
                None => {
                    self.expected.insert(format!("{:?}", kind));
                }
            }
        }

        None
    }

    /// Match `pattern` at `start`; returns the offset after trailing whitespace
    fn match_pattern(&self, start: usize, pattern: &str) -> Option<usize> {
        let mut pos = start;

        for expected in pattern.chars() {
            if expected == ' ' {
                let next = self.skip_whitespace(pos);
                if next == pos {
                    return None;
                }
                pos = next;
            } else {
                let actual = self.source[pos..].chars().next()?;
                if !actual.to_lowercase().eq(std::iter::once(expected)) {
                    return None;
                }
                pos += actual.len_utf8();
            }
        }

        // The match must end on a word boundary
        match self.source[pos..].chars().next() {
            None => Some(pos),
            Some(c) if c.is_whitespace() => Some(self.skip_whitespace(pos)),
            Some(_) => None,
        }
    }

    fn skip_whitespace(&self, from: usize) -> usize {
        self.source[from..]
            .find(|c: char| !c.is_whitespace())
            .map_or(self.source.len(), |i| from + i)
    }

    fn skip_non_whitespace(&self, from: usize) -> usize {
        self.source[from..]
            .find(char::is_whitespace)
            .map_or(self.source.len(), |i| from + i)
    }
}
