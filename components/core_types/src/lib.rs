//! Core diagnostic types shared by the Wordy toolchain.
//!
//! This crate provides the foundational types for reporting problems in
//! Wordy source text.
//!
//! # Overview
//!
//! - [`ParseError`] - Parse failure with message and position
//! - [`ErrorKind`] - Categories of parse failures
//! - [`SourcePosition`] - Source code location
//! - [`LineMapper`] - Byte offset to line/column translation
//!
//! # Examples
//!
//! ```
//! use core_types::{LineMapper, ErrorKind, ParseError};
//!
//! let source = "print 1\nprint ?";
//! let mapper = LineMapper::new(source);
//!
//! let error = ParseError::new(
//!     ErrorKind::InvalidExpression,
//!     "Invalid expression \"?\".",
//!     mapper.position(14),
//! );
//! assert_eq!(error.position.line, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, ParseError};
pub use source::{LineMapper, SourcePosition};
