//! Wordy Compiler CLI Library
//!
//! Provides the Compiler struct and supporting modules for the `wordy` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod compiler;
pub mod error;
pub mod repl;

pub use cli::{Cli, TargetArg};
pub use compiler::{Compilation, Compiler};
pub use error::{CliError, CliResult};
