//! Wordy Code Generation Component
//!
//! Turns a parsed [`Program`] back into text:
//!
//! - [`EcmaScriptGenerator`] - Emits JavaScript that runs against a host `VM` object
//! - [`SurfaceRenderer`] - Emits canonical Wordy source
//!
//! # Example
//!
//! ```
//! use codegen::{compile, Target};
//!
//! let js = compile("define variable x to be initialized to 42", Target::EcmaScript).unwrap();
//! assert_eq!(js, "var x = 42;\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecmascript;
pub mod surface;

pub use ecmascript::EcmaScriptGenerator;
pub use surface::SurfaceRenderer;

use core_types::ParseError;
use parser::Program;
use std::fmt;
use std::str::FromStr;

/// A backend that renders a [`Program`] as text
pub trait CodeGenerator {
    /// Render the whole program
    fn generate(&mut self, program: &Program) -> String;
}

/// Output language selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// JavaScript
    #[default]
    EcmaScript,
    /// Canonical Wordy source
    Wordy,
}

impl Target {
    /// Create the generator for this target
    pub fn generator(self) -> Box<dyn CodeGenerator> {
        match self {
            Target::EcmaScript => Box::new(EcmaScriptGenerator::new()),
            Target::Wordy => Box::new(SurfaceRenderer::new()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::EcmaScript => write!(f, "js"),
            Target::Wordy => write!(f, "wordy"),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" | "ecmascript" => Ok(Target::EcmaScript),
            "wordy" => Ok(Target::Wordy),
            other => Err(format!("Unknown target '{}'. Expected js or wordy.", other)),
        }
    }
}

/// Render an already parsed program for `target`
pub fn generate(program: &Program, target: Target) -> String {
    tracing::debug!(%target, "generating code");
    target.generator().generate(program)
}

/// Parse `source` and render it for `target`
pub fn compile(source: &str, target: Target) -> Result<String, ParseError> {
    let program = parser::parse(source)?;
    Ok(generate(&program, target))
}
