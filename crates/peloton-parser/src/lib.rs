//! # Peloton Parser
//!
//! Front end for the Peloton registration language: a flat list of
//! `field: value;` statements whose values are double-quoted strings or the
//! bare words `true` and `false`.
//!
//! ## Usage
//!
//! ```
//! # use peloton_parser::{parse, ValidationConfig, ParseError, Value};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         name: "Ana";
//!         paternal_surname: "Pérez";
//!         email: "ana@gmail.com";
//!         sex: "F";
//!         category: "Elite";
//!         payment_completed: false;
//!     "#;
//!
//!     let attributes = parse(source, &ValidationConfig::default())?;
//!     assert_eq!(attributes.get("payment_completed"), Some(&Value::Boolean(false)));
//!     Ok(())
//! }
//! ```
//!
//! The phases are also available on their own: [`Lexer`] produces tokens on
//! demand, [`Parser`] builds an [`Attributes`] mapping plus syntax
//! diagnostics, and [`validate()`] checks the registration rules.

pub mod error;
pub mod fields;

mod attributes;
mod lexer;
mod parser;
mod span;
mod tokens;
mod validate;

pub use attributes::{Attribute, Attributes, TypeMismatch, Value, ValueKind};
pub use error::{Diagnostic, ParseError};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse_program};
pub use span::Span;
pub use tokens::{Token, TokenKind};
pub use validate::{ValidationConfig, validate, validate_with};

use log::debug;

use error::DiagnosticCollector;

/// Parse and validate registration source text.
///
/// This is the main entry point. It runs the pipeline:
///
/// 1. **Lex and parse** - Build the attribute mapping, collecting syntax
///    diagnostics
/// 2. **Validate** - Apply the registration rules, only if step 1 reported
///    nothing
///
/// # Arguments
///
/// * `source` - The registration source text
/// * `config` - Email domain and category rules for validation
///
/// # Errors
///
/// Returns a [`ParseError`] holding either the syntax diagnostics or the
/// semantic diagnostics, never both.
pub fn parse(source: &str, config: &ValidationConfig) -> Result<Attributes, ParseError> {
    // Step 1: Lex and parse
    let (attributes, diagnostics) = parse_program(source);
    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(); "Syntax errors, skipping validation");
        return Err(ParseError::new(diagnostics));
    }

    // Step 2: Validate
    let mut collector = DiagnosticCollector::new();
    collector.extend(validate_with(&attributes, config));
    collector.finish()?;

    Ok(attributes)
}
