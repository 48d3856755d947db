//! Error and diagnostic system for the Peloton parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans for pointing at the offending source text
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! Every phase (lexing, parsing, validation) reports problems as
//! [`Diagnostic`]s instead of stopping at the first one. Multiple diagnostics
//! are wrapped in [`ParseError`] when returned from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use peloton_parser::error::{Diagnostic, ErrorCode};
//! # use peloton_parser::Span;
//!
//! let diag = Diagnostic::error("category 'Pro' is not valid")
//!     .with_code(ErrorCode::E204)
//!     .with_label(Span::new(40..55), "unknown category")
//!     .with_help("use one of: Elite, Aficionado, Juvenil");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
