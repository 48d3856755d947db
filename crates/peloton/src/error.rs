//! Error types for Peloton operations.
//!
//! This module provides the main error type [`PelotonError`] which wraps
//! the error conditions that can occur while turning registration source
//! into a participant record.

use std::io;

use thiserror::Error;

use peloton_parser::{ParseError, TypeMismatch, ValueKind};

/// The main error type for Peloton operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the syntax or semantic diagnostics together
/// with the source text they point into, for rich error reporting.
#[derive(Debug, Error)]
pub enum PelotonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl PelotonError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

/// Failure to build a participant record from an attribute mapping.
///
/// Raised for mappings that skipped validation, and for fields the
/// validator does not type-check such as a boolean `name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("field '{0}' is missing")]
    Missing(&'static str),

    #[error("field '{field}' must be a {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl From<TypeMismatch> for RecordError {
    fn from(err: TypeMismatch) -> Self {
        Self::TypeMismatch {
            field: err.field,
            expected: err.expected,
            found: err.found,
        }
    }
}

impl RecordError {
    /// The value kind a field was expected to hold, if this is a type error.
    pub fn expected_kind(&self) -> Option<ValueKind> {
        match self {
            Self::TypeMismatch { expected, .. } => Some(*expected),
            Self::Missing(_) => None,
        }
    }
}
