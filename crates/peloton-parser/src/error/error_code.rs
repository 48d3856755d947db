//! Error codes for the Peloton diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A string was opened with a quote but the input ended before the
    /// closing quote.
    E001,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Expected identifier.
    ///
    /// A statement must start with a field name.
    E100,

    /// Unexpected token.
    ///
    /// The look-ahead token is not the `:` or `;` the statement requires.
    E101,

    /// Invalid value type.
    ///
    /// A field value must be a quoted string or `true`/`false`.
    E102,

    /// Invalid boolean literal.
    E103,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// One of `name`, `paternal_surname`, `email`, `sex` or `category` is absent.
    E200,

    /// Field type mismatch.
    ///
    /// A field that must hold a string holds a boolean.
    E201,

    /// Email domain not accepted.
    E202,

    /// Invalid sex value.
    ///
    /// The value must be exactly `M` or `F`.
    E203,

    /// Invalid category.
    E204,

    /// Missing payment receipt.
    ///
    /// `payment_completed` is true but no receipt path was given.
    E205,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "E001",
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "unterminated string literal",
            // Parser errors
            ErrorCode::E100 => "expected identifier",
            ErrorCode::E101 => "unexpected token",
            ErrorCode::E102 => "invalid value type",
            ErrorCode::E103 => "invalid boolean literal",
            // Validation errors
            ErrorCode::E200 => "missing required field",
            ErrorCode::E201 => "field type mismatch",
            ErrorCode::E202 => "email domain not accepted",
            ErrorCode::E203 => "invalid sex value",
            ErrorCode::E204 => "invalid category",
            ErrorCode::E205 => "missing payment receipt",
        }
    }

    /// Returns `true` for codes raised by the semantic validator.
    pub fn is_semantic(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E205.to_string(), "E205");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated string literal");
        assert_eq!(ErrorCode::E101.description(), "unexpected token");
        assert_eq!(ErrorCode::E200.description(), "missing required field");
    }

    #[test]
    fn test_error_code_phase() {
        assert!(!ErrorCode::E001.is_semantic());
        assert!(!ErrorCode::E102.is_semantic());
        assert!(ErrorCode::E202.is_semantic());
    }
}
