//! [`ParseError`], the failure returned by [`parse`](crate::parse).

use std::fmt;

use crate::error::Diagnostic;

/// Result of a single grammar rule: the first problem abandons the statement.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Every diagnostic from the stage that rejected the source.
///
/// Holds either syntax diagnostics or validation diagnostics, never a mix,
/// and is never empty when produced by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Diagnostics in detection order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Just the messages, in detection order.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(Diagnostic::message).collect()
    }

    /// `true` when validation rejected well-formed source.
    pub fn is_semantic(&self) -> bool {
        self.diagnostics
            .first()
            .and_then(Diagnostic::code)
            .is_some_and(|code| code.is_semantic())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Shows the first diagnostic and how many follow it.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.diagnostics.split_first() else {
            return Ok(());
        };
        fmt::Display::fmt(first, f)?;
        if !rest.is_empty() {
            write!(f, " (+{} more)", rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}
