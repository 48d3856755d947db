//! Token vocabulary shared by the lexer and the parser.

use std::fmt;

use crate::span::Span;

/// The closed set of token kinds in the registration language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Field name, e.g. `email`
    Identifier,
    /// Double-quoted text; the literal excludes the quotes
    String,
    /// The bare words `true` or `false`
    Boolean,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// No more input
    EndOfInput,
    /// Any character the language does not recognize
    Illegal,
}

impl TokenKind {
    /// Returns the upper-case name used in diagnostics (e.g. `"COLON"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub literal: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, literal: &'src str, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    /// The terminal token, positioned at `offset` (normally the input length).
    pub fn end_of_input(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", Span::new(offset..offset))
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.literal),
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "{}", self.literal),
        }
    }
}
