//! Recursive-descent parser for registration statements.
//!
//! The parser pulls tokens from a [`Lexer`] with one token of look-ahead and
//! builds an [`Attributes`] mapping from the grammar:
//!
//! ```text
//! statement := IDENTIFIER COLON value SEMICOLON
//! value     := STRING | BOOLEAN
//! ```
//!
//! Problems never stop the parse. A malformed statement is abandoned with a
//! diagnostic, the parser skips exactly one token, and the statement loop
//! resumes. This recovery is coarse: the remaining tokens of a broken
//! statement are usually reported again as further diagnostics.

use log::{debug, trace};

use crate::{
    attributes::{Attribute, Attributes, Value},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Result},
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Single look-ahead parser over a token stream.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    peek: Token<'a>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime `current` and `peek` from the lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::end_of_input(0),
            peek: Token::end_of_input(0),
            diagnostics: DiagnosticCollector::new(),
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parse every statement until END_OF_INPUT.
    ///
    /// Returns the mapping built from the well-formed statements and the
    /// syntax diagnostics in detection order. A repeated field keeps its last
    /// value and is not itself reported.
    pub fn parse_program(mut self) -> (Attributes, Vec<Diagnostic>) {
        let mut attributes = Attributes::new();

        while !self.current.is(TokenKind::EndOfInput) {
            match self.parse_statement() {
                Ok((name, attribute)) => {
                    if attributes.insert(name, attribute).is_some() {
                        trace!(field = name; "Field redefined, keeping the later value");
                    }
                }
                Err(diagnostic) => {
                    trace!(diagnostic:% = diagnostic; "Abandoning statement");
                    self.diagnostics.emit(diagnostic);
                }
            }

            // Step past the `;` of a complete statement, or skip the token
            // where a broken one stopped. Either way at least one token is
            // consumed per iteration.
            self.advance();
        }

        debug!(
            fields = attributes.len(),
            diagnostics = self.diagnostics.len();
            "Parsed registration source"
        );

        (attributes, self.diagnostics.into_diagnostics())
    }

    /// Shift the look-ahead window by one token, collecting any lexer
    /// diagnostics raised while scanning the new look-ahead.
    fn advance(&mut self) {
        self.current = self.peek;
        self.peek = self.lexer.next_token();
        self.diagnostics.extend(self.lexer.take_diagnostics());
    }

    /// Parse `IDENTIFIER COLON value SEMICOLON`.
    ///
    /// On success `current` is the terminating `;`.
    fn parse_statement(&mut self) -> Result<(&'a str, Attribute)> {
        if !self.current.is(TokenKind::Identifier) {
            return Err(Diagnostic::error(format!(
                "expected identifier, got {}",
                self.current.literal
            ))
            .with_code(ErrorCode::E100)
            .with_label(self.current.span, "expected a field name")
            .with_help("statements have the form `field: value;`"));
        }
        let name = self.current;

        self.expect_peek(TokenKind::Colon)?;
        self.advance();

        let value = self.parse_value()?;

        self.expect_peek(TokenKind::Semicolon)?;

        let span = name.span.union(self.current.span);
        Ok((name.literal, Attribute::new(value, span)))
    }

    /// Convert the current token into a [`Value`].
    fn parse_value(&self) -> Result<Value> {
        let token = self.current;
        match token.kind {
            TokenKind::String => Ok(Value::String(token.literal.to_string())),
            TokenKind::Boolean => token.literal.parse::<bool>().map(Value::Boolean).map_err(|_| {
                Diagnostic::error(format!(
                    "could not convert '{}' to a boolean",
                    token.literal
                ))
                .with_code(ErrorCode::E103)
                .with_label(token.span, ErrorCode::E103.description())
            }),
            kind => Err(Diagnostic::error(format!("invalid value type {kind}"))
                .with_code(ErrorCode::E102)
                .with_label(token.span, "expected a value")
                .with_help("values are quoted strings or `true`/`false`")),
        }
    }

    /// Advance if the look-ahead token has the expected kind.
    fn expect_peek(&mut self, expected: TokenKind) -> Result<()> {
        if self.peek.is(expected) {
            self.advance();
            return Ok(());
        }

        let (label, help) = match expected {
            TokenKind::Colon => ("expected `:`", "separate the field name and value with `:`"),
            TokenKind::Semicolon => ("expected `;`", "end each statement with `;`"),
            _ => ("unexpected token", "statements have the form `field: value;`"),
        };

        Err(Diagnostic::error(format!(
            "expected token {expected}, got {}",
            self.peek.kind
        ))
        .with_code(ErrorCode::E101)
        .with_label(self.peek.span, label)
        .with_help(help))
    }
}

/// Lex and parse `source` in one step.
///
/// Returns the mapping and the syntax diagnostics; see
/// [`Parser::parse_program`].
pub fn parse_program(source: &str) -> (Attributes, Vec<Diagnostic>) {
    Parser::new(Lexer::new(source)).parse_program()
}
