//! Lexical analyzer for registration source text.
//!
//! The lexer converts source text into [`Token`]s on demand: the parser pulls
//! one token at a time through [`Lexer::next_token`]. The cursor only moves
//! forward, and once the input is exhausted every call returns an
//! END_OF_INPUT token.
//!
//! Unrecognized characters are not errors at this level; they become
//! ILLEGAL tokens for the parser to report. The only condition the lexer
//! reports itself is a string literal left open at the end of the input.

use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, opt, preceded},
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{any, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
    tokens::{Token, TokenKind},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Skip spaces, tabs, carriage returns and newlines.
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    multispace0.parse_next(input)
}

/// Parse `:` or `;`
fn punctuation<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    alt((
        ':'.value(TokenKind::Colon),
        ';'.value(TokenKind::Semicolon),
    ))
    .with_taken()
    .parse_next(input)
}

/// Parse a maximal run of ASCII letters and underscores.
///
/// The exact words `true` and `false` are booleans; everything else is an
/// identifier. Digits are not part of words.
fn word<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_')
        .map(|word: &'a str| match word {
            "true" | "false" => (TokenKind::Boolean, word),
            _ => (TokenKind::Identifier, word),
        })
        .parse_next(input)
}

/// Parse a double-quoted string with no escape processing.
///
/// Returns the content between the quotes and whether the closing quote was
/// found. An unterminated string runs to the end of the input.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<(&'a str, bool)> {
    preceded('"', (take_while(0.., |c: char| c != '"'), opt('"')))
        .map(|(content, closing): (&'a str, Option<char>)| (content, closing.is_some()))
        .parse_next(input)
}

/// Consume a single character the language does not recognize.
fn illegal<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    any.take().parse_next(input)
}

/// Pull-based lexer over a borrowed source string.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: Input<'a>,
    len: usize,
    finished: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            input: LocatingSlice::new(source),
            len: source.len(),
            finished: false,
            diagnostics: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// After the first END_OF_INPUT token, every call returns END_OF_INPUT
    /// again.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.finished {
            return Token::end_of_input(self.len);
        }

        // multispace0 accepts the empty string, so this cannot fail
        let _ = whitespace(&mut self.input);

        let start = self.input.current_token_start();
        let Some(current) = self.input.peek_token() else {
            self.finished = true;
            return Token::end_of_input(self.len);
        };

        let scanned = match current {
            ':' | ';' => punctuation(&mut self.input),
            '"' => self.string(start),
            c if c.is_ascii_alphabetic() || c == '_' => word(&mut self.input),
            _ => illegal(&mut self.input).map(|ch| (TokenKind::Illegal, ch)),
        };

        // Every branch was selected by its first character, so a scan failure
        // is not expected. Fall back to an ILLEGAL token to keep advancing.
        let (kind, literal) = scanned.unwrap_or_else(|_| {
            let ch = illegal(&mut self.input).unwrap_or_default();
            (TokenKind::Illegal, ch)
        });

        let end = self.input.current_token_start();
        Token::new(kind, literal, Span::new(start..end))
    }

    /// Scan a string literal starting at `start`, recording a diagnostic if
    /// the input ends before the closing quote.
    fn string(&mut self, start: usize) -> IResult<(TokenKind, &'a str)> {
        let (content, terminated) = string_literal(&mut self.input)?;

        if !terminated {
            let end = self.input.current_token_start();
            self.diagnostics.push(
                Diagnostic::error("unterminated string literal")
                    .with_code(ErrorCode::E001)
                    .with_label(
                        Span::new(start..end),
                        ErrorCode::E001.description(),
                    )
                    .with_help("add closing `\"`"),
            );
        }

        Ok((TokenKind::String, content))
    }

    /// Take the diagnostics recorded since the last call, in detection order.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, END_OF_INPUT.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::EndOfInput)).then_some(token)
    }
}

/// Tokenize a whole string, returning every token before END_OF_INPUT and
/// the lexer diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.take_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).0.iter().map(|t| t.kind).collect()
    }

    fn test_single_token(input: &str, kind: TokenKind, literal: &str) {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, kind, "Wrong kind for {input:?}");
        assert_eq!(token.literal, literal, "Wrong literal for {input:?}");
    }

    #[test]
    fn test_punctuation() {
        test_single_token(":", TokenKind::Colon, ":");
        test_single_token(";", TokenKind::Semicolon, ";");
    }

    #[test]
    fn test_identifiers() {
        test_single_token("name", TokenKind::Identifier, "name");
        test_single_token("_private", TokenKind::Identifier, "_private");
        test_single_token("paternal_surname", TokenKind::Identifier, "paternal_surname");
        test_single_token("CamelCase", TokenKind::Identifier, "CamelCase");
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        test_single_token("true", TokenKind::Boolean, "true");
        test_single_token("false", TokenKind::Boolean, "false");
        test_single_token("True", TokenKind::Identifier, "True");
        test_single_token("FALSE", TokenKind::Identifier, "FALSE");
        test_single_token("trueish", TokenKind::Identifier, "trueish");
    }

    #[test]
    fn test_digits_end_identifiers() {
        let (tokens, _) = tokenize("rider1");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, "rider");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "1");
    }

    #[test]
    fn test_string_literals() {
        test_single_token("\"hello world\"", TokenKind::String, "hello world");
        test_single_token("\"\"", TokenKind::String, "");
        test_single_token("\"a;b:c\"", TokenKind::String, "a;b:c");
        // No escape processing
        test_single_token("\"C:\\docs\\r.pdf\"", TokenKind::String, "C:\\docs\\r.pdf");
    }

    #[test]
    fn test_string_spans_cover_quotes() {
        let (tokens, _) = tokenize("  \"Ana\"");
        assert_eq!(tokens[0].span, Span::new(2..7));
    }

    #[test]
    fn test_illegal_characters() {
        test_single_token("@", TokenKind::Illegal, "@");
        test_single_token("=", TokenKind::Illegal, "=");
        test_single_token("é", TokenKind::Illegal, "é");
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            kinds(" name\t:\r\n\"Ana\" ;\n"),
            [
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::String,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_statement_tokens() {
        let (tokens, diagnostics) = tokenize("email: \"ana@gmail.com\"; payment_completed: true;");
        assert!(diagnostics.is_empty());

        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.literal)).collect();
        assert_eq!(
            pairs,
            [
                (TokenKind::Identifier, "email"),
                (TokenKind::Colon, ":"),
                (TokenKind::String, "ana@gmail.com"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Identifier, "payment_completed"),
                (TokenKind::Colon, ":"),
                (TokenKind::Boolean, "true"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::EndOfInput);
            assert_eq!(token.literal, "");
            assert_eq!(token.span, Span::new(1..1));
        }
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(kinds("").is_empty());
        assert!(kinds(" \t\r\n ").is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = tokenize("name: \"Ana; email: \"x\";");

        // The open string swallows everything up to the next quote, leaving
        // the final quote of the input unterminated
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].literal, "Ana; email: ");
        assert_eq!(tokens[3].literal, "x");
        assert_eq!(tokens[4].kind, TokenKind::String);
        assert_eq!(tokens[4].literal, ";");
        assert_eq!(diagnostics.len(), 1);

        let (tokens, diagnostics) = tokenize("name: \"Ana;");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].literal, "Ana;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E001));
        assert_eq!(diagnostics[0].labels()[0].span(), Span::new(6..11));
    }

    #[test]
    fn test_take_diagnostics_drains() {
        let mut lexer = Lexer::new("\"open");
        lexer.next_token();
        assert_eq!(lexer.take_diagnostics().len(), 1);
        assert!(lexer.take_diagnostics().is_empty());
    }
}
