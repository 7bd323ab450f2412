//! The TEAL lexer.
//!
//! A restartable token stream over UTF-8 source bytes. Tokens are lexed on
//! demand and memoized, so [`Lexer::rewind`] steps back without re-reading
//! the input and a full pass leaves the complete token list behind for the
//! semantic index.
//!
//! All lexical errors are recoverable: the lexer reports a diagnostic,
//! emits a best-effort token, and resynchronizes at the next whitespace or
//! line terminator. Scanning any byte sequence terminates.

use tealc_util::{Diagnostic, RuleId};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Restartable tokenizer.
///
/// # Examples
///
/// ```
/// use tealc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("int 1 // push one\n");
/// assert!(lexer.scan());
/// assert_eq!(lexer.curr().value, "int");
/// lexer.rewind();
/// assert!(lexer.scan());
/// assert_eq!(lexer.curr().value, "int");
/// ```
pub struct Lexer<'a> {
    cursor: Cursor<'a>,

    /// Every token lexed so far, in source order.
    tokens: Vec<Token>,

    /// Number of tokens consumed by the caller. The current token is
    /// `tokens[consumed - 1]`.
    consumed: usize,

    /// Accumulated lexical errors.
    errors: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            consumed: 0,
            errors: Vec::new(),
        }
    }

    /// Advances to the next token. Returns false at end of input.
    pub fn scan(&mut self) -> bool {
        if self.consumed < self.tokens.len() {
            self.consumed += 1;
            return true;
        }
        match self.lex_next() {
            Some(token) => {
                self.tokens.push(token);
                self.consumed += 1;
                true
            }
            None => false,
        }
    }

    /// The token most recently scanned.
    ///
    /// Valid only after a [`scan`](Lexer::scan) that returned true; calling
    /// it earlier is a caller bug.
    pub fn curr(&self) -> &Token {
        debug_assert!(self.consumed > 0, "curr() before a successful scan()");
        &self.tokens[self.consumed - 1]
    }

    /// Steps back one token, so the next [`scan`](Lexer::scan) yields the
    /// current token again. One token of lookback is always available.
    pub fn rewind(&mut self) {
        self.consumed = self.consumed.saturating_sub(1);
    }

    /// Lexical errors accumulated so far.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Drains the remaining input and returns the full token list and all
    /// lexical errors.
    pub fn into_parts(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while self.scan() {}
        (self.tokens, self.errors)
    }

    fn lex_next(&mut self) -> Option<Token> {
        // Inter-token whitespace is consumed silently.
        while let Some(b' ' | b'\t') = self.cursor.current() {
            self.cursor.advance();
        }

        let b = self.cursor.current()?;
        match b {
            b'\n' | b'\r' => Some(self.lex_eol()),
            b'/' if self.cursor.peek(1) == Some(b'/') => Some(self.lex_comment()),
            b'"' => Some(self.lex_string()),
            _ => Some(self.lex_value()),
        }
    }

    /// `\n`, `\r`, and `\r\n` each produce exactly one Eol token.
    fn lex_eol(&mut self) -> Token {
        let line = self.cursor.line();
        let begin = self.cursor.column();
        let value = if self.cursor.current() == Some(b'\r') {
            if self.cursor.peek(1) == Some(b'\n') {
                "\r\n"
            } else {
                "\r"
            }
        } else {
            "\n"
        };
        let len = value.len();
        self.cursor.advance_newline(len);
        Token::new(TokenKind::Eol, value, line, begin, begin + len as u32)
    }

    /// A comment runs from `//` to the next line terminator. The token's
    /// value excludes the leading slashes; its span includes them.
    fn lex_comment(&mut self) -> Token {
        let line = self.cursor.line();
        let begin = self.cursor.column();
        self.cursor.advance();
        self.cursor.advance();

        let start = self.cursor.offset();
        while let Some(b) = self.cursor.current() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.cursor.advance();
        }
        let value = self.cursor.slice_from(start).to_owned();
        Token::new(TokenKind::Comment, value, line, begin, self.cursor.column())
    }

    /// A string starts with `"` and ends at the first unescaped `"`. Only
    /// `\"` is special; every other byte passes through. A string that hits
    /// the end of the line or file unterminated is reported and closed where
    /// it stands, so the token stays on one line.
    fn lex_string(&mut self) -> Token {
        let line = self.cursor.line();
        let begin = self.cursor.column();
        let start = self.cursor.offset();
        self.cursor.advance();

        let mut terminated = false;
        while let Some(b) = self.cursor.current() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            if b == b'\\' && self.cursor.peek(1) == Some(b'"') {
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            self.cursor.advance();
            if b == b'"' {
                terminated = true;
                break;
            }
        }

        let end = self.cursor.column();
        if !terminated {
            self.errors.push(Diagnostic::error(
                RuleId::SYNTAX,
                line,
                begin,
                end,
                "unterminated string",
            ));
        }
        let value = self.cursor.slice_from(start).to_owned();
        Token::new(TokenKind::Value, value, line, begin, end)
    }

    /// A bare value is a maximal run of bytes not terminated by whitespace,
    /// a line terminator, or the start of a comment.
    fn lex_value(&mut self) -> Token {
        let line = self.cursor.line();
        let begin = self.cursor.column();
        let start = self.cursor.offset();

        while let Some(b) = self.cursor.current() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                break;
            }
            if b == b'/' && self.cursor.peek(1) == Some(b'/') {
                break;
            }
            self.cursor.advance();
        }

        let value = self.cursor.slice_from(start).to_owned();
        Token::new(TokenKind::Value, value, line, begin, self.cursor.column())
    }
}

/// Lexes `source` to completion.
///
/// Convenience for callers that want the whole token list up front rather
/// than driving the stream themselves.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).into_parts()
}
