//! tealc-lex - Lexical Analysis for TEAL
//!
//! TEAL's lexical grammar is deliberately small: values, comments, and line
//! terminators. There are no operators, no nesting, and no multi-line
//! constructs, so the lexer is a single forward pass with byte-accurate
//! positions and full error recovery: any input, including binary garbage,
//! tokenizes to completion.
//!
//! The stream is restartable: [`Lexer::scan`] / [`Lexer::curr`] /
//! [`Lexer::rewind`] give the parser its one token of lookback, and every
//! token is memoized so the finished list can be reused for highlighting
//! without a second pass.

pub mod cursor;
mod lexer;
mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
