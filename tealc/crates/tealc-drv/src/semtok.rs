//! Semantic tokens and their wire encoding.
//!
//! Editors consume highlighting as a flat stream of five unsigned integers
//! per token, positions delta-encoded against the previous token. The
//! legend below is the fixed palette this core advertises; the class of
//! each token indexes into it.

use serde::Serialize;

/// The advertised semantic-token legend, in index order. No modifiers.
pub static LEGEND: [&str; 9] = [
    "keyword", "string", "comment", "method", "macro", "value", "number", "operator", "function",
];

/// Semantic class of one token. Discriminants index [`LEGEND`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum TokenClass {
    /// Opcode names.
    Keyword = 0,
    /// Quoted byte-string literals.
    String = 1,
    /// Comments.
    Comment = 2,
    /// Label declarations.
    Method = 3,
    /// Pragma directives.
    Macro = 4,
    /// Enumerated immediates: fields and named constants.
    Value = 5,
    /// Integer literals.
    Number = 6,
    /// Unused; reserved in the legend.
    Operator = 7,
    /// Label references.
    Function = 8,
}

impl TokenClass {
    /// Index into [`LEGEND`].
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// One classified token, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticToken {
    /// Line index (zero-based).
    pub line: u32,
    /// Start byte column within the line.
    pub index: u32,
    /// Length in bytes.
    pub length: u32,
    /// Semantic class.
    pub class: TokenClass,
    /// Modifier bitmask; always zero, the legend declares none.
    pub modifiers: u32,
}

impl SemanticToken {
    /// Creates a token with no modifiers.
    pub fn new(line: u32, index: u32, length: u32, class: TokenClass) -> Self {
        Self {
            line,
            index,
            length,
            class,
            modifiers: 0,
        }
    }
}

/// Delta-encodes `tokens` into the editor wire format.
///
/// Input must be sorted by `(line, index)`. Each token contributes five
/// values: line delta from the previous token, start delta (absolute again
/// whenever the line changes), length, class index, and modifiers.
pub fn encode(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut out = Vec::with_capacity(tokens.len() * 5);
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        debug_assert!(
            (token.line, token.index) >= (prev_line, prev_start) || out.is_empty(),
            "semantic tokens must be sorted"
        );
        let delta_line = token.line - prev_line;
        let delta_start = if delta_line == 0 {
            token.index - prev_start
        } else {
            token.index
        };
        out.extend_from_slice(&[
            delta_line,
            delta_start,
            token.length,
            token.class.index(),
            token.modifiers,
        ]);
        prev_line = token.line;
        prev_start = token.index;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_order() {
        assert_eq!(LEGEND[TokenClass::Keyword.index() as usize], "keyword");
        assert_eq!(LEGEND[TokenClass::Function.index() as usize], "function");
        assert_eq!(LEGEND.len(), 9);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn test_encode_reference_stream() {
        let tokens = [
            SemanticToken::new(0, 0, 3, TokenClass::Keyword),
            SemanticToken::new(0, 4, 1, TokenClass::Number),
            SemanticToken::new(2, 0, 5, TokenClass::Method),
        ];
        assert_eq!(
            encode(&tokens),
            vec![0, 0, 3, 0, 0, 0, 4, 1, 6, 0, 2, 0, 5, 3, 0]
        );
    }

    #[test]
    fn test_encode_resets_start_on_new_line() {
        let tokens = [
            SemanticToken::new(0, 8, 2, TokenClass::Keyword),
            SemanticToken::new(1, 4, 2, TokenClass::Keyword),
        ];
        let encoded = encode(&tokens);
        // The second token's start is absolute, not relative to column 8.
        assert_eq!(encoded[5], 1);
        assert_eq!(encoded[6], 4);
    }

    #[test]
    fn test_encode_same_line_is_relative() {
        let tokens = [
            SemanticToken::new(3, 2, 1, TokenClass::Keyword),
            SemanticToken::new(3, 10, 4, TokenClass::Number),
        ];
        let encoded = encode(&tokens);
        assert_eq!(encoded[0], 3);
        assert_eq!(encoded[1], 2);
        assert_eq!(encoded[5], 0);
        assert_eq!(encoded[6], 8);
    }
}
