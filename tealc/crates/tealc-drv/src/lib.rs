//! tealc-drv - The Processing Façade
//!
//! The single entry point every editor feature goes through:
//! [`process`] takes source bytes and returns an immutable
//! [`ProcessResult`] carrying everything a host needs: sorted diagnostics,
//! the listing, symbols and references for rename and navigation, token
//! partitions for highlighting, redundancy suggestions for code actions,
//! and the position probes for completion, hover, and signature help.
//!
//! Processing is deterministic and side-effect free: no I/O, no shared
//! mutable state, identical input bytes produce identical results. Hosts
//! memoize results per document and invalidate on text change; nothing here
//! caches.

mod index;
mod semtok;

pub use index::{SemanticIndex, Symbol, SymbolRef};
pub use semtok::{encode, SemanticToken, TokenClass, LEGEND};

pub use tealc_isa::{ops_available, Choice, OpSpec, RunMode, DEFAULT_VERSION, MAX_VERSION};
pub use tealc_lex::{Token, TokenKind};
pub use tealc_par::{Listing, Op, OpPos};
pub use tealc_sem::{Suggestion, SuggestionKind};
pub use tealc_util::{Diagnostic, Position, RuleId, Severity};

use tealc_lex::Lexer;
use tealc_sem::AnalysisOptions;
use tealc_util::Handler;

/// Host hints for one processing pass.
#[derive(Clone, Copy, Debug)]
pub struct ProcessOptions {
    /// Run mode to check opcode availability against. Defaults to
    /// application, the common case for on-chain programs.
    pub mode: RunMode,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            mode: RunMode::Application,
        }
    }
}

/// Everything derived from one document.
#[derive(Clone, Debug)]
pub struct ProcessResult {
    /// All diagnostics (lexical, parse, and analysis), sorted by
    /// `(line, column, rule)`.
    pub diagnostics: Vec<Diagnostic>,
    /// Redundancy suggestions for code actions.
    pub suggestions: Vec<Suggestion>,
    /// The parsed listing.
    pub listing: Listing,
    /// The derived semantic view.
    pub index: SemanticIndex,
}

impl ProcessResult {
    /// Label declarations, in source order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.index.symbols
    }

    /// Label references, in source order.
    pub fn symbol_refs(&self) -> &[SymbolRef] {
        &self.index.symbol_refs
    }

    /// The full token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.index.tokens
    }

    /// Tokens grouped by line.
    pub fn lines(&self) -> &[Vec<Token>] {
        &self.index.lines
    }

    /// Opcode-name tokens.
    pub fn ops(&self) -> &[Token] {
        &self.index.ops
    }

    /// Enumerated-immediate tokens.
    pub fn keywords(&self) -> &[Token] {
        &self.index.keywords
    }

    /// Integer literal tokens.
    pub fn numbers(&self) -> &[Token] {
        &self.index.numbers
    }

    /// Quoted byte-string tokens.
    pub fn strings(&self) -> &[Token] {
        &self.index.strings
    }

    /// Pragma directive tokens.
    pub fn macros(&self) -> &[Token] {
        &self.index.macros
    }

    /// Declared program version (default 1).
    pub fn version(&self) -> u64 {
        self.index.version
    }

    /// Completion values for the immediate position at `(line, col)`.
    pub fn arg_vals_at(&self, line: u32, col: u32) -> Option<&'static [Choice]> {
        index::arg_vals_at(&self.index, &self.listing, line, col)
    }

    /// Signature-help probe: opcode, immediate position, and the token
    /// under the cursor.
    pub fn arg_at(&self, line: u32, col: u32) -> Option<(&'static OpSpec, usize, Option<&Token>)> {
        index::arg_at(&self.index, &self.listing, line, col)
    }

    /// Hover text at `(line, col)`.
    pub fn doc_at(&self, line: u32, col: u32) -> Option<String> {
        index::doc_at(&self.index, &self.listing, line, col)
    }

    /// Classified tokens for highlighting, sorted by position.
    pub fn semantic_tokens(&self) -> Vec<SemanticToken> {
        let mut out = Vec::new();

        for token in &self.index.tokens {
            if token.kind == TokenKind::Comment {
                // The span covers the leading slashes the value excludes.
                out.push(SemanticToken::new(
                    token.line,
                    token.begin,
                    token.end - token.begin,
                    TokenClass::Comment,
                ));
            }
        }
        for token in &self.index.ops {
            out.push(SemanticToken::new(
                token.line,
                token.begin,
                token.len(),
                TokenClass::Keyword,
            ));
        }
        for token in &self.index.strings {
            out.push(SemanticToken::new(
                token.line,
                token.begin,
                token.len(),
                TokenClass::String,
            ));
        }
        for token in &self.index.macros {
            out.push(SemanticToken::new(
                token.line,
                token.begin,
                token.len(),
                TokenClass::Macro,
            ));
        }
        for token in &self.index.numbers {
            out.push(SemanticToken::new(
                token.line,
                token.begin,
                token.len(),
                TokenClass::Number,
            ));
        }
        for token in &self.index.keywords {
            out.push(SemanticToken::new(
                token.line,
                token.begin,
                token.len(),
                TokenClass::Value,
            ));
        }
        for symbol in &self.index.symbols {
            out.push(SemanticToken::new(
                symbol.line,
                symbol.begin,
                symbol.end - symbol.begin,
                TokenClass::Method,
            ));
        }
        for symbol_ref in &self.index.symbol_refs {
            out.push(SemanticToken::new(
                symbol_ref.line,
                symbol_ref.begin,
                symbol_ref.end - symbol_ref.begin,
                TokenClass::Function,
            ));
        }

        out.sort_by_key(|t| (t.line, t.index));
        out.dedup_by_key(|t| (t.line, t.index));
        out
    }

    /// The delta-encoded semantic token stream.
    pub fn encoded_semantic_tokens(&self) -> Vec<u32> {
        encode(&self.semantic_tokens())
    }
}

/// Processes `source` with default options.
pub fn process(source: &str) -> ProcessResult {
    process_with(source, &ProcessOptions::default())
}

/// Processes `source`: lex, parse, analyze, index.
///
/// Never fails and never panics on input: malformed bytes surface as
/// diagnostics on an otherwise fully-formed result.
pub fn process_with(source: &str, options: &ProcessOptions) -> ProcessResult {
    let _span = tracing::debug_span!("process", bytes = source.len()).entered();

    let handler = Handler::new();
    let mut lexer = Lexer::new(source);
    let listing = tealc_par::parse(&mut lexer, &handler);
    let (tokens, lexical_errors) = lexer.into_parts();
    for diagnostic in lexical_errors {
        handler.emit(diagnostic);
    }

    let analysis = AnalysisOptions { mode: options.mode };
    let suggestions = tealc_sem::analyze(&listing, &handler, &analysis);
    let index = SemanticIndex::build(&tokens, &listing);

    let diagnostics = handler.into_sorted();
    tracing::debug!(
        lines = listing.len(),
        diagnostics = diagnostics.len(),
        "processed document"
    );

    ProcessResult {
        diagnostics,
        suggestions,
        listing,
        index,
    }
}
