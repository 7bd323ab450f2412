//! The semantic index: every per-document fact the editor features read.
//!
//! Built once per processed document from the token list and the listing.
//! Rename and go-to-definition bind through [`Symbol`]/[`SymbolRef`];
//! highlighting reads the token partitions; completion, hover, and
//! signature help go through the position probes.

use serde::Serialize;
use tealc_isa::{self as isa, Choice, OpSpec};
use tealc_lex::{Token, TokenKind};
use tealc_par::{looks_numeric, ArgValue, Listing, Op};
use tealc_util::Position;

/// A label declaration. The span covers the name only, without the trailing
/// colon, so rename edits splice cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Declared name.
    pub name: String,
    /// Line index.
    pub line: u32,
    /// First byte column of the name.
    pub begin: u32,
    /// One past the last byte column of the name.
    pub end: u32,
}

impl Symbol {
    /// The position of the declaration.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.begin)
    }

    /// True if the byte column `col` on this symbol's line touches the
    /// name (the position just past the last byte counts).
    pub fn contains(&self, line: u32, col: u32) -> bool {
        self.line == line && self.begin <= col && col <= self.end
    }
}

/// A token referencing a label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolRef {
    /// Referenced name.
    pub name: String,
    /// Line index.
    pub line: u32,
    /// First byte column of the reference.
    pub begin: u32,
    /// One past the last byte column of the reference.
    pub end: u32,
}

impl SymbolRef {
    /// The position of the reference.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.begin)
    }

    /// True if the byte column `col` on this reference's line touches it.
    pub fn contains(&self, line: u32, col: u32) -> bool {
        self.line == line && self.begin <= col && col <= self.end
    }
}

/// The derived per-document view.
#[derive(Clone, Debug, Default)]
pub struct SemanticIndex {
    /// Every label declaration, in source order.
    pub symbols: Vec<Symbol>,
    /// Every label reference, in source order.
    pub symbol_refs: Vec<SymbolRef>,
    /// The full token sequence.
    pub tokens: Vec<Token>,
    /// Tokens grouped by line index; empty lines hold empty groups.
    pub lines: Vec<Vec<Token>>,
    /// Opcode-name tokens.
    pub ops: Vec<Token>,
    /// Enumerated immediates: field names and named constants.
    pub keywords: Vec<Token>,
    /// Integer literal tokens, including pragma version numbers.
    pub numbers: Vec<Token>,
    /// Quoted byte-string tokens.
    pub strings: Vec<Token>,
    /// Pragma directive tokens (`#pragma`, `version`).
    pub macros: Vec<Token>,
    /// Declared program version; the catalog default when no pragma says
    /// otherwise.
    pub version: u64,
}

impl SemanticIndex {
    /// Builds the index from one document's tokens and listing.
    pub fn build(tokens: &[Token], listing: &Listing) -> Self {
        let mut index = SemanticIndex {
            tokens: tokens.to_vec(),
            version: isa::DEFAULT_VERSION,
            ..SemanticIndex::default()
        };

        // Group the raw token stream by line for per-line consumers.
        let line_count = tokens
            .iter()
            .map(|t| t.line as usize + 1)
            .max()
            .unwrap_or(0)
            .max(listing.len());
        index.lines = vec![Vec::new(); line_count];
        for token in tokens {
            index.lines[token.line as usize].push(token.clone());

            // Strings are recognizable lexically, wherever they appear.
            if token.kind == TokenKind::Value && token.value.starts_with('"') {
                index.strings.push(token.clone());
            }
        }

        for (_, op) in listing.iter() {
            index.collect_op(op);
        }

        index
    }

    fn collect_op(&mut self, op: &Op) {
        for label_ref in op.labels() {
            let token = &label_ref.token;
            self.symbol_refs.push(SymbolRef {
                name: label_ref.name.clone(),
                line: token.line,
                begin: token.begin,
                end: token.end,
            });
        }

        match op {
            Op::Pragma(pragma) => {
                self.version = pragma.version;
                for (i, token) in pragma.tokens.iter().enumerate() {
                    // `#pragma` and `version` are directive words; the
                    // trailing number highlights as a number.
                    if i < 2 {
                        self.macros.push(token.clone());
                    } else {
                        self.numbers.push(token.clone());
                    }
                }
            }
            Op::Label(label) => {
                let token = &label.token;
                self.symbols.push(Symbol {
                    name: label.name.clone(),
                    line: token.line,
                    begin: token.begin,
                    end: token.begin + label.name.len() as u32,
                });
            }
            Op::Branch(b)
            | Op::BranchZero(b)
            | Op::BranchNonZero(b)
            | Op::Switch(b)
            | Op::Match(b)
            | Op::Callsub(b) => {
                self.ops.push(b.name_token.clone());
            }
            Op::Retsub(p) | Op::Return(p) | Op::Err(p) => {
                self.ops.push(p.name_token.clone());
            }
            Op::Instr(instr) => {
                self.ops.push(instr.name_token.clone());
                for arg in &instr.args {
                    match arg {
                        ArgValue::Uint { token, .. } => self.numbers.push(token.clone()),
                        ArgValue::Field { token } | ArgValue::NamedConst { token } => {
                            self.keywords.push(token.clone())
                        }
                        // A token the parser rejected still highlights as a
                        // number when it reads as an integer literal.
                        ArgValue::Raw { token } if looks_numeric(&token.value) => {
                            self.numbers.push(token.clone())
                        }
                        _ => {}
                    }
                }
            }
            Op::Empty(_) | Op::Invalid(_) => {}
        }
    }

    /// The value tokens of `line`, in order.
    fn value_tokens(&self, line: u32) -> Vec<&Token> {
        self.lines
            .get(line as usize)
            .map(|tokens| {
                tokens
                    .iter()
                    .filter(|t| t.kind == TokenKind::Value)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Locates the instruction node on `line`, skipping any leading labels, and
/// returns it with its catalog entry.
fn instruction_on_line(listing: &Listing, line: u32) -> Option<(&Op, &'static OpSpec)> {
    let ops = &listing.lines().get(line as usize)?.ops;
    ops.iter().find_map(|op| op.spec().map(|spec| (op, spec)))
}

/// The opcode-name token and the zero-based immediate position that byte
/// column `col` falls on (or would append to) for the instruction on
/// `line`.
fn arg_position<'i>(
    index: &'i SemanticIndex,
    listing: &Listing,
    line: u32,
    col: u32,
) -> Option<(&'static OpSpec, usize, Option<&'i Token>)> {
    let (op, spec) = instruction_on_line(listing, line)?;
    let (_, _, name_end) = op.span();
    if col < name_end {
        return None;
    }

    let mut arg_index = 0usize;
    let mut on_token = None;
    for token in index.value_tokens(line) {
        // Skip the labels before the opcode and the opcode itself.
        if token.end <= name_end {
            continue;
        }
        if token.contains_column(col) {
            on_token = Some(token);
            break;
        }
        if token.end < col {
            arg_index += 1;
        } else {
            break;
        }
    }

    Some((spec, arg_index, on_token))
}

/// Completion values for the immediate position at `(line, col)`.
pub fn arg_vals_at(
    index: &SemanticIndex,
    listing: &Listing,
    line: u32,
    col: u32,
) -> Option<&'static [Choice]> {
    let (spec, arg_index, _) = arg_position(index, listing, line, col)?;
    isa::arg_choices(spec.name, arg_index, index.version)
}

/// Signature-help probe: the opcode, the immediate position, and the token
/// under the cursor if there is one.
pub fn arg_at<'i>(
    index: &'i SemanticIndex,
    listing: &Listing,
    line: u32,
    col: u32,
) -> Option<(&'static OpSpec, usize, Option<&'i Token>)> {
    arg_position(index, listing, line, col)
}

/// Hover text for `(line, col)`: the opcode's short documentation on its
/// name, the argument's (or enumeration member's) documentation on an
/// immediate.
pub fn doc_at(index: &SemanticIndex, listing: &Listing, line: u32, col: u32) -> Option<String> {
    let (op, spec) = instruction_on_line(listing, line)?;
    let (_, name_begin, name_end) = op.span();

    if name_begin <= col && col <= name_end {
        return Some(format!("{}\n\n{}", spec.full_sig(), spec.doc));
    }

    let (_, arg_index, on_token) = arg_position(index, listing, line, col)?;
    let arg = if arg_index < spec.args.len() {
        &spec.args[arg_index]
    } else if spec.variadic && !spec.args.is_empty() {
        &spec.args[spec.args.len() - 1]
    } else {
        return None;
    };

    if let Some(token) = on_token {
        if let Some(choice) = arg.choice(&token.value) {
            return Some(choice.doc.to_owned());
        }
    }
    Some(arg.doc.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tealc_lex::Lexer;
    use tealc_util::Handler;

    fn build(source: &str) -> (SemanticIndex, Listing) {
        let mut lexer = Lexer::new(source);
        let handler = Handler::new();
        let listing = tealc_par::parse(&mut lexer, &handler);
        let (tokens, _) = lexer.into_parts();
        (SemanticIndex::build(&tokens, &listing), listing)
    }

    #[test]
    fn test_symbols_and_refs() {
        let (index, _) = build("main:\nb main\ncallsub main\n");
        assert_eq!(index.symbols.len(), 1);
        let sym = &index.symbols[0];
        assert_eq!(sym.name, "main");
        assert_eq!((sym.begin, sym.end), (0, 4), "span excludes the colon");

        assert_eq!(index.symbol_refs.len(), 2);
        assert_eq!(index.symbol_refs[0].name, "main");
        assert_eq!(index.symbol_refs[0].line, 1);
        assert_eq!((index.symbol_refs[0].begin, index.symbol_refs[0].end), (2, 6));
    }

    #[test]
    fn test_partitions() {
        let (index, _) = build("#pragma version 8\nint pay\ntxn Sender\nbyte \"hi\"\nint 7\n");
        let names = |tokens: &[Token]| -> Vec<String> {
            tokens.iter().map(|t| t.value.clone()).collect()
        };

        assert_eq!(names(&index.macros), vec!["#pragma", "version"]);
        assert_eq!(names(&index.numbers), vec!["8", "7"]);
        assert_eq!(names(&index.keywords), vec!["pay", "Sender"]);
        assert_eq!(names(&index.strings), vec!["\"hi\""]);
        assert_eq!(
            names(&index.ops),
            vec!["int", "txn", "byte", "int"]
        );
    }

    #[test]
    fn test_numeric_raw_arguments_still_classify() {
        // The surplus `2` is a parse error, and `Sendr` is an unknown
        // field; only the one that reads as an integer highlights as a
        // number.
        let (index, _) = build("int 1 2\ntxn Sendr\n");
        let numbers: Vec<_> = index.numbers.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_version_defaults_to_one() {
        let (index, _) = build("int 1\n");
        assert_eq!(index.version, 1);

        let (index, _) = build("#pragma version 6\nint 1\n");
        assert_eq!(index.version, 6);
    }

    #[test]
    fn test_lines_cover_every_source_line() {
        let (index, _) = build("int 1\n\nreturn\n");
        assert_eq!(index.lines.len(), 3);
        assert_eq!(index.lines[0].len(), 3, "two values and the terminator");
        assert_eq!(index.lines[1].len(), 1, "just the terminator");
    }

    #[test]
    fn test_arg_vals_probe() {
        let (index, listing) = build("txn Sender\nglobal MinTxnFee\n");

        // On the field argument of `txn`.
        let choices = arg_vals_at(&index, &listing, 0, 5).expect("txn field choices");
        assert!(choices.iter().any(|c| c.name == "ApplicationID"));

        // Just past `global `, still the field position.
        let choices = arg_vals_at(&index, &listing, 1, 7).expect("global field choices");
        assert!(choices.iter().any(|c| c.name == "GroupSize"));

        // On the opcode name there is no argument position.
        assert!(arg_vals_at(&index, &listing, 0, 1).is_none());
    }

    #[test]
    fn test_arg_at_probe() {
        let (index, listing) = build("gtxn 0 Sender\n");

        let (spec, arg_index, token) = arg_at(&index, &listing, 0, 5).expect("first immediate");
        assert_eq!(spec.name, "gtxn");
        assert_eq!(arg_index, 0);
        assert_eq!(token.unwrap().value, "0");

        let (_, arg_index, token) = arg_at(&index, &listing, 0, 9).expect("second immediate");
        assert_eq!(arg_index, 1);
        assert_eq!(token.unwrap().value, "Sender");
    }

    #[test]
    fn test_doc_probe() {
        let (index, listing) = build("txn Sender\nint 1\n");

        let on_op = doc_at(&index, &listing, 0, 1).expect("opcode doc");
        assert!(on_op.contains("txn f:field"));
        assert!(on_op.contains("field of the current transaction"));

        let on_field = doc_at(&index, &listing, 0, 6).expect("field doc");
        assert_eq!(on_field, "32 byte address of the sender");

        assert!(doc_at(&index, &listing, 5, 0).is_none());
    }

    #[test]
    fn test_probes_skip_leading_labels() {
        let (index, listing) = build("main: txn Sender\n");
        let (spec, arg_index, token) = arg_at(&index, &listing, 0, 12).expect("field position");
        assert_eq!(spec.name, "txn");
        assert_eq!(arg_index, 0);
        assert_eq!(token.unwrap().value, "Sender");
    }
}
