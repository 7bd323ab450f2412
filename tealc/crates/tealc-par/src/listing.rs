//! The listing: parsed operations, one logical line at a time.
//!
//! Every source line parses to a logical line holding one or more operation
//! nodes; more than one appears only when a label declaration shares its line with
//! an instruction (`done: int 1`). The listing is the canonical structure
//! the analysis rules traverse, indexed by `(line, sub)` pairs so rule
//! output keeps exact source positions.

use tealc_isa::OpSpec;
use tealc_lex::Token;
use tealc_util::{InternalError, Position};

/// A reference to a label, backed by the token that spelled it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRef {
    /// Referenced label name. Never empty.
    pub name: String,
    /// The token carrying the name.
    pub token: Token,
}

impl LabelRef {
    /// Position of the referencing token.
    #[inline]
    pub fn position(&self) -> Position {
        self.token.position()
    }
}

/// One parsed immediate argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgValue {
    /// An integer immediate with its parsed value.
    Uint { token: Token, value: u64 },
    /// A named integer constant (`pay`, `NoOp`, …).
    NamedConst { token: Token },
    /// A byte-string immediate (possibly two tokens for `base64 …`).
    Bytes { tokens: Vec<Token> },
    /// A member of a field enumeration.
    Field { token: Token },
    /// A label immediate outside the dedicated branch nodes.
    Label { name: String, token: Token },
    /// A token that failed validation; the diagnostic was already reported.
    Raw { token: Token },
}

impl ArgValue {
    /// The token that anchors this argument (the first, for multi-token
    /// byte-strings).
    pub fn anchor(&self) -> &Token {
        match self {
            ArgValue::Uint { token, .. }
            | ArgValue::NamedConst { token }
            | ArgValue::Field { token }
            | ArgValue::Label { token, .. }
            | ArgValue::Raw { token } => token,
            ArgValue::Bytes { tokens } => &tokens[0],
        }
    }
}

/// `#pragma version N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PragmaOp {
    /// Declared program version.
    pub version: u64,
    /// The pragma line's value tokens (`#pragma`, `version`, the number).
    pub tokens: Vec<Token>,
}

/// A label declaration, `name:`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelOp {
    /// Declared name, without the trailing colon.
    pub name: String,
    /// The full `name:` token.
    pub token: Token,
}

/// An opcode that names one or more labels: the branch family, `callsub`,
/// and the multi-way `switch`/`match`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchOp {
    /// Catalog entry for the opcode.
    pub spec: &'static OpSpec,
    /// The opcode-name token.
    pub name_token: Token,
    /// Referenced labels, in source order.
    pub targets: Vec<LabelRef>,
}

/// An opcode with no immediates that the taxonomy distinguishes
/// (`return`, `err`, `retsub`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainOp {
    /// Catalog entry for the opcode.
    pub spec: &'static OpSpec,
    /// The opcode-name token.
    pub name_token: Token,
}

/// Any other catalog opcode, with its parsed immediates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstrOp {
    /// Catalog entry for the opcode.
    pub spec: &'static OpSpec,
    /// The opcode-name token.
    pub name_token: Token,
    /// Parsed immediates, in source order.
    pub args: Vec<ArgValue>,
}

impl InstrOp {
    fn label_refs(&self) -> Vec<LabelRef> {
        self.args
            .iter()
            .filter_map(|arg| match arg {
                ArgValue::Label { name, token } => Some(LabelRef {
                    name: name.clone(),
                    token: token.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

/// A line that parses to nothing: blank, or comment-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyOp {
    /// The source line index.
    pub line: u32,
}

/// A line (or line suffix) that failed to parse. The only node allowed to
/// hold malformed tokens; most analysis rules skip it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidOp {
    /// Why the parse failed.
    pub reason: String,
    /// The tokens that were being consumed.
    pub tokens: Vec<Token>,
}

/// One operation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// `#pragma version N`.
    Pragma(PragmaOp),
    /// A label declaration.
    Label(LabelOp),
    /// `b`: unconditional branch.
    Branch(BranchOp),
    /// `bz`: branch if zero.
    BranchZero(BranchOp),
    /// `bnz`: branch if not zero.
    BranchNonZero(BranchOp),
    /// `switch`: indexed multi-way branch.
    Switch(BranchOp),
    /// `match`: value-matching multi-way branch.
    Match(BranchOp),
    /// `callsub`: subroutine call.
    Callsub(BranchOp),
    /// `retsub`: subroutine return.
    Retsub(PlainOp),
    /// `return`: stop with a success value.
    Return(PlainOp),
    /// `err`: immediate failure.
    Err(PlainOp),
    /// Any other opcode.
    Instr(InstrOp),
    /// A blank logical line.
    Empty(EmptyOp),
    /// A parse failure placeholder.
    Invalid(InvalidOp),
}

impl Op {
    /// Labels this operation references, in source order. Empty for
    /// non-branching operations.
    pub fn labels(&self) -> Vec<LabelRef> {
        match self {
            Op::Branch(b)
            | Op::BranchZero(b)
            | Op::BranchNonZero(b)
            | Op::Switch(b)
            | Op::Match(b)
            | Op::Callsub(b) => b.targets.clone(),
            Op::Instr(instr) => instr.label_refs(),
            _ => Vec::new(),
        }
    }

    /// True if control never falls through this operation: `b`, `return`,
    /// `err`, and `retsub`.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Op::Branch(_) | Op::Return(_) | Op::Err(_) | Op::Retsub(_)
        )
    }

    /// True for blank logical lines.
    pub fn is_nop(&self) -> bool {
        matches!(self, Op::Empty(_))
    }

    /// True for parse-failure placeholders.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Op::Invalid(_))
    }

    /// The catalog entry behind this operation, for opcodes that have one.
    pub fn spec(&self) -> Option<&'static OpSpec> {
        match self {
            Op::Branch(b)
            | Op::BranchZero(b)
            | Op::BranchNonZero(b)
            | Op::Switch(b)
            | Op::Match(b)
            | Op::Callsub(b) => Some(b.spec),
            Op::Retsub(p) | Op::Return(p) | Op::Err(p) => Some(p.spec),
            Op::Instr(i) => Some(i.spec),
            _ => None,
        }
    }

    /// The span that diagnostics about this operation should point at:
    /// `(line, begin, end)`.
    pub fn span(&self) -> (u32, u32, u32) {
        match self {
            Op::Pragma(p) => match p.tokens.as_slice() {
                [first, .., last] => (first.line, first.begin, last.end),
                [only] => (only.line, only.begin, only.end),
                [] => (0, 0, 0),
            },
            Op::Label(l) => (l.token.line, l.token.begin, l.token.end),
            Op::Branch(b)
            | Op::BranchZero(b)
            | Op::BranchNonZero(b)
            | Op::Switch(b)
            | Op::Match(b)
            | Op::Callsub(b) => (b.name_token.line, b.name_token.begin, b.name_token.end),
            Op::Retsub(p) | Op::Return(p) | Op::Err(p) => {
                (p.name_token.line, p.name_token.begin, p.name_token.end)
            }
            Op::Instr(i) => (i.name_token.line, i.name_token.begin, i.name_token.end),
            Op::Empty(e) => (e.line, 0, 0),
            Op::Invalid(inv) => match inv.tokens.as_slice() {
                [first, .., last] => (first.line, first.begin, last.end),
                [only] => (only.line, only.begin, only.end),
                [] => (0, 0, 0),
            },
        }
    }

    /// The source line this operation sits on.
    pub fn line(&self) -> u32 {
        self.span().0
    }

    /// Position of the operation's first byte.
    pub fn position(&self) -> Position {
        let (line, begin, _) = self.span();
        Position::new(line, begin)
    }
}

/// Index of one operation in the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpPos {
    /// Logical line index.
    pub line: u32,
    /// Operation index within the line.
    pub sub: u32,
}

impl OpPos {
    /// Creates an index.
    #[inline]
    pub const fn new(line: u32, sub: u32) -> Self {
        Self { line, sub }
    }
}

impl std::fmt::Display for OpPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.sub)
    }
}

/// One logical line: its operations plus any trailing comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Operations, in source order. Never empty.
    pub ops: Vec<Op>,
    /// Trailing comment token, if the line had one.
    pub comment: Option<Token>,
}

/// The parsed program: logical lines in source order.
///
/// Line indices are gap-free and equal to source line indices, so `(line,
/// sub)` positions used by the analysis rules are also source positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    lines: Vec<Line>,
}

impl Listing {
    /// Creates an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next logical line.
    pub(crate) fn push_line(&mut self, line: Line) {
        debug_assert!(!line.ops.is_empty(), "logical lines hold at least one op");
        self.lines.push(line);
    }

    /// All logical lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of logical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for a listing with no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The operation at `pos`, or `None` if out of range.
    pub fn get(&self, pos: OpPos) -> Option<&Op> {
        self.lines
            .get(pos.line as usize)?
            .ops
            .get(pos.sub as usize)
    }

    /// The operation at `pos`. An out-of-range position is an invariant
    /// breach: positions handed to this accessor come from the listing's own
    /// queries.
    pub fn op_at(&self, pos: OpPos) -> Result<&Op, InternalError> {
        self.get(pos).ok_or(InternalError::ListingIndex {
            line: pos.line,
            sub: pos.sub,
            line_count: self.lines.len(),
        })
    }

    /// Iterates all operations in source order.
    pub fn iter(&self) -> impl Iterator<Item = (OpPos, &Op)> + '_ {
        self.lines.iter().enumerate().flat_map(|(li, line)| {
            line.ops
                .iter()
                .enumerate()
                .map(move |(si, op)| (OpPos::new(li as u32, si as u32), op))
        })
    }

    /// Iterates operations at or after `from`, in source order.
    pub fn iter_forward(&self, from: OpPos) -> impl Iterator<Item = (OpPos, &Op)> + '_ {
        self.iter().filter(move |(pos, _)| *pos >= from)
    }

    /// Iterates operations at or before `from`, in reverse source order.
    pub fn iter_backward(&self, from: OpPos) -> impl Iterator<Item = (OpPos, &Op)> {
        let mut collected: Vec<(OpPos, &Op)> =
            self.iter().take_while(|(pos, _)| *pos <= from).collect();
        collected.reverse();
        collected.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tealc_lex::{Token, TokenKind};

    fn tok(value: &str, line: u32, begin: u32) -> Token {
        Token::new(
            TokenKind::Value,
            value,
            line,
            begin,
            begin + value.len() as u32,
        )
    }

    fn label_op(name: &str, line: u32) -> Op {
        Op::Label(LabelOp {
            name: name.to_owned(),
            token: tok(&format!("{name}:"), line, 0),
        })
    }

    fn listing_of(ops: Vec<Vec<Op>>) -> Listing {
        let mut listing = Listing::new();
        for line_ops in ops {
            listing.push_line(Line {
                ops: line_ops,
                comment: None,
            });
        }
        listing
    }

    #[test]
    fn test_indexing() {
        let listing = listing_of(vec![
            vec![label_op("a", 0), Op::Empty(EmptyOp { line: 0 })],
            vec![Op::Empty(EmptyOp { line: 1 })],
        ]);

        assert_eq!(listing.len(), 2);
        assert!(listing.get(OpPos::new(0, 1)).is_some());
        assert!(listing.get(OpPos::new(0, 2)).is_none());
        assert!(listing.get(OpPos::new(2, 0)).is_none());
        assert!(listing.op_at(OpPos::new(2, 0)).is_err());
    }

    #[test]
    fn test_iteration_order() {
        let listing = listing_of(vec![
            vec![label_op("a", 0), label_op("b", 0)],
            vec![Op::Empty(EmptyOp { line: 1 })],
        ]);

        let forward: Vec<OpPos> = listing.iter().map(|(p, _)| p).collect();
        assert_eq!(
            forward,
            vec![OpPos::new(0, 0), OpPos::new(0, 1), OpPos::new(1, 0)]
        );

        let backward: Vec<OpPos> = listing
            .iter_backward(OpPos::new(0, 1))
            .map(|(p, _)| p)
            .collect();
        assert_eq!(backward, vec![OpPos::new(0, 1), OpPos::new(0, 0)]);

        let from: Vec<OpPos> = listing
            .iter_forward(OpPos::new(0, 1))
            .map(|(p, _)| p)
            .collect();
        assert_eq!(from, vec![OpPos::new(0, 1), OpPos::new(1, 0)]);
    }

    #[test]
    fn test_capabilities() {
        let label = label_op("a", 0);
        assert!(!label.is_terminator());
        assert!(!label.is_nop());
        assert!(label.labels().is_empty());

        let empty = Op::Empty(EmptyOp { line: 3 });
        assert!(empty.is_nop());
        assert_eq!(empty.span(), (3, 0, 0));
    }

    #[test]
    fn test_op_pos_ordering() {
        assert!(OpPos::new(1, 0) > OpPos::new(0, 5));
        assert!(OpPos::new(2, 1) > OpPos::new(2, 0));
        assert_eq!(OpPos::new(2, 1).to_string(), "2:1");
    }
}
