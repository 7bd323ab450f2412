//! The line-oriented parser.
//!
//! One source line parses to one logical line, independently of every other
//! line: no parse state crosses an end-of-line token. The parser never
//! fails; anything it cannot make sense of becomes an [`InvalidOp`] node
//! plus a `PARSE` diagnostic, and the next line starts clean.

use tealc_isa::{self as isa, ArgKind, ArgSpec, OpSpec};
use tealc_lex::{Lexer, Token, TokenKind};
use tealc_util::{Diagnostic, Handler, RuleId};

use crate::listing::{
    ArgValue, BranchOp, EmptyOp, InstrOp, InvalidOp, LabelOp, LabelRef, Line, Listing, Op, PlainOp,
    PragmaOp,
};
use crate::number::parse_uint;

/// Parses the lexer's token stream into a listing.
///
/// Parse diagnostics are emitted to `handler` under the `PARSE` rule; the
/// lexer's own errors stay with the lexer and are merged by the caller.
pub fn parse(lexer: &mut Lexer<'_>, handler: &Handler) -> Listing {
    let mut listing = Listing::new();
    let mut tokens: Vec<Token> = Vec::new();
    let mut comment: Option<Token> = None;

    while lexer.scan() {
        let tok = lexer.curr().clone();
        match tok.kind {
            TokenKind::Value => tokens.push(tok),
            TokenKind::Comment => comment = Some(tok),
            TokenKind::Eol => {
                let line = tok.line;
                finish_line(
                    line,
                    std::mem::take(&mut tokens),
                    comment.take(),
                    &mut listing,
                    handler,
                );
            }
        }
    }

    // A final line without a terminator still parses.
    if !tokens.is_empty() || comment.is_some() {
        let line = tokens
            .first()
            .map(|t| t.line)
            .or_else(|| comment.as_ref().map(|c| c.line))
            .unwrap_or(0);
        finish_line(line, tokens, comment, &mut listing, handler);
    }

    listing
}

fn finish_line(
    line: u32,
    tokens: Vec<Token>,
    comment: Option<Token>,
    listing: &mut Listing,
    handler: &Handler,
) {
    let mut ops = Vec::new();

    if tokens.is_empty() {
        ops.push(Op::Empty(EmptyOp { line }));
    } else {
        let mut rest: &[Token] = &tokens;

        // Leading label declarations. A label may share its line with the
        // instruction that follows it, which subdivides the logical line
        // into several nodes.
        while let Some(first) = rest.first() {
            let value = first.value.as_str();
            if value == ":" {
                handler.emit(Diagnostic::error(
                    RuleId::PARSE,
                    first.line,
                    first.begin,
                    first.end,
                    "empty label name",
                ));
                ops.push(Op::Invalid(InvalidOp {
                    reason: "empty label name".to_owned(),
                    tokens: vec![first.clone()],
                }));
                rest = &rest[1..];
            } else if value.len() > 1 && value.ends_with(':') && !value.starts_with('#') {
                ops.push(Op::Label(LabelOp {
                    name: value[..value.len() - 1].to_owned(),
                    token: first.clone(),
                }));
                rest = &rest[1..];
            } else {
                break;
            }
        }

        if !rest.is_empty() {
            ops.push(parse_instruction(rest, handler));
        } else if ops.is_empty() {
            ops.push(Op::Empty(EmptyOp { line }));
        }
    }

    listing.push_line(Line { ops, comment });
}

fn parse_instruction(tokens: &[Token], handler: &Handler) -> Op {
    let first = &tokens[0];

    if first.value.starts_with('#') {
        return parse_pragma(tokens, handler);
    }

    let Some(spec) = isa::lookup_any(&first.value) else {
        let reason = format!("unknown opcode: \"{}\"", first.value);
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            first.line,
            first.begin,
            first.end,
            reason.clone(),
        ));
        return Op::Invalid(InvalidOp {
            reason,
            tokens: tokens.to_vec(),
        });
    };

    let args = parse_args(spec, tokens, handler);

    match spec.name {
        "b" => Op::Branch(to_branch(spec, first, args)),
        "bz" => Op::BranchZero(to_branch(spec, first, args)),
        "bnz" => Op::BranchNonZero(to_branch(spec, first, args)),
        "switch" => Op::Switch(to_branch(spec, first, args)),
        "match" => Op::Match(to_branch(spec, first, args)),
        "callsub" => Op::Callsub(to_branch(spec, first, args)),
        "retsub" => Op::Retsub(to_plain(spec, first)),
        "return" => Op::Return(to_plain(spec, first)),
        "err" => Op::Err(to_plain(spec, first)),
        _ => Op::Instr(InstrOp {
            spec,
            name_token: first.clone(),
            args,
        }),
    }
}

fn to_branch(spec: &'static OpSpec, name_token: &Token, args: Vec<ArgValue>) -> BranchOp {
    let targets = args
        .into_iter()
        .filter_map(|arg| match arg {
            ArgValue::Label { name, token } => Some(LabelRef { name, token }),
            _ => None,
        })
        .collect();
    BranchOp {
        spec,
        name_token: name_token.clone(),
        targets,
    }
}

fn to_plain(spec: &'static OpSpec, name_token: &Token) -> PlainOp {
    PlainOp {
        spec,
        name_token: name_token.clone(),
    }
}

fn parse_args(spec: &'static OpSpec, tokens: &[Token], handler: &Handler) -> Vec<ArgValue> {
    let name = &tokens[0];
    let mut args = Vec::new();
    let mut idx = 1usize;

    for arg_spec in spec.args {
        if idx >= tokens.len() {
            let wanted = if spec.variadic {
                format!("at least {}", spec.args.len())
            } else {
                spec.args.len().to_string()
            };
            handler.emit(Diagnostic::error(
                RuleId::PARSE,
                name.line,
                name.begin,
                name.end,
                format!(
                    "{} expects {} argument(s), found {}",
                    spec.name,
                    wanted,
                    tokens.len() - 1
                ),
            ));
            return args;
        }
        args.push(parse_one_arg(spec, arg_spec, tokens, &mut idx, handler));
    }

    if spec.variadic {
        // The final declared argument repeats for the rest of the line.
        if let Some(tail) = spec.args.last() {
            while idx < tokens.len() {
                args.push(parse_one_arg(spec, tail, tokens, &mut idx, handler));
            }
        }
    } else if idx < tokens.len() {
        let surplus = &tokens[idx];
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            surplus.line,
            surplus.begin,
            tokens[tokens.len() - 1].end,
            format!(
                "{} expects {} argument(s), found {}",
                spec.name,
                spec.args.len(),
                tokens.len() - 1
            ),
        ));
        for token in &tokens[idx..] {
            args.push(ArgValue::Raw {
                token: token.clone(),
            });
        }
    }

    args
}

fn parse_one_arg(
    op: &'static OpSpec,
    arg: &ArgSpec,
    tokens: &[Token],
    idx: &mut usize,
    handler: &Handler,
) -> ArgValue {
    let token = tokens[*idx].clone();
    *idx += 1;

    match arg.kind {
        ArgKind::Uint | ArgKind::Index => match parse_uint(&token.value) {
            Ok(value) => ArgValue::Uint { token, value },
            Err(err) => {
                handler.emit(Diagnostic::error(
                    RuleId::PARSE,
                    token.line,
                    token.begin,
                    token.end,
                    format!("invalid integer literal \"{}\": {}", token.value, err),
                ));
                ArgValue::Raw { token }
            }
        },
        ArgKind::NamedConst => {
            if let Ok(value) = parse_uint(&token.value) {
                ArgValue::Uint { token, value }
            } else if arg.choice(&token.value).is_some() {
                ArgValue::NamedConst { token }
            } else {
                handler.emit(Diagnostic::error(
                    RuleId::PARSE,
                    token.line,
                    token.begin,
                    token.end,
                    format!(
                        "\"{}\" is neither an integer nor a named constant",
                        token.value
                    ),
                ));
                ArgValue::Raw { token }
            }
        }
        ArgKind::Field => {
            if arg.choice(&token.value).is_some() {
                ArgValue::Field { token }
            } else {
                handler.emit(Diagnostic::error(
                    RuleId::PARSE,
                    token.line,
                    token.begin,
                    token.end,
                    format!("unknown field \"{}\" for {}", token.value, op.name),
                ));
                ArgValue::Raw { token }
            }
        }
        ArgKind::Label => ArgValue::Label {
            name: token.value.clone(),
            token,
        },
        ArgKind::Bytes => parse_bytes_arg(op, token, tokens, idx, handler),
    }
}

/// Byte-string immediates come in several spellings: quoted strings, `0x…`
/// hex, one-token `base64(…)` wrappers, the two-token `base64 AAAA` form,
/// and bare address or method text. Only hex is strictly validated; the
/// remaining forms pass through for downstream tools.
fn parse_bytes_arg(
    op: &'static OpSpec,
    token: Token,
    tokens: &[Token],
    idx: &mut usize,
    handler: &Handler,
) -> ArgValue {
    let value = token.value.as_str();

    if matches!(value, "base64" | "b64" | "base32" | "b32") {
        if *idx < tokens.len() {
            let data = tokens[*idx].clone();
            *idx += 1;
            return ArgValue::Bytes {
                tokens: vec![token, data],
            };
        }
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            token.line,
            token.begin,
            token.end,
            format!("{} expects data after \"{}\"", op.name, value),
        ));
        return ArgValue::Raw { token };
    }

    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        let valid = !hex.is_empty()
            && hex.len() % 2 == 0
            && hex.bytes().all(|b| b.is_ascii_hexdigit());
        if !valid {
            handler.emit(Diagnostic::error(
                RuleId::PARSE,
                token.line,
                token.begin,
                token.end,
                format!("invalid hex byte-string \"{}\"", token.value),
            ));
            return ArgValue::Raw { token };
        }
    }

    ArgValue::Bytes {
        tokens: vec![token],
    }
}

fn parse_pragma(tokens: &[Token], handler: &Handler) -> Op {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];

    let invalid = |reason: String| {
        Op::Invalid(InvalidOp {
            reason,
            tokens: tokens.to_vec(),
        })
    };

    if first.value != "#pragma" {
        let reason = format!("unknown directive: \"{}\"", first.value);
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            first.line,
            first.begin,
            first.end,
            reason.clone(),
        ));
        return invalid(reason);
    }

    if tokens.len() < 2 || tokens[1].value != "version" {
        let reason = "only \"#pragma version N\" is supported".to_owned();
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            first.line,
            first.begin,
            last.end,
            reason.clone(),
        ));
        return invalid(reason);
    }

    if tokens.len() < 3 {
        let reason = "missing version number".to_owned();
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            first.line,
            first.begin,
            last.end,
            reason.clone(),
        ));
        return invalid(reason);
    }

    if tokens.len() > 3 {
        let reason = "unexpected tokens after version number".to_owned();
        handler.emit(Diagnostic::error(
            RuleId::PARSE,
            tokens[3].line,
            tokens[3].begin,
            last.end,
            reason.clone(),
        ));
        return invalid(reason);
    }

    match parse_uint(&tokens[2].value) {
        Ok(version) => Op::Pragma(PragmaOp {
            version,
            tokens: tokens.to_vec(),
        }),
        Err(err) => {
            let reason = format!("invalid version number \"{}\": {}", tokens[2].value, err);
            handler.emit(Diagnostic::error(
                RuleId::PARSE,
                tokens[2].line,
                tokens[2].begin,
                tokens[2].end,
                reason.clone(),
            ));
            invalid(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(source: &str) -> (Listing, Vec<Diagnostic>) {
        let mut lexer = Lexer::new(source);
        let handler = Handler::new();
        let listing = parse(&mut lexer, &handler);
        (listing, handler.into_sorted())
    }

    fn single_ops(listing: &Listing) -> Vec<&Op> {
        listing.iter().map(|(_, op)| op).collect()
    }

    #[test]
    fn test_empty_source() {
        let (listing, diags) = parse_source("");
        assert!(listing.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_line_count_matches_terminators() {
        let (listing, _) = parse_source("int 1\nint 2\n");
        assert_eq!(listing.len(), 2);

        // Trailing content without a newline still forms a line.
        let (listing, _) = parse_source("int 1\nint 2");
        assert_eq!(listing.len(), 2);

        // Blank lines survive as no-ops.
        let (listing, _) = parse_source("\n\n");
        assert_eq!(listing.len(), 2);
        assert!(listing.get(crate::OpPos::new(0, 0)).unwrap().is_nop());
    }

    #[test]
    fn test_basic_program_shape() {
        let (listing, diags) = parse_source("a:\nint 1\nreturn\n");
        assert!(diags.is_empty());
        let ops = single_ops(&listing);
        assert!(matches!(ops[0], Op::Label(l) if l.name == "a"));
        assert!(matches!(ops[1], Op::Instr(i) if i.spec.name == "int"));
        assert!(matches!(ops[2], Op::Return(_)));
    }

    #[test]
    fn test_label_sharing_a_line_subdivides() {
        let (listing, diags) = parse_source("done: int 1\n");
        assert!(diags.is_empty());
        assert_eq!(listing.len(), 1);
        let line = &listing.lines()[0];
        assert_eq!(line.ops.len(), 2);
        assert!(matches!(&line.ops[0], Op::Label(l) if l.name == "done"));
        assert!(matches!(&line.ops[1], Op::Instr(_)));
    }

    #[test]
    fn test_stray_colon_is_invalid() {
        let (listing, diags) = parse_source(":\n");
        assert!(listing.get(crate::OpPos::new(0, 0)).unwrap().is_invalid());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, RuleId::PARSE);
        assert_eq!(diags[0].message, "empty label name");
    }

    #[test]
    fn test_unknown_opcode() {
        let (listing, diags) = parse_source("frobnicate 1\n");
        assert!(listing.get(crate::OpPos::new(0, 0)).unwrap().is_invalid());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unknown opcode: \"frobnicate\"");
        assert_eq!(diags[0].begin, 0);
        assert_eq!(diags[0].end, 10);
    }

    #[test]
    fn test_branch_targets() {
        let (listing, diags) = parse_source("b end\nbz alt\nbnz alt\ncallsub sub\n");
        assert!(diags.is_empty());
        let ops = single_ops(&listing);
        assert!(matches!(ops[0], Op::Branch(b) if b.targets[0].name == "end"));
        assert!(matches!(ops[1], Op::BranchZero(b) if b.targets[0].name == "alt"));
        assert!(matches!(ops[2], Op::BranchNonZero(_)));
        assert!(matches!(ops[3], Op::Callsub(b) if b.targets[0].name == "sub"));
    }

    #[test]
    fn test_switch_collects_every_target() {
        let (listing, diags) = parse_source("switch a b c\n");
        assert!(diags.is_empty());
        match listing.get(crate::OpPos::new(0, 0)).unwrap() {
            Op::Switch(b) => {
                let names: Vec<_> = b.targets.iter().map(|t| t.name.as_str()).collect();
                assert_eq!(names, vec!["a", "b", "c"]);
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    #[test]
    fn test_pragma_ok() {
        let (listing, diags) = parse_source("#pragma version 8\n");
        assert!(diags.is_empty());
        assert!(
            matches!(listing.get(crate::OpPos::new(0, 0)).unwrap(), Op::Pragma(p) if p.version == 8)
        );
    }

    #[test]
    fn test_pragma_rejects_other_directives() {
        let (_, diags) = parse_source("#pragma optimize on\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "only \"#pragma version N\" is supported");

        let (_, diags) = parse_source("#define x\n");
        assert_eq!(diags[0].message, "unknown directive: \"#define\"");

        let (_, diags) = parse_source("#pragma version\n");
        assert_eq!(diags[0].message, "missing version number");

        let (_, diags) = parse_source("#pragma version 8 9\n");
        assert_eq!(diags[0].message, "unexpected tokens after version number");

        let (_, diags) = parse_source("#pragma version x\n");
        assert!(diags[0].message.starts_with("invalid version number"));
    }

    #[test]
    fn test_arity_too_few() {
        let (listing, diags) = parse_source("gtxn 0\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "gtxn expects 2 argument(s), found 1");
        // Best-effort node still lands in the listing.
        assert!(matches!(
            listing.get(crate::OpPos::new(0, 0)).unwrap(),
            Op::Instr(i) if i.args.len() == 1
        ));
    }

    #[test]
    fn test_arity_too_many() {
        let (listing, diags) = parse_source("int 1 2\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "int expects 1 argument(s), found 2");
        assert!(matches!(
            listing.get(crate::OpPos::new(0, 0)).unwrap(),
            Op::Instr(i) if i.args.len() == 2
        ));
    }

    #[test]
    fn test_int_accepts_named_constants() {
        let (listing, diags) = parse_source("int pay\nint NoOp\nint 0x10\n");
        assert!(diags.is_empty());
        let ops = single_ops(&listing);
        assert!(matches!(ops[0], Op::Instr(i)
            if matches!(&i.args[0], ArgValue::NamedConst { .. })));
        assert!(matches!(ops[2], Op::Instr(i)
            if matches!(&i.args[0], ArgValue::Uint { value: 16, .. })));
    }

    #[test]
    fn test_int_rejects_garbage() {
        let (_, diags) = parse_source("int wat\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "\"wat\" is neither an integer nor a named constant"
        );
    }

    #[test]
    fn test_field_membership() {
        let (listing, diags) = parse_source("txn Sender\n");
        assert!(diags.is_empty());
        assert!(matches!(
            listing.get(crate::OpPos::new(0, 0)).unwrap(),
            Op::Instr(i) if matches!(&i.args[0], ArgValue::Field { .. })
        ));

        let (_, diags) = parse_source("txn Sendr\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unknown field \"Sendr\" for txn");
    }

    #[test]
    fn test_bytes_spellings() {
        let (listing, diags) =
            parse_source("byte \"hi\"\nbyte 0xdead\nbyte base64 aGk=\nbyte b64(aGk=)\n");
        assert!(diags.is_empty());
        let ops = single_ops(&listing);
        assert!(matches!(ops[2], Op::Instr(i)
            if matches!(&i.args[0], ArgValue::Bytes { tokens } if tokens.len() == 2)));
        assert!(matches!(ops[3], Op::Instr(i)
            if matches!(&i.args[0], ArgValue::Bytes { tokens } if tokens.len() == 1)));
    }

    #[test]
    fn test_bytes_bad_hex() {
        let (_, diags) = parse_source("byte 0xZZ\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "invalid hex byte-string \"0xZZ\"");

        let (_, diags) = parse_source("byte 0xabc\n");
        assert_eq!(diags.len(), 1, "odd-length hex is rejected");
    }

    #[test]
    fn test_bytes_marker_without_data() {
        let (_, diags) = parse_source("byte base64\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "byte expects data after \"base64\"");
    }

    #[test]
    fn test_comment_attaches_to_line() {
        let (listing, _) = parse_source("int 1 // the answer\n// only a comment\n");
        assert_eq!(
            listing.lines()[0].comment.as_ref().unwrap().value,
            " the answer"
        );
        // A comment-only line is a no-op but keeps its comment.
        assert!(listing.lines()[1].ops[0].is_nop());
        assert!(listing.lines()[1].comment.is_some());
    }

    #[test]
    fn test_parse_is_total_over_garbage() {
        let (listing, diags) = parse_source("\u{1}\u{2} ??? \"\n:::\n#pragma\n");
        assert_eq!(listing.len(), 3);
        assert!(!diags.is_empty());
        for (_, op) in listing.iter() {
            // Garbage parses to invalid nodes, never panics.
            let _ = op.span();
        }
    }

    #[test]
    fn test_later_version_ops_still_parse() {
        // Version gating is the analysis engine's job, not the parser's.
        let (listing, diags) = parse_source("box_create\n");
        assert!(diags.is_empty());
        assert!(matches!(
            listing.get(crate::OpPos::new(0, 0)).unwrap(),
            Op::Instr(i) if i.spec.name == "box_create"
        ));
    }
}
