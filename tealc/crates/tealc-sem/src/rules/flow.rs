//! Control-flow rules.

use tealc_par::Op;
use tealc_util::{Diagnostic, RuleId};

use crate::engine::Context;
use crate::rules::Rule;
use crate::{Suggestion, SuggestionKind};

/// LINT0003: operations that can never execute.
///
/// After an operation control cannot fall through (`b`, `return`, `err`,
/// `retsub`), everything up to the next label that something branches to is
/// dead. Unused labels do not resurrect the code behind them.
pub struct OpsAfterTerminator;

impl Rule for OpsAfterTerminator {
    fn id(&self) -> RuleId {
        RuleId::LINT0003
    }

    fn description(&self) -> &'static str {
        "code behind a terminator is unreachable until a used label"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let mut unreachable = false;
        for (_, op) in cx.listing().iter() {
            if op.is_nop() || op.is_invalid() {
                continue;
            }
            if let Op::Label(label) = op {
                if cx.is_label_used(&label.name) {
                    unreachable = false;
                    continue;
                }
            }
            if unreachable {
                let (line, begin, end) = op.span();
                cx.emit(Diagnostic::warning(
                    self.id(),
                    line,
                    begin,
                    end,
                    "unreachable code",
                ));
            } else if op.is_terminator() {
                unreachable = true;
            }
        }
    }
}

/// LINT0004: an unconditional branch straight onto its own target.
///
/// `b L` with `L:` as the next real operation does nothing; execution would
/// have arrived there anyway. The branch line can be removed, which the
/// suggestion records for code actions.
pub struct BranchJustBeforeLabel;

impl Rule for BranchJustBeforeLabel {
    fn id(&self) -> RuleId {
        RuleId::LINT0004
    }

    fn description(&self) -> &'static str {
        "an unconditional branch onto the next label is redundant"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let mut redundant: Vec<(u32, u32, u32)> = Vec::new();

        for (pos, op) in cx.listing().iter() {
            let Op::Branch(branch) = op else { continue };
            let Some(target) = branch.targets.first() else {
                continue;
            };

            for (next_pos, next_op) in cx.listing().iter_forward(pos) {
                if next_pos <= pos || next_op.is_nop() {
                    continue;
                }
                if let Op::Label(label) = next_op {
                    if label.name == target.name {
                        redundant.push(op.span());
                    }
                }
                break;
            }
        }

        for (line, begin, end) in redundant {
            cx.emit(Diagnostic::warning(
                self.id(),
                line,
                begin,
                end,
                "unconditional branch just before the target label",
            ));
            cx.suggest(Suggestion {
                line,
                kind: SuggestionKind::RedundantBranch,
            });
        }
    }
}

/// LINT0005: label resolution and loop detection.
///
/// Every reference must name a declared label. An unconditional backward
/// branch whose body offers no way out is an infinite loop; the escape test
/// is the context's heuristic, so only certainly-closed loops are reported.
pub struct Loops;

impl Rule for Loops {
    fn id(&self) -> RuleId {
        RuleId::LINT0005
    }

    fn description(&self) -> &'static str {
        "label references must resolve, and closed backward branches loop forever"
    }

    fn run(&self, cx: &mut Context<'_>) {
        for (_, label_ref) in cx.label_refs() {
            if !cx.labels().contains_key(&label_ref.name) {
                let token = &label_ref.token;
                cx.emit(Diagnostic::error(
                    self.id(),
                    token.line,
                    token.begin,
                    token.end,
                    format!("missing label: \"{}\"", label_ref.name),
                ));
            }
        }

        for (pos, op) in cx.listing().iter() {
            let Op::Branch(branch) = op else { continue };
            let Some(target) = branch.targets.first() else {
                continue;
            };
            let Some(decls) = cx.labels().get(&target.name) else {
                continue;
            };

            // The governing declaration is the closest one above the branch.
            let Some(decl) = decls.iter().filter(|decl| **decl < pos).max() else {
                continue;
            };

            if !cx.can_escape(*decl, pos) {
                let (line, begin, end) = op.span();
                cx.emit(Diagnostic::error(
                    self.id(),
                    line,
                    begin,
                    end,
                    "infinite loop",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::run_rules;
    use tealc_util::{RuleId, Severity};

    fn of_rule(
        diags: &[tealc_util::Diagnostic],
        rule: RuleId,
    ) -> Vec<tealc_util::Diagnostic> {
        diags.iter().filter(|d| d.rule == rule).cloned().collect()
    }

    #[test]
    fn test_unreachable_after_return() {
        let (diags, _) = run_rules("return\nint 1\n");
        let hits = of_rule(&diags, RuleId::LINT0003);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 1);
        assert_eq!(hits[0].message, "unreachable code");
        assert_eq!(hits[0].severity, Severity::Warning);
    }

    #[test]
    fn test_unreachable_stops_at_used_label() {
        let (diags, _) = run_rules("b skip\nint 1\nskip:\nint 2\nreturn\n");
        let hits = of_rule(&diags, RuleId::LINT0003);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 1);
    }

    #[test]
    fn test_unused_label_does_not_resurrect() {
        let (diags, _) = run_rules("err\ndead:\nint 1\n");
        let hits = of_rule(&diags, RuleId::LINT0003);
        // Both the dead label and the op behind it are unreachable.
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_blank_lines_are_not_unreachable() {
        let (diags, _) = run_rules("return\n\n// note\n");
        assert!(of_rule(&diags, RuleId::LINT0003).is_empty());
    }

    #[test]
    fn test_retsub_terminates_flow() {
        let (diags, _) = run_rules("retsub\nint 1\n");
        assert_eq!(of_rule(&diags, RuleId::LINT0003).len(), 1);
    }

    #[test]
    fn test_redundant_branch() {
        let (diags, suggestions) = run_rules("b end\nend:\nint 1\nreturn\n");
        let hits = of_rule(&diags, RuleId::LINT0004);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 0);
        assert_eq!(
            hits[0].message,
            "unconditional branch just before the target label"
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 0);
    }

    #[test]
    fn test_redundant_branch_skips_blank_lines() {
        let (diags, _) = run_rules("b end\n\n\nend:\nreturn\n");
        assert_eq!(of_rule(&diags, RuleId::LINT0004).len(), 1);
    }

    #[test]
    fn test_branch_over_real_code_is_fine() {
        let (diags, _) = run_rules("b end\nint 1\nend:\nreturn\n");
        assert!(of_rule(&diags, RuleId::LINT0004).is_empty());
    }

    #[test]
    fn test_conditional_branch_is_not_redundant() {
        let (diags, _) = run_rules("bz end\nend:\nreturn\n");
        assert!(of_rule(&diags, RuleId::LINT0004).is_empty());
    }

    #[test]
    fn test_missing_label() {
        let (diags, _) = run_rules("b nope\n");
        let hits = of_rule(&diags, RuleId::LINT0005);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 0);
        assert_eq!(hits[0].message, "missing label: \"nope\"");
        assert_eq!(hits[0].severity, Severity::Error);
        // The span points at the referencing token, not the opcode.
        assert_eq!(hits[0].begin, 2);
        assert_eq!(hits[0].end, 6);
    }

    #[test]
    fn test_infinite_loop() {
        let (diags, _) = run_rules("loop:\nb loop\n");
        let hits = of_rule(&diags, RuleId::LINT0005);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 1);
        assert_eq!(hits[0].message, "infinite loop");
    }

    #[test]
    fn test_loop_with_escape_is_fine() {
        let (diags, _) = run_rules("loop:\nbnz out\nb loop\nout:\nreturn\n");
        assert!(of_rule(&diags, RuleId::LINT0005)
            .iter()
            .all(|d| d.message != "infinite loop"));
    }

    #[test]
    fn test_forward_branch_is_not_a_loop() {
        let (diags, _) = run_rules("b end\nint 1\nend:\nreturn\n");
        assert!(of_rule(&diags, RuleId::LINT0005).is_empty());
    }
}
