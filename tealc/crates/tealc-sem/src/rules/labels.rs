//! Label hygiene rules.

use tealc_util::{Diagnostic, RuleId};

use crate::engine::Context;
use crate::rules::Rule;
use crate::{Suggestion, SuggestionKind};

/// LINT0001: a label name declared more than once.
///
/// Duplicate declarations make every reference ambiguous, so each
/// occurrence is an error.
pub struct DuplicateLabels;

impl Rule for DuplicateLabels {
    fn id(&self) -> RuleId {
        RuleId::LINT0001
    }

    fn description(&self) -> &'static str {
        "label names must be declared at most once"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let duplicated: Vec<(String, Vec<tealc_par::OpPos>)> = cx
            .labels()
            .iter()
            .filter(|(_, decls)| decls.len() > 1)
            .map(|(name, decls)| (name.clone(), decls.clone()))
            .collect();

        for (name, decls) in duplicated {
            for pos in decls {
                if let Ok(op) = cx.listing().op_at(pos) {
                    let (line, begin, end) = op.span();
                    cx.emit(Diagnostic::error(
                        self.id(),
                        line,
                        begin,
                        end,
                        format!("duplicate label: \"{name}\""),
                    ));
                }
            }
        }
    }
}

/// LINT0002: a label no operation branches to.
///
/// Dead labels are noise and frequently typos; the declaration line can be
/// removed, which the suggestion records for code actions.
pub struct UnusedLabels;

impl Rule for UnusedLabels {
    fn id(&self) -> RuleId {
        RuleId::LINT0002
    }

    fn description(&self) -> &'static str {
        "every declared label should have at least one user"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let unused: Vec<(String, Vec<tealc_par::OpPos>)> = cx
            .labels()
            .iter()
            .filter(|(name, _)| !cx.label_users().contains_key(name.as_str()))
            .map(|(name, decls)| (name.clone(), decls.clone()))
            .collect();

        for (name, decls) in unused {
            for pos in decls {
                if let Ok(op) = cx.listing().op_at(pos) {
                    let (line, begin, end) = op.span();
                    cx.emit(Diagnostic::warning(
                        self.id(),
                        line,
                        begin,
                        end,
                        format!("unused label: \"{name}\""),
                    ));
                    cx.suggest(Suggestion {
                        line,
                        kind: SuggestionKind::RedundantLabel,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::run_rules;
    use tealc_util::{RuleId, Severity};

    #[test]
    fn test_duplicate_labels_flag_every_occurrence() {
        let (diags, _) = run_rules("a:\nint 1\na:\nint 2\n");
        let dups: Vec<_> = diags.iter().filter(|d| d.rule == RuleId::LINT0001).collect();
        assert_eq!(dups.len(), 2);
        assert_eq!(dups[0].line, 0);
        assert_eq!(dups[1].line, 2);
        assert_eq!(dups[0].message, "duplicate label: \"a\"");
        assert!(dups.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn test_unused_label_warns_and_suggests() {
        let (diags, suggestions) = run_rules("a:\nint 1\nreturn\n");
        let unused: Vec<_> = diags.iter().filter(|d| d.rule == RuleId::LINT0002).collect();
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].line, 0);
        assert_eq!(unused[0].begin, 0);
        assert_eq!(unused[0].message, "unused label: \"a\"");
        assert_eq!(unused[0].severity, Severity::Warning);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].line, 0);
    }

    #[test]
    fn test_used_label_is_quiet() {
        let (diags, _) = run_rules("a:\nb a\n");
        assert!(diags.iter().all(|d| d.rule != RuleId::LINT0002));
    }

    #[test]
    fn test_switch_targets_count_as_users() {
        let (diags, _) = run_rules("switch a b\na:\nb:\n");
        assert!(diags.iter().all(|d| d.rule != RuleId::LINT0002));
    }
}
