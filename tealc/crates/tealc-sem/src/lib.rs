//! tealc-sem - Semantic Analysis for TEAL
//!
//! An ordered pipeline of independent rules over the parsed listing. Each
//! rule reads the shared [`engine::Context`] (label indexes, traversal,
//! the escape heuristic) and produces diagnostics and redundancy
//! suggestions. A rule never disables another rule, and registration order
//! fixes the output order for equal positions.

pub mod engine;
pub mod rules;

use serde::Serialize;
use tealc_isa::RunMode;
use tealc_par::Listing;
use tealc_util::Handler;

use engine::Context;
use rules::default_rules;

/// Host-supplied knobs for an analysis pass.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisOptions {
    /// The run mode to check opcode availability against. Programs are
    /// assumed to be applications unless the host knows otherwise.
    pub mode: RunMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            mode: RunMode::Application,
        }
    }
}

/// What a redundancy suggestion proposes removing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    /// The line declares a label nothing uses.
    RedundantLabel,
    /// The line branches onto its own target.
    RedundantBranch,
}

/// A line the program does not need. Hosts turn these into code actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The removable line.
    pub line: u32,
    /// Why it is removable.
    pub kind: SuggestionKind,
}

/// Runs every registered rule over `listing`.
///
/// Diagnostics land in `handler`; the returned suggestions are the
/// accumulated redundancy hints in rule order.
pub fn analyze(listing: &Listing, handler: &Handler, options: &AnalysisOptions) -> Vec<Suggestion> {
    let mut cx = Context::new(listing, handler, options);
    for rule in default_rules() {
        tracing::debug!(rule = rule.id().as_str(), "running analysis rule");
        rule.run(&mut cx);
    }
    cx.into_suggestions()
}


#[cfg(test)]
mod tests {
    use super::tests_support::run_rules;
    use super::*;

    #[test]
    fn test_clean_program_has_no_findings() {
        let (diags, suggestions) = run_rules(
            "#pragma version 8\nmain:\ntxn ApplicationID\nbz create\nint 1\nreturn\ncreate:\nint 0\nbnz main\nint 1\nreturn\n",
        );
        // The backward `bnz main` keeps the `main` label used.
        assert!(diags.is_empty(), "unexpected: {diags:?}");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_rules_are_independent() {
        // A program tripping several rules reports all of them.
        let (diags, _) = run_rules("int 1\n#pragma version 3\nb nope\nbox_create\n");
        let rules: Vec<&str> = diags.iter().map(|d| d.rule.as_str()).collect();
        assert!(rules.contains(&"LINT0006"));
        assert!(rules.contains(&"LINT0005"));
        assert!(rules.contains(&"LINT0008"));
    }

    #[test]
    fn test_diagnostics_are_sorted() {
        let (diags, _) = run_rules("b nope\nb nope\n");
        for pair in diags.windows(2) {
            assert!(pair[0].sort_key() <= pair[1].sort_key());
        }
    }

    #[test]
    fn test_options_default_to_application() {
        assert_eq!(
            AnalysisOptions::default().mode,
            tealc_isa::RunMode::Application
        );
    }
}
