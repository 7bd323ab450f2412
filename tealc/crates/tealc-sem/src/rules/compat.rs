//! Opcode availability rules.

use tealc_isa::RunMode;
use tealc_util::{Diagnostic, RuleId};

use crate::engine::Context;
use crate::rules::Rule;

/// LINT0007: every opcode must exist in the program's run mode.
///
/// The mode comes from the host (an application unless it says otherwise),
/// so a signature-only opcode such as `arg` inside an application program is
/// an error, and vice versa for the state-access opcodes.
pub struct OpModeAvailability;

impl Rule for OpModeAvailability {
    fn id(&self) -> RuleId {
        RuleId::LINT0007
    }

    fn description(&self) -> &'static str {
        "opcodes must be available in the program's run mode"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let mode = cx.mode();
        let mode_name = match mode {
            RunMode::Application => "application",
            RunMode::Signature => "signature",
        };

        for (_, op) in cx.listing().iter() {
            let Some(spec) = op.spec() else { continue };
            if !spec.modes.allows(mode) {
                let (line, begin, end) = op.span();
                cx.emit(Diagnostic::error(
                    self.id(),
                    line,
                    begin,
                    end,
                    format!("{} is not available in {} mode", spec.name, mode_name),
                ));
            }
        }
    }
}

/// LINT0008: every opcode must exist at the declared program version.
///
/// Runs only when a pragma declares a version; without one there is nothing
/// to check against.
pub struct OpVersionCompatibility;

impl Rule for OpVersionCompatibility {
    fn id(&self) -> RuleId {
        RuleId::LINT0008
    }

    fn description(&self) -> &'static str {
        "opcodes must not require a newer version than the pragma declares"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let Some(version) = cx.declared_version() else {
            return;
        };

        for (_, op) in cx.listing().iter() {
            let Some(spec) = op.spec() else { continue };
            if !spec.available_at(version) {
                let (line, begin, end) = op.span();
                cx.emit(Diagnostic::error(
                    self.id(),
                    line,
                    begin,
                    end,
                    format!(
                        "{} requires version {}, but the program declares version {}",
                        spec.name, spec.min_version, version
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::{run_rules, run_rules_with};
    use crate::AnalysisOptions;
    use tealc_isa::RunMode;
    use tealc_util::RuleId;

    #[test]
    fn test_signature_op_in_application_mode() {
        let (diags, _) = run_rules("arg 0\n");
        let hits: Vec<_> = diags.iter().filter(|d| d.rule == RuleId::LINT0007).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].message, "arg is not available in application mode");
    }

    #[test]
    fn test_application_op_in_signature_mode() {
        let options = AnalysisOptions {
            mode: RunMode::Signature,
        };
        let (diags, _) = run_rules_with("app_global_get\n", &options);
        let hits: Vec<_> = diags.iter().filter(|d| d.rule == RuleId::LINT0007).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].message,
            "app_global_get is not available in signature mode"
        );
    }

    #[test]
    fn test_any_mode_ops_are_quiet() {
        let (diags, _) = run_rules("int 1\npop\n");
        assert!(diags.iter().all(|d| d.rule != RuleId::LINT0007));
    }

    #[test]
    fn test_version_gate() {
        let (diags, _) = run_rules("#pragma version 3\ncallsub sub\nsub:\nretsub\n");
        let hits: Vec<_> = diags.iter().filter(|d| d.rule == RuleId::LINT0008).collect();
        assert_eq!(hits.len(), 2, "callsub and retsub are both version 4");
        assert_eq!(
            hits[0].message,
            "callsub requires version 4, but the program declares version 3"
        );
    }

    #[test]
    fn test_version_ok() {
        let (diags, _) = run_rules("#pragma version 8\nbox_create\n");
        assert!(diags.iter().all(|d| d.rule != RuleId::LINT0008));
    }

    #[test]
    fn test_no_pragma_no_version_check() {
        let (diags, _) = run_rules("box_create\n");
        assert!(diags.iter().all(|d| d.rule != RuleId::LINT0008));
    }
}
