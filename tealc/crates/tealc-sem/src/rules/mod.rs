//! The analysis rules.
//!
//! Each rule owns one stable identifier and one concern. Rules run in
//! registration order, share no mutable state beyond the context's output
//! sinks, and each is O(lines × labels) or better.

mod compat;
mod flow;
mod labels;
mod pragma;

use tealc_util::RuleId;

use crate::engine::Context;

pub use compat::{OpModeAvailability, OpVersionCompatibility};
pub use flow::{BranchJustBeforeLabel, Loops, OpsAfterTerminator};
pub use labels::{DuplicateLabels, UnusedLabels};
pub use pragma::PragmaPlacement;

/// One analysis rule.
pub trait Rule {
    /// The rule's stable identifier.
    fn id(&self) -> RuleId;

    /// What the rule checks, one line.
    fn description(&self) -> &'static str;

    /// Runs the rule over the context's listing.
    fn run(&self, cx: &mut Context<'_>);
}

/// The built-in rules, in their fixed registration order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DuplicateLabels),
        Box::new(UnusedLabels),
        Box::new(OpsAfterTerminator),
        Box::new(BranchJustBeforeLabel),
        Box::new(Loops),
        Box::new(PragmaPlacement),
        Box::new(OpModeAvailability),
        Box::new(OpVersionCompatibility),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_stable() {
        let ids: Vec<&str> = default_rules().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "LINT0001", "LINT0002", "LINT0003", "LINT0004", "LINT0005", "LINT0006",
                "LINT0007", "LINT0008",
            ]
        );
    }

    #[test]
    fn test_descriptions_are_present() {
        for rule in default_rules() {
            assert!(!rule.description().is_empty(), "{} lacks a description", rule.id());
        }
    }
}
