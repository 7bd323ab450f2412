//! The rule context: shared queries over the listing.
//!
//! Rules are independent of each other; what they share is this context:
//! the listing, the label indexes built once per analysis, the diagnostic
//! handler, and the suggestion sink. All label maps preserve first-seen
//! order so rule output is deterministic.

use indexmap::IndexMap;
use tealc_isa::RunMode;
use tealc_par::{LabelRef, Listing, Op, OpPos};
use tealc_util::{Diagnostic, Handler};

use crate::{AnalysisOptions, Suggestion};

/// Everything a rule can see and produce.
pub struct Context<'a> {
    listing: &'a Listing,
    handler: &'a Handler,
    options: &'a AnalysisOptions,
    suggestions: Vec<Suggestion>,

    /// Label name → declaration positions, in source order.
    labels: IndexMap<String, Vec<OpPos>>,
    /// Label name → positions of operations referencing it.
    users: IndexMap<String, Vec<OpPos>>,
    /// Every label reference with the operation that holds it.
    refs: Vec<(OpPos, LabelRef)>,
}

impl<'a> Context<'a> {
    /// Builds the context and its label indexes in one listing pass.
    pub fn new(listing: &'a Listing, handler: &'a Handler, options: &'a AnalysisOptions) -> Self {
        let mut labels: IndexMap<String, Vec<OpPos>> = IndexMap::new();
        let mut users: IndexMap<String, Vec<OpPos>> = IndexMap::new();
        let mut refs = Vec::new();

        for (pos, op) in listing.iter() {
            if let Op::Label(label) = op {
                labels.entry(label.name.clone()).or_default().push(pos);
            }
            for label_ref in op.labels() {
                users.entry(label_ref.name.clone()).or_default().push(pos);
                refs.push((pos, label_ref));
            }
        }

        Self {
            listing,
            handler,
            options,
            suggestions: Vec::new(),
            labels,
            users,
            refs,
        }
    }

    /// The listing under analysis.
    #[inline]
    pub fn listing(&self) -> &'a Listing {
        self.listing
    }

    /// The run mode the program is being checked against.
    #[inline]
    pub fn mode(&self) -> RunMode {
        self.options.mode
    }

    /// Declaration positions of every label, in source order.
    pub fn labels(&self) -> &IndexMap<String, Vec<OpPos>> {
        &self.labels
    }

    /// Positions of every operation using each label.
    pub fn label_users(&self) -> &IndexMap<String, Vec<OpPos>> {
        &self.users
    }

    /// Every label reference, with the position of the referencing
    /// operation.
    pub fn label_refs(&self) -> &[(OpPos, LabelRef)] {
        &self.refs
    }

    /// Returns true if label `name` has at least one user.
    pub fn is_label_used(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// The version declared by the program's final pragma, if any.
    pub fn declared_version(&self) -> Option<u64> {
        let mut version = None;
        for (_, op) in self.listing.iter() {
            if let Op::Pragma(pragma) = op {
                version = Some(pragma.version);
            }
        }
        version
    }

    /// Reports a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.handler.emit(diagnostic);
    }

    /// Records a redundancy suggestion.
    pub fn suggest(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    /// Finishes the analysis, yielding the collected suggestions.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }

    /// Heuristic escape test over the half-open operation range
    /// `[from, to)`: can control flow leave it?
    ///
    /// The range escapes if it contains a terminator, a reference to a label
    /// declared outside `[from, to]`, or a reference that does not resolve
    /// at all. This under-approximates infinite loops (a nested branch
    /// that never leaves the range still counts as an escape), so the loop
    /// rule errs toward silence, never toward false alarms.
    pub fn can_escape(&self, from: OpPos, to: OpPos) -> bool {
        for (pos, op) in self.listing.iter_forward(from) {
            if pos >= to {
                break;
            }
            if op.is_terminator() {
                return true;
            }
            for label_ref in op.labels() {
                match self.labels.get(&label_ref.name) {
                    None => return true,
                    Some(decls) => {
                        if decls.iter().any(|decl| *decl < from || *decl > to) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
