//! Diagnostic infrastructure.
//!
//! Nothing in the pipeline aborts on bad input: the lexer, parser, and every
//! analysis rule report problems as [`Diagnostic`] values collected by a
//! [`Handler`]. A diagnostic pins down a byte range on a single source line,
//! a severity, a human-readable message, and the stable [`RuleId`] of its
//! producer.
//!
//! # Examples
//!
//! ```
//! use tealc_util::{Diagnostic, Handler, RuleId};
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error(RuleId::PARSE, 0, 0, 3, "unknown opcode: \"foo\""));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod rules;

pub use rules::RuleId;

use std::cell::RefCell;

use serde::{Serialize, Serializer};

/// Diagnostic severity.
///
/// The discriminants are the wire integers of the editor protocol, so hosts
/// forward them without translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Compile-blocking problem.
    Error = 1,
    /// Suspicious but not blocking.
    Warning = 2,
    /// Neutral information.
    Info = 3,
    /// A nudge, below warning level.
    Hint = 4,
}

impl Severity {
    /// The wire integer for this severity.
    #[inline]
    pub const fn as_int(self) -> u8 {
        self as u8
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_int())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// A single reported problem.
///
/// `begin`/`end` are byte columns within `line`; `end` is exclusive. A
/// diagnostic never spans lines, matching the token model it is produced
/// from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Line index (zero-based).
    pub line: u32,
    /// First byte column of the offending range.
    pub begin: u32,
    /// One past the last byte column of the offending range.
    pub end: u32,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Stable identifier of the producing rule.
    pub rule: RuleId,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit severity.
    pub fn new(
        rule: RuleId,
        severity: Severity,
        line: u32,
        begin: u32,
        end: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            begin,
            end,
            severity,
            message: message.into(),
            rule,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(rule: RuleId, line: u32, begin: u32, end: u32, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, line, begin, end, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(
        rule: RuleId,
        line: u32,
        begin: u32,
        end: u32,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule, Severity::Warning, line, begin, end, message)
    }

    /// Sort key: line first, then column, then rule identifier.
    ///
    /// Equal positions may legitimately hold several diagnostics; the rule
    /// identifier keeps the order reproducible.
    #[inline]
    pub fn sort_key(&self) -> (u32, u32, &'static str) {
        (self.line, self.begin, self.rule.as_str())
    }
}

/// Collects diagnostics across pipeline stages.
///
/// Stages share one handler per document pass, so a parse error and a lint
/// warning land in the same list and are sorted once at the end. Interior
/// mutability keeps emission possible from `&self` contexts such as rule
/// callbacks.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Number of recorded warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// A copy of everything recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consumes the handler and returns the diagnostics sorted by
    /// `(line, column, rule)`. Duplicate-equal entries are preserved.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut out = self.diagnostics.into_inner();
        out.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        out
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_wire_integers() {
        assert_eq!(Severity::Error.as_int(), 1);
        assert_eq!(Severity::Warning.as_int(), 2);
        assert_eq!(Severity::Info.as_int(), 3);
        assert_eq!(Severity::Hint.as_int(), 4);
    }

    #[test]
    fn test_severity_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "2");
    }

    #[test]
    fn test_diagnostic_constructors() {
        let d = Diagnostic::error(RuleId::SYNTAX, 3, 0, 5, "unterminated string");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.line, 3);

        let w = Diagnostic::warning(RuleId::LINT0002, 0, 0, 2, "unused label: \"a\"");
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(w.rule, RuleId::LINT0002);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error(RuleId::PARSE, 0, 0, 1, "e"));
        handler.emit(Diagnostic::warning(RuleId::LINT0004, 1, 0, 1, "w"));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_into_sorted_orders_by_line_column_rule() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error(RuleId::LINT0005, 2, 0, 1, "later line"));
        handler.emit(Diagnostic::error(RuleId::LINT0005, 0, 4, 5, "later col"));
        handler.emit(Diagnostic::error(RuleId::LINT0001, 0, 4, 5, "same pos, earlier rule"));
        handler.emit(Diagnostic::error(RuleId::PARSE, 0, 0, 1, "first"));

        let sorted = handler.into_sorted();
        assert_eq!(sorted[0].message, "first");
        assert_eq!(sorted[1].rule, RuleId::LINT0001);
        assert_eq!(sorted[2].rule, RuleId::LINT0005);
        assert_eq!(sorted[3].line, 2);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let handler = Handler::new();
        let d = Diagnostic::error(RuleId::LINT0001, 1, 0, 2, "duplicate label: \"a\"");
        handler.emit(d.clone());
        handler.emit(d);
        assert_eq!(handler.into_sorted().len(), 2);
    }

    #[test]
    fn test_diagnostic_json_surface() {
        let d = Diagnostic::warning(RuleId::LINT0003, 1, 0, 5, "unreachable code");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], 2);
        assert_eq!(json["rule"], "LINT0003");
        assert_eq!(json["line"], 1);
    }
}
