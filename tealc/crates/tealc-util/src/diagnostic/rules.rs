//! Stable rule identifiers.
//!
//! Every diagnostic carries the identifier of the rule that produced it.
//! These strings are part of the external surface (suppression tooling and
//! SARIF emitters key on them) and must never change once published.

use serde::{Serialize, Serializer};

/// Identifier of a diagnostic-producing rule.
///
/// `SYNTAX` and `PARSE` are reserved for the lexer and parser; the analysis
/// rules use the `LINT` series. New rules may be added, but an identifier is
/// stable for life once it has shipped.
///
/// # Examples
///
/// ```
/// use tealc_util::RuleId;
///
/// assert_eq!(RuleId::LINT0002.as_str(), "LINT0002");
/// assert_eq!(format!("{}", RuleId::PARSE), "PARSE");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(&'static str);

impl RuleId {
    /// Lexical errors: malformed byte sequences, unterminated strings.
    pub const SYNTAX: Self = Self("SYNTAX");
    /// Parse errors: unknown opcodes, wrong arity, malformed literals.
    pub const PARSE: Self = Self("PARSE");

    /// Duplicate label declarations.
    pub const LINT0001: Self = Self("LINT0001");
    /// Labels never referenced by any instruction.
    pub const LINT0002: Self = Self("LINT0002");
    /// Instructions that can never execute.
    pub const LINT0003: Self = Self("LINT0003");
    /// Unconditional branch straight onto its own target label.
    pub const LINT0004: Self = Self("LINT0004");
    /// Label resolution and infinite-loop detection.
    pub const LINT0005: Self = Self("LINT0005");
    /// Version pragma placement.
    pub const LINT0006: Self = Self("LINT0006");
    /// Opcode availability in the program's run mode.
    pub const LINT0007: Self = Self("LINT0007");
    /// Opcode availability at the declared program version.
    pub const LINT0008: Self = Self("LINT0008");

    /// The stable identifier string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Debug for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_strings() {
        assert_eq!(RuleId::SYNTAX.as_str(), "SYNTAX");
        assert_eq!(RuleId::PARSE.as_str(), "PARSE");
        assert_eq!(RuleId::LINT0001.as_str(), "LINT0001");
        assert_eq!(RuleId::LINT0008.as_str(), "LINT0008");
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", RuleId::LINT0005), "RuleId(LINT0005)");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&RuleId::LINT0003).unwrap();
        assert_eq!(json, "\"LINT0003\"");
    }

    #[test]
    fn test_ordering_matches_strings() {
        assert!(RuleId::LINT0001 < RuleId::LINT0002);
        assert!(RuleId::LINT0002 < RuleId::SYNTAX);
    }
}
