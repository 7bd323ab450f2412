//! Source positions.
//!
//! A position is a `(line, column)` pair, both zero-based, with the column
//! measured in bytes within the line. One-based conversion happens only at
//! external boundaries (editors speak one-based lines in some surfaces); the
//! whole pipeline stays zero-based internally.

use serde::Serialize;

/// A point in a source document.
///
/// Ordering is total: an earlier line wins, and within a line the smaller
/// column wins. This is exactly the `derive(Ord)` tuple order, but the
/// `before`/`after` helpers read better at call sites in the analysis rules.
///
/// # Examples
///
/// ```
/// use tealc_util::Position;
///
/// let a = Position::new(1, 4);
/// let b = Position::new(2, 0);
/// assert!(a.before(b));
/// assert!(b.after(a));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line index (zero-based).
    pub line: u32,
    /// Byte column within the line (zero-based).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if `self` is strictly before `other`.
    #[inline]
    pub fn before(self, other: Position) -> bool {
        self < other
    }

    /// Returns true if `self` is strictly after `other`.
    #[inline]
    pub fn after(self, other: Position) -> bool {
        self > other
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_earlier_line_wins() {
        assert!(Position::new(0, 100).before(Position::new(1, 0)));
    }

    #[test]
    fn test_column_breaks_ties() {
        assert!(Position::new(3, 2).before(Position::new(3, 3)));
        assert!(Position::new(3, 3).after(Position::new(3, 2)));
    }

    #[test]
    fn test_equal_positions() {
        let p = Position::new(5, 7);
        assert!(!p.before(p));
        assert!(!p.after(p));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(2, 9)), "2:9");
    }

    #[quickcheck]
    fn prop_ordering_is_total(a: (u32, u32), b: (u32, u32)) -> bool {
        let a = Position::new(a.0, a.1);
        let b = Position::new(b.0, b.1);
        // Exactly one of before/after/equal holds.
        [a.before(b), a.after(b), a == b].iter().filter(|x| **x).count() == 1
    }

    #[quickcheck]
    fn prop_before_is_transitive(a: (u32, u32), b: (u32, u32), c: (u32, u32)) -> bool {
        let (a, b, c) = (
            Position::new(a.0, a.1),
            Position::new(b.0, b.1),
            Position::new(c.0, c.1),
        );
        !(a.before(b) && b.before(c)) || a.before(c)
    }
}
