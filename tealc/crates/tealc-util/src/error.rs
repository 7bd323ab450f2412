//! Internal errors.
//!
//! User input can never produce these: malformed source is reported through
//! [`crate::Diagnostic`]s. An [`InternalError`] means a pipeline invariant
//! was broken by the code itself (a listing index that does not exist, a
//! span that contradicts its token). Callers surface it with the offending
//! location and stop; there is no recovery path.

use thiserror::Error;

use crate::Position;

/// Invariant breaches inside the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalError {
    /// An operation index that is not present in the listing.
    #[error("listing has no operation at {line}:{sub} (line count {line_count})")]
    ListingIndex {
        /// Requested line index.
        line: u32,
        /// Requested sub-index within the line.
        sub: u32,
        /// Number of lines actually present.
        line_count: usize,
    },

    /// A span whose boundaries are inconsistent.
    #[error("invalid span at {at}: begin {begin} > end {end}")]
    InvalidSpan {
        /// Where the span was observed.
        at: Position,
        /// Claimed begin column.
        begin: u32,
        /// Claimed end column.
        end: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_index_message() {
        let err = InternalError::ListingIndex {
            line: 7,
            sub: 1,
            line_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "listing has no operation at 7:1 (line count 3)"
        );
    }

    #[test]
    fn test_invalid_span_message() {
        let err = InternalError::InvalidSpan {
            at: Position::new(2, 0),
            begin: 9,
            end: 4,
        };
        assert_eq!(err.to_string(), "invalid span at 2:0: begin 9 > end 4");
    }
}
