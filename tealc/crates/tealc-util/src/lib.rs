//! tealc-util - Foundation Types for the TEAL Language Services
//!
//! This crate provides the types shared by every stage of the pipeline:
//! source positions, diagnostics with stable rule identifiers, the
//! diagnostic handler, and the internal-error type used for invariant
//! breaches.
//!
//! Everything in here is deliberately small and allocation-light. Positions
//! are plain `(line, column)` pairs measured in bytes; diagnostics carry the
//! final, host-facing severity integers so language-server wrappers can pass
//! them through unmodified.

pub mod diagnostic;
pub mod error;
pub mod position;

pub use diagnostic::{Diagnostic, Handler, RuleId, Severity};
pub use error::InternalError;
pub use position::Position;
