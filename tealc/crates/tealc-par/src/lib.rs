//! tealc-par - Parser and Listing for TEAL
//!
//! TEAL has no nesting and no expressions: one source line is one
//! instruction (or a label, a pragma, or nothing). The parser is therefore
//! a classifier over logical lines, driven entirely by the opcode catalog:
//! the catalog declares each opcode's immediates, and the parser consumes
//! and validates exactly those.
//!
//! The output is the [`Listing`]: operation nodes in source order, indexed
//! by `(line, sub)`, total over any input. Parse failures become
//! [`listing::InvalidOp`] placeholder nodes so a broken line never hides the
//! rest of the program from the analysis rules.

pub mod listing;
mod number;
mod parser;

pub use listing::{
    ArgValue, BranchOp, EmptyOp, InstrOp, InvalidOp, LabelOp, LabelRef, Line, Listing, Op, OpPos,
    PlainOp, PragmaOp,
};
pub use number::{looks_numeric, parse_uint, NumberError};
pub use parser::parse;
