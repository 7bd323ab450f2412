//! Pragma placement.

use tealc_par::Op;
use tealc_util::{Diagnostic, RuleId};

use crate::engine::Context;
use crate::rules::Rule;

/// LINT0006: `#pragma version` must precede the program.
///
/// The pragma declares which instruction set the whole file targets, so one
/// appearing after any real operation (instruction or label) is an error.
/// Blank lines, comments, and unparseable lines do not count as the start
/// of the program.
pub struct PragmaPlacement;

impl Rule for PragmaPlacement {
    fn id(&self) -> RuleId {
        RuleId::LINT0006
    }

    fn description(&self) -> &'static str {
        "the version pragma must come before all instructions"
    }

    fn run(&self, cx: &mut Context<'_>) {
        let mut program_started = false;
        for (_, op) in cx.listing().iter() {
            match op {
                Op::Pragma(_) => {
                    if program_started {
                        let (line, begin, end) = op.span();
                        cx.emit(Diagnostic::error(
                            self.id(),
                            line,
                            begin,
                            end,
                            "\"#pragma version\" must appear before any instruction",
                        ));
                    }
                }
                Op::Empty(_) | Op::Invalid(_) => {}
                _ => program_started = true,
            }
        }
    }
}
