//! tealc-isa - The TEAL Opcode Catalog
//!
//! ============================================================================
//! CATALOG OVERVIEW
//! ============================================================================
//!
//! A single immutable registry of every TEAL opcode across program versions
//! 1 through 8. Each entry records the opcode's immediate-argument shapes,
//! minimum program version, the run modes it is legal in, its stack results,
//! and its documentation.
//!
//! The catalog is the single source of truth for three consumers:
//!
//! - the parser (argument arity and kinds, enumeration membership),
//! - the analysis rules (version and mode availability),
//! - the editor features (completion choices, hover and signature text).
//!
//! It is compiled-in data: nothing is loaded at runtime, initialization cost
//! is one lazy hash-index build, and lookups on the hot path allocate
//! nothing.
//!
//! ============================================================================
//! IMMEDIATES vs STACK ARGUMENTS
//! ============================================================================
//!
//! TEAL opcodes take their real operands from the stack; what appears after
//! the opcode name in source are the *immediates* (indexes, field names,
//! literal constants, branch targets). The catalog describes immediates
//! only; stack effects are captured just as result types for hover text,
//! since the core performs no stack type inference.

mod fields;
mod ops;

pub use fields::*;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Highest program version the catalog knows about.
pub const MAX_VERSION: u64 = 8;

/// Program version assumed when no pragma declares one.
pub const DEFAULT_VERSION: u64 = 1;

/// The deployment context of a program.
///
/// Application-call programs and logic-signature programs see different
/// opcode subsets: state access exists only for applications, transaction
/// argument access only for signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Application call (stateful) program.
    Application,
    /// Logic signature (stateless) program.
    Signature,
}

/// The set of run modes an opcode is available in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modes {
    /// Available in application programs.
    pub app: bool,
    /// Available in logic-signature programs.
    pub sig: bool,
}

impl Modes {
    /// Available everywhere.
    pub const ANY: Modes = Modes { app: true, sig: true };
    /// Application programs only.
    pub const APP: Modes = Modes { app: true, sig: false };
    /// Logic-signature programs only.
    pub const SIG: Modes = Modes { app: false, sig: true };

    /// Returns true if the opcode may appear in `mode`.
    #[inline]
    pub const fn allows(self, mode: RunMode) -> bool {
        match mode {
            RunMode::Application => self.app,
            RunMode::Signature => self.sig,
        }
    }

    /// Human-readable mode set, as shown in hover text.
    pub const fn describe(self) -> &'static str {
        match (self.app, self.sig) {
            (true, true) => "any mode",
            (true, false) => "application mode",
            (false, true) => "signature mode",
            (false, false) => "no mode",
        }
    }
}

/// Result type an opcode leaves on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackType {
    /// A 64-bit unsigned integer.
    Uint64,
    /// A byte slice.
    Bytes,
    /// Either, depending on the operands.
    Any,
}

impl StackType {
    /// Short name used in signature strings.
    pub const fn name(self) -> &'static str {
        match self {
            StackType::Uint64 => "uint64",
            StackType::Bytes => "bytes",
            StackType::Any => "any",
        }
    }
}

/// Shape of one immediate argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// A literal unsigned integer.
    Uint,
    /// A byte-string literal: `"…"`, `0x…`, or a base32/base64 spelling.
    Bytes,
    /// A label name.
    Label,
    /// A slot, stack-depth, or group index.
    Index,
    /// A member of a field enumeration (for example a `txn` field).
    Field,
    /// A named integer constant (transaction types, OnComplete values) or a
    /// literal integer.
    NamedConst,
}

impl ArgKind {
    /// Short name used in signature strings.
    pub const fn name(self) -> &'static str {
        match self {
            ArgKind::Uint => "uint",
            ArgKind::Bytes => "bytes",
            ArgKind::Label => "label",
            ArgKind::Index => "index",
            ArgKind::Field => "field",
            ArgKind::NamedConst => "const",
        }
    }
}

/// One member of an argument enumeration, with its documentation.
///
/// These drive completion at enumerated argument positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Member name as written in source.
    pub name: &'static str,
    /// One-line description.
    pub doc: &'static str,
}

impl Choice {
    /// Creates a choice.
    pub const fn new(name: &'static str, doc: &'static str) -> Self {
        Self { name, doc }
    }
}

/// Description of one immediate argument position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    /// Argument name as shown in signature help.
    pub name: &'static str,
    /// Argument shape.
    pub kind: ArgKind,
    /// One-line description.
    pub doc: &'static str,
    /// Enumeration members, for `Field` and `NamedConst` arguments.
    pub choices: Option<&'static [Choice]>,
}

impl ArgSpec {
    /// Creates a plain argument.
    pub const fn new(name: &'static str, kind: ArgKind, doc: &'static str) -> Self {
        Self {
            name,
            kind,
            doc,
            choices: None,
        }
    }

    /// Creates an enumerated argument.
    pub const fn with_choices(
        name: &'static str,
        kind: ArgKind,
        doc: &'static str,
        choices: &'static [Choice],
    ) -> Self {
        Self {
            name,
            kind,
            doc,
            choices: Some(choices),
        }
    }

    /// Looks up an enumeration member by its source spelling.
    pub fn choice(&self, name: &str) -> Option<&'static Choice> {
        self.choices?.iter().find(|c| c.name == name)
    }
}

/// Catalog entry for one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpSpec {
    /// Opcode name as written in source.
    pub name: &'static str,
    /// First program version the opcode exists in.
    pub min_version: u64,
    /// Run modes the opcode is legal in.
    pub modes: Modes,
    /// Immediate arguments, in order.
    pub args: &'static [ArgSpec],
    /// If true, the final argument may repeat any number of times.
    pub variadic: bool,
    /// Stack results, for signature text.
    pub returns: &'static [StackType],
    /// One-line description.
    pub doc: &'static str,
    /// Extended markdown description.
    pub full_doc: &'static str,
}

impl OpSpec {
    /// Human-readable immediate-argument list, e.g. `f:field i:index`.
    pub fn args_sig(&self) -> String {
        let mut out = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(arg.name);
            out.push(':');
            out.push_str(arg.kind.name());
        }
        if self.variadic {
            out.push_str(" ...");
        }
        out
    }

    /// Full signature: name, immediates, and stack results.
    pub fn full_sig(&self) -> String {
        let mut out = String::from(self.name);
        let args = self.args_sig();
        if !args.is_empty() {
            out.push(' ');
            out.push_str(&args);
        }
        if !self.returns.is_empty() {
            out.push_str(" \u{2192} ");
            for (i, ret) in self.returns.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(ret.name());
            }
        }
        out
    }

    /// Returns true if the opcode exists at or below `version`.
    #[inline]
    pub const fn available_at(&self, version: u64) -> bool {
        self.min_version <= version
    }
}

/// Every catalog entry, in the fixed registration order of the data table.
pub fn all_ops() -> &'static [OpSpec] {
    ops::OPS
}

/// The opcodes usable at `version` in `mode`, in table order.
///
/// This is what opcode-name completion lists.
pub fn ops_available(version: u64, mode: RunMode) -> impl Iterator<Item = &'static OpSpec> {
    ops::OPS
        .iter()
        .filter(move |op| op.available_at(version) && op.modes.allows(mode))
}

static INDEX: Lazy<FxHashMap<&'static str, &'static OpSpec>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for op in ops::OPS {
        let prev = map.insert(op.name, op);
        debug_assert!(prev.is_none(), "duplicate catalog entry: {}", op.name);
    }
    map
});

/// Looks up an opcode by name, regardless of version.
///
/// This is what the parser uses: an op from a later version is still parsed
/// by its catalog shape, and version compatibility is reported separately.
pub fn lookup_any(name: &str) -> Option<&'static OpSpec> {
    INDEX.get(name).copied()
}

/// Looks up an opcode by name, requiring availability at `version`.
pub fn lookup(name: &str, version: u64) -> Option<&'static OpSpec> {
    lookup_any(name).filter(|op| op.available_at(version))
}

/// Enumeration members for the argument at `arg_index` of `name`, if that
/// position is enumerated and the opcode is available at `version`.
pub fn arg_choices(name: &str, arg_index: usize, version: u64) -> Option<&'static [Choice]> {
    let op = lookup(name, version)?;
    if op.args.is_empty() {
        return None;
    }
    // Variadic tails repeat the final declared argument.
    let arg = if arg_index < op.args.len() {
        &op.args[arg_index]
    } else if op.variadic {
        &op.args[op.args.len() - 1]
    } else {
        return None;
    };
    arg.choices
}
