//! The opcode data table.
//!
//! One entry per opcode, grouped by the program version that introduced it.
//! Pseudo-opcodes the assembler expands (`int`, `byte`, `addr`, `method`)
//! are listed alongside the real ones: the pipeline sees source text, and in
//! source text they behave exactly like opcodes with immediates.

use crate::fields::*;
use crate::{ArgKind, ArgSpec, Modes, OpSpec, StackType};

// Shorthand for stack results.
const U: &[StackType] = &[StackType::Uint64];
const B: &[StackType] = &[StackType::Bytes];
const A: &[StackType] = &[StackType::Any];
const UU: &[StackType] = &[StackType::Uint64, StackType::Uint64];
const AU: &[StackType] = &[StackType::Any, StackType::Uint64];
const BU: &[StackType] = &[StackType::Bytes, StackType::Uint64];
const BB: &[StackType] = &[StackType::Bytes, StackType::Bytes];
const UUUU: &[StackType] = &[
    StackType::Uint64,
    StackType::Uint64,
    StackType::Uint64,
    StackType::Uint64,
];
const NONE: &[StackType] = &[];

const NO_ARGS: &[ArgSpec] = &[];

// Shared immediate shapes.
const TARGET: &[ArgSpec] = &[ArgSpec::new("target", ArgKind::Label, "branch target label")];
const CONST_SLOT: &[ArgSpec] = &[ArgSpec::new("i", ArgKind::Index, "constant block index")];
const SCRATCH_SLOT: &[ArgSpec] = &[ArgSpec::new("i", ArgKind::Index, "scratch slot")];
const ARG_INDEX: &[ArgSpec] = &[ArgSpec::new("n", ArgKind::Index, "argument index")];
const STACK_DEPTH: &[ArgSpec] = &[ArgSpec::new("n", ArgKind::Index, "stack depth")];
const VALUE_COUNT: &[ArgSpec] = &[ArgSpec::new("n", ArgKind::Index, "number of values")];
const FRAME_SLOT: &[ArgSpec] = &[ArgSpec::new("i", ArgKind::Index, "frame slot, relative to the frame pointer")];

const F_TXN: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "transaction field",
    TXN_FIELDS,
)];
const F_TXN_I: &[ArgSpec] = &[
    ArgSpec::with_choices("f", ArgKind::Field, "transaction array field", TXN_FIELDS),
    ArgSpec::new("i", ArgKind::Index, "array index"),
];
const T_F_TXN: &[ArgSpec] = &[
    ArgSpec::new("t", ArgKind::Index, "transaction group index"),
    ArgSpec::with_choices("f", ArgKind::Field, "transaction field", TXN_FIELDS),
];
const T_F_TXN_I: &[ArgSpec] = &[
    ArgSpec::new("t", ArgKind::Index, "transaction group index"),
    ArgSpec::with_choices("f", ArgKind::Field, "transaction array field", TXN_FIELDS),
    ArgSpec::new("i", ArgKind::Index, "array index"),
];
const F_GLOBAL: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "global field",
    GLOBAL_FIELDS,
)];
const F_ASSET_HOLDING: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "asset holding field",
    ASSET_HOLDING_FIELDS,
)];
const F_ASSET_PARAMS: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "asset parameter field",
    ASSET_PARAMS_FIELDS,
)];
const F_APP_PARAMS: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "application parameter field",
    APP_PARAMS_FIELDS,
)];
const F_ACCT_PARAMS: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "account parameter field",
    ACCT_PARAMS_FIELDS,
)];
const F_CURVE: &[ArgSpec] = &[ArgSpec::with_choices(
    "v",
    ArgKind::Field,
    "elliptic curve",
    ECDSA_CURVES,
)];
const F_VRF: &[ArgSpec] = &[ArgSpec::with_choices(
    "s",
    ArgKind::Field,
    "VRF standard",
    VRF_STANDARDS,
)];
const F_BLOCK: &[ArgSpec] = &[ArgSpec::with_choices(
    "f",
    ArgKind::Field,
    "block field",
    BLOCK_FIELDS,
)];
const F_BASE64: &[ArgSpec] = &[ArgSpec::with_choices(
    "e",
    ArgKind::Field,
    "base64 alphabet",
    BASE64_ENCODINGS,
)];
const F_JSON: &[ArgSpec] = &[ArgSpec::with_choices(
    "r",
    ArgKind::Field,
    "result shape",
    JSON_REF_TYPES,
)];

const UINT_VALUE: &[ArgSpec] = &[ArgSpec::new("n", ArgKind::Uint, "integer value")];
const BYTES_VALUE: &[ArgSpec] = &[ArgSpec::new("b", ArgKind::Bytes, "byte-string value")];
const NAMED_UINT: &[ArgSpec] = &[ArgSpec::with_choices(
    "n",
    ArgKind::NamedConst,
    "integer value or named constant",
    NAMED_INTEGERS,
)];
const ADDRESS_VALUE: &[ArgSpec] = &[ArgSpec::new("a", ArgKind::Bytes, "account address")];
const METHOD_SIG: &[ArgSpec] = &[ArgSpec::new("s", ArgKind::Bytes, "method signature string")];
const START_END: &[ArgSpec] = &[
    ArgSpec::new("s", ArgKind::Uint, "start position"),
    ArgSpec::new("e", ArgKind::Uint, "end position"),
];
const START_LENGTH: &[ArgSpec] = &[
    ArgSpec::new("s", ArgKind::Uint, "start position"),
    ArgSpec::new("l", ArgKind::Uint, "length"),
];
const START_ONLY: &[ArgSpec] = &[ArgSpec::new("s", ArgKind::Uint, "start position")];
const GROUP_SLOT: &[ArgSpec] = &[
    ArgSpec::new("t", ArgKind::Index, "transaction group index"),
    ArgSpec::new("i", ArgKind::Index, "scratch slot"),
];
const GROUP_ONLY: &[ArgSpec] = &[ArgSpec::new("t", ArgKind::Index, "transaction group index")];
const PROTO_SHAPE: &[ArgSpec] = &[
    ArgSpec::new("a", ArgKind::Uint, "number of arguments"),
    ArgSpec::new("r", ArgKind::Uint, "number of return values"),
];

/// Plain entry: the extended documentation is the one-liner.
const fn op(
    name: &'static str,
    min_version: u64,
    modes: Modes,
    args: &'static [ArgSpec],
    returns: &'static [StackType],
    doc: &'static str,
) -> OpSpec {
    OpSpec {
        name,
        min_version,
        modes,
        args,
        variadic: false,
        returns,
        doc,
        full_doc: doc,
    }
}

/// Entry with a separate extended description.
const fn op_full(
    name: &'static str,
    min_version: u64,
    modes: Modes,
    args: &'static [ArgSpec],
    returns: &'static [StackType],
    doc: &'static str,
    full_doc: &'static str,
) -> OpSpec {
    OpSpec {
        name,
        min_version,
        modes,
        args,
        variadic: false,
        returns,
        doc,
        full_doc,
    }
}

/// Entry whose final immediate repeats.
const fn op_var(
    name: &'static str,
    min_version: u64,
    modes: Modes,
    args: &'static [ArgSpec],
    returns: &'static [StackType],
    doc: &'static str,
) -> OpSpec {
    OpSpec {
        name,
        min_version,
        modes,
        args,
        variadic: true,
        returns,
        doc,
        full_doc: doc,
    }
}

pub(crate) static OPS: &[OpSpec] = &[
    // =========================================================================
    // VERSION 1
    // =========================================================================
    op_full(
        "err", 1, Modes::ANY, NO_ARGS, NONE,
        "Fail immediately.",
        "Fail immediately. Execution stops and the program rejects. \
         Control never falls through an `err`.",
    ),
    op("sha256", 1, Modes::ANY, NO_ARGS, B, "SHA256 hash of value A, yields [32]byte."),
    op("keccak256", 1, Modes::ANY, NO_ARGS, B, "Keccak256 hash of value A, yields [32]byte."),
    op("sha512_256", 1, Modes::ANY, NO_ARGS, B, "SHA512_256 hash of value A, yields [32]byte."),
    op(
        "ed25519verify", 1, Modes::ANY, NO_ARGS, U,
        "For (data A, signature B, pubkey C), verify the signature against \
         (\"ProgData\" || program_hash || data).",
    ),
    op("+", 1, Modes::ANY, NO_ARGS, U, "A plus B. Fail on overflow."),
    op("-", 1, Modes::ANY, NO_ARGS, U, "A minus B. Fail if B > A."),
    op("/", 1, Modes::ANY, NO_ARGS, U, "A divided by B (truncated). Fail if B == 0."),
    op("*", 1, Modes::ANY, NO_ARGS, U, "A times B. Fail on overflow."),
    op("<", 1, Modes::ANY, NO_ARGS, U, "A less than B => {0 or 1}."),
    op(">", 1, Modes::ANY, NO_ARGS, U, "A greater than B => {0 or 1}."),
    op("<=", 1, Modes::ANY, NO_ARGS, U, "A less than or equal to B => {0 or 1}."),
    op(">=", 1, Modes::ANY, NO_ARGS, U, "A greater than or equal to B => {0 or 1}."),
    op("&&", 1, Modes::ANY, NO_ARGS, U, "A is not zero and B is not zero => {0 or 1}."),
    op("||", 1, Modes::ANY, NO_ARGS, U, "A is not zero or B is not zero => {0 or 1}."),
    op("==", 1, Modes::ANY, NO_ARGS, U, "A is equal to B => {0 or 1}."),
    op("!=", 1, Modes::ANY, NO_ARGS, U, "A is not equal to B => {0 or 1}."),
    op("!", 1, Modes::ANY, NO_ARGS, U, "A == 0 yields 1, else 0."),
    op("len", 1, Modes::ANY, NO_ARGS, U, "Yields the length of byte value A."),
    op("itob", 1, Modes::ANY, NO_ARGS, B, "Converts uint64 A to big-endian bytes."),
    op("btoi", 1, Modes::ANY, NO_ARGS, U, "Converts big-endian bytes A (up to 8 bytes) to uint64."),
    op("%", 1, Modes::ANY, NO_ARGS, U, "A modulo B. Fail if B == 0."),
    op("|", 1, Modes::ANY, NO_ARGS, U, "A bitwise-or B."),
    op("&", 1, Modes::ANY, NO_ARGS, U, "A bitwise-and B."),
    op("^", 1, Modes::ANY, NO_ARGS, U, "A bitwise-xor B."),
    op("~", 1, Modes::ANY, NO_ARGS, U, "Bitwise invert value A."),
    op("mulw", 1, Modes::ANY, NO_ARGS, UU, "A times B as a 128-bit result in two uint64s."),
    op_var(
        "intcblock", 1, Modes::ANY, UINT_VALUE, NONE,
        "Prepare a block of uint64 constants for use by intc.",
    ),
    op("intc", 1, Modes::ANY, CONST_SLOT, U, "Push the Ith constant from the intcblock."),
    op("intc_0", 1, Modes::ANY, NO_ARGS, U, "Push constant 0 from the intcblock."),
    op("intc_1", 1, Modes::ANY, NO_ARGS, U, "Push constant 1 from the intcblock."),
    op("intc_2", 1, Modes::ANY, NO_ARGS, U, "Push constant 2 from the intcblock."),
    op("intc_3", 1, Modes::ANY, NO_ARGS, U, "Push constant 3 from the intcblock."),
    op_var(
        "bytecblock", 1, Modes::ANY, BYTES_VALUE, NONE,
        "Prepare a block of byte-string constants for use by bytec.",
    ),
    op("bytec", 1, Modes::ANY, CONST_SLOT, B, "Push the Ith constant from the bytecblock."),
    op("bytec_0", 1, Modes::ANY, NO_ARGS, B, "Push constant 0 from the bytecblock."),
    op("bytec_1", 1, Modes::ANY, NO_ARGS, B, "Push constant 1 from the bytecblock."),
    op("bytec_2", 1, Modes::ANY, NO_ARGS, B, "Push constant 2 from the bytecblock."),
    op("bytec_3", 1, Modes::ANY, NO_ARGS, B, "Push constant 3 from the bytecblock."),
    op("arg", 1, Modes::SIG, ARG_INDEX, B, "Push the Nth LogicSig argument."),
    op("arg_0", 1, Modes::SIG, NO_ARGS, B, "Push LogicSig argument 0."),
    op("arg_1", 1, Modes::SIG, NO_ARGS, B, "Push LogicSig argument 1."),
    op("arg_2", 1, Modes::SIG, NO_ARGS, B, "Push LogicSig argument 2."),
    op("arg_3", 1, Modes::SIG, NO_ARGS, B, "Push LogicSig argument 3."),
    op_full(
        "txn", 1, Modes::ANY, F_TXN, A,
        "Push a field of the current transaction.",
        "Push a field of the current transaction. Array fields (for example \
         `ApplicationArgs`) are read with `txna`/`txnas` instead.",
    ),
    op_full(
        "global", 1, Modes::ANY, F_GLOBAL, A,
        "Push a global field.",
        "Push a global field: ledger parameters, round state, and the \
         executing application's identity.",
    ),
    op("gtxn", 1, Modes::ANY, T_F_TXN, A, "Push a field of the Tth transaction in the group."),
    op("load", 1, Modes::ANY, SCRATCH_SLOT, A, "Push the value of scratch slot I."),
    op("store", 1, Modes::ANY, SCRATCH_SLOT, NONE, "Pop and write a value to scratch slot I."),
    op_full(
        "bnz", 1, Modes::ANY, TARGET, NONE,
        "Branch to TARGET if value A is not zero.",
        "Branch to TARGET if value A is not zero. The target label must be \
         declared somewhere in the program; before version 4 branches may \
         only jump forward.",
    ),
    op("pop", 1, Modes::ANY, NO_ARGS, NONE, "Discard value A."),
    op("dup", 1, Modes::ANY, NO_ARGS, NONE, "Duplicate value A."),
    // Pseudo-opcodes expanded by the assembler.
    op_full(
        "int", 1, Modes::ANY, NAMED_UINT, U,
        "Push an integer constant.",
        "Push an integer constant. Accepts decimal, hex (`0x`), octal \
         (`0o`), and binary (`0b`) literals, and the named transaction-type \
         and OnCompletion constants (for example `pay`, `NoOp`).",
    ),
    op_full(
        "byte", 1, Modes::ANY, BYTES_VALUE, B,
        "Push a byte-string constant.",
        "Push a byte-string constant. Accepts `\"…\"` strings, `0x…` hex, \
         and `base64`/`b64`/`base32`/`b32` encodings in both the one-token \
         `base64(…)` and two-token `base64 …` spellings.",
    ),
    op("addr", 1, Modes::ANY, ADDRESS_VALUE, B, "Push an address constant as its 32 public key bytes."),
    op("method", 2, Modes::ANY, METHOD_SIG, B, "Push the 4-byte method selector of a method signature."),
    // =========================================================================
    // VERSION 2
    // =========================================================================
    op("addw", 2, Modes::ANY, NO_ARGS, UU, "A plus B as a 65-bit result in two uint64s."),
    op("txna", 2, Modes::ANY, F_TXN_I, A, "Push the Ith value of an array transaction field."),
    op("gtxna", 2, Modes::ANY, T_F_TXN_I, A, "Push the Ith value of an array field of group transaction T."),
    op_full(
        "bz", 2, Modes::ANY, TARGET, NONE,
        "Branch to TARGET if value A is zero.",
        "Branch to TARGET if value A is zero. See `bnz` for the rules on \
         branch targets.",
    ),
    op_full(
        "b", 2, Modes::ANY, TARGET, NONE,
        "Branch unconditionally to TARGET.",
        "Branch unconditionally to TARGET. Control never falls through, so \
         any code between a `b` and the next referenced label is dead.",
    ),
    op_full(
        "return", 2, Modes::ANY, NO_ARGS, NONE,
        "Stop execution, using value A as the success value.",
        "Stop execution immediately, using the top of stack as the program's \
         success value. Code after a `return` is unreachable unless labeled.",
    ),
    op("dup2", 2, Modes::ANY, NO_ARGS, NONE, "Duplicate the top two values, A and B."),
    op("concat", 2, Modes::ANY, NO_ARGS, B, "Join byte values A and B. Fail if the result exceeds 4096 bytes."),
    op("substring", 2, Modes::ANY, START_END, B, "Extract bytes S up to but excluding E from value A."),
    op("substring3", 2, Modes::ANY, NO_ARGS, B, "Extract bytes B up to but excluding C from value A."),
    op("balance", 2, Modes::APP, NO_ARGS, U, "Balance in microalgos of account A, after this group's fees."),
    op("app_opted_in", 2, Modes::APP, NO_ARGS, U, "1 if account A is opted into application B, else 0."),
    op("app_local_get", 2, Modes::APP, NO_ARGS, A, "Local state value of key B for account A, or 0."),
    op("app_local_get_ex", 2, Modes::APP, NO_ARGS, AU, "Local state value and existence flag of key C for account A in application B."),
    op_full(
        "app_global_get", 2, Modes::APP, NO_ARGS, A,
        "Global state value of key A, or 0.",
        "Global state value of key A in the current application, or 0 if the \
         key does not exist.",
    ),
    op("app_global_get_ex", 2, Modes::APP, NO_ARGS, AU, "Global state value and existence flag of key B in application A."),
    op("app_local_put", 2, Modes::APP, NO_ARGS, NONE, "Write value C under key B in account A's local state."),
    op("app_global_put", 2, Modes::APP, NO_ARGS, NONE, "Write value B under key A in global state."),
    op("app_local_del", 2, Modes::APP, NO_ARGS, NONE, "Delete key B from account A's local state."),
    op("app_global_del", 2, Modes::APP, NO_ARGS, NONE, "Delete key A from global state."),
    op("asset_holding_get", 2, Modes::APP, F_ASSET_HOLDING, AU, "Field F of account A's holding of asset B, with existence flag."),
    op("asset_params_get", 2, Modes::APP, F_ASSET_PARAMS, AU, "Field F of asset A's parameters, with existence flag."),
    // =========================================================================
    // VERSION 3
    // =========================================================================
    op("assert", 3, Modes::ANY, NO_ARGS, NONE, "Fail immediately if value A is zero."),
    op("dig", 3, Modes::ANY, STACK_DEPTH, A, "Push the Nth value from the top of the stack."),
    op("swap", 3, Modes::ANY, NO_ARGS, NONE, "Swap the top two values, A and B."),
    op("select", 3, Modes::ANY, NO_ARGS, A, "Push B if C is not zero, else A."),
    op("min_balance", 3, Modes::APP, NO_ARGS, U, "Minimum required balance of account A in microalgos."),
    op("pushbytes", 3, Modes::ANY, BYTES_VALUE, B, "Push an immediate byte-string, bypassing the constant block."),
    op("pushint", 3, Modes::ANY, UINT_VALUE, U, "Push an immediate uint64, bypassing the constant block."),
    op("gtxns", 3, Modes::ANY, F_TXN, A, "Push field F of the group transaction whose index is value A."),
    op("gtxnsa", 3, Modes::ANY, F_TXN_I, A, "Push the Ith value of array field F of the group transaction indexed by A."),
    op("getbit", 3, Modes::ANY, NO_ARGS, U, "Bit B of value A, counting from the low end for integers."),
    op("setbit", 3, Modes::ANY, NO_ARGS, A, "Value A with bit B set to C."),
    op("getbyte", 3, Modes::ANY, NO_ARGS, U, "Byte B of byte value A as an integer."),
    op("setbyte", 3, Modes::ANY, NO_ARGS, B, "Byte value A with byte B replaced by C."),
    // =========================================================================
    // VERSION 4
    // =========================================================================
    op("divmodw", 4, Modes::ANY, NO_ARGS, UUUU, "128-bit division of (A,B) by (C,D): quotient and remainder pairs."),
    op("gload", 4, Modes::APP, GROUP_SLOT, A, "Push scratch slot I of the Tth transaction in the group."),
    op("gloads", 4, Modes::APP, SCRATCH_SLOT, A, "Push scratch slot I of the group transaction whose index is value A."),
    op("gaid", 4, Modes::APP, GROUP_ONLY, U, "ID of the asset or application created by the Tth group transaction."),
    op("gaids", 4, Modes::APP, NO_ARGS, U, "ID created by the group transaction whose index is value A."),
    op_full(
        "callsub", 4, Modes::ANY, TARGET, NONE,
        "Call the subroutine at TARGET.",
        "Push the return address onto the call stack and branch to TARGET. \
         `retsub` returns to the instruction after the call.",
    ),
    op_full(
        "retsub", 4, Modes::ANY, NO_ARGS, NONE,
        "Return from the current subroutine.",
        "Pop the call stack and resume after the matching `callsub`. Control \
         never falls through a `retsub`.",
    ),
    op("shl", 4, Modes::ANY, NO_ARGS, U, "A shifted left by B bits, modulo 2^64."),
    op("shr", 4, Modes::ANY, NO_ARGS, U, "A shifted right by B bits."),
    op("sqrt", 4, Modes::ANY, NO_ARGS, U, "Integer square root of value A."),
    op("bitlen", 4, Modes::ANY, NO_ARGS, U, "Number of bits needed to represent value A."),
    op("exp", 4, Modes::ANY, NO_ARGS, U, "A raised to the Bth power. Fail on overflow or 0^0."),
    op("expw", 4, Modes::ANY, NO_ARGS, UU, "A raised to the Bth power as a 128-bit result."),
    op("b+", 4, Modes::ANY, NO_ARGS, B, "A plus B, where both are big-endian unsigned byte values."),
    op("b-", 4, Modes::ANY, NO_ARGS, B, "A minus B as byte values. Fail on underflow."),
    op("b/", 4, Modes::ANY, NO_ARGS, B, "A divided by B as byte values. Fail if B is zero."),
    op("b*", 4, Modes::ANY, NO_ARGS, B, "A times B as byte values."),
    op("b<", 4, Modes::ANY, NO_ARGS, U, "A less than B as byte values => {0 or 1}."),
    op("b>", 4, Modes::ANY, NO_ARGS, U, "A greater than B as byte values => {0 or 1}."),
    op("b<=", 4, Modes::ANY, NO_ARGS, U, "A less than or equal to B as byte values => {0 or 1}."),
    op("b>=", 4, Modes::ANY, NO_ARGS, U, "A greater than or equal to B as byte values => {0 or 1}."),
    op("b==", 4, Modes::ANY, NO_ARGS, U, "A equal to B as byte values => {0 or 1}."),
    op("b!=", 4, Modes::ANY, NO_ARGS, U, "A not equal to B as byte values => {0 or 1}."),
    op("b%", 4, Modes::ANY, NO_ARGS, B, "A modulo B as byte values. Fail if B is zero."),
    op("b|", 4, Modes::ANY, NO_ARGS, B, "A bitwise-or B as byte values, zero-extended to the longer input."),
    op("b&", 4, Modes::ANY, NO_ARGS, B, "A bitwise-and B as byte values, zero-extended to the longer input."),
    op("b^", 4, Modes::ANY, NO_ARGS, B, "A bitwise-xor B as byte values, zero-extended to the longer input."),
    op("b~", 4, Modes::ANY, NO_ARGS, B, "Bitwise invert byte value A."),
    op("bzero", 4, Modes::ANY, NO_ARGS, B, "A zero-filled byte value of length A."),
    // =========================================================================
    // VERSION 5
    // =========================================================================
    op("ecdsa_verify", 5, Modes::ANY, F_CURVE, U, "Verify ECDSA signature (B,C) for hash A against pubkey (D,E) on curve V."),
    op("ecdsa_pk_decompress", 5, Modes::ANY, F_CURVE, BB, "Decompress ECDSA pubkey A on curve V into its two components."),
    op("ecdsa_pk_recover", 5, Modes::ANY, F_CURVE, BB, "Recover the ECDSA pubkey from hash A, recovery id B, and signature (C,D)."),
    op("loads", 5, Modes::ANY, NO_ARGS, A, "Push the scratch slot whose index is value A."),
    op("stores", 5, Modes::ANY, NO_ARGS, NONE, "Write value B to the scratch slot whose index is value A."),
    op("cover", 5, Modes::ANY, STACK_DEPTH, NONE, "Move the top value below the next N values."),
    op("uncover", 5, Modes::ANY, STACK_DEPTH, A, "Move the value N deep to the top of the stack."),
    op("extract", 5, Modes::ANY, START_LENGTH, B, "Extract L bytes of value A starting at S."),
    op("extract3", 5, Modes::ANY, NO_ARGS, B, "Extract C bytes of value A starting at B."),
    op("extract_uint16", 5, Modes::ANY, NO_ARGS, U, "Read a big-endian uint16 from value A at position B."),
    op("extract_uint32", 5, Modes::ANY, NO_ARGS, U, "Read a big-endian uint32 from value A at position B."),
    op("extract_uint64", 5, Modes::ANY, NO_ARGS, U, "Read a big-endian uint64 from value A at position B."),
    op("app_params_get", 5, Modes::APP, F_APP_PARAMS, AU, "Field F of application A's parameters, with existence flag."),
    op("log", 5, Modes::APP, NO_ARGS, NONE, "Write byte value A to the transaction log. At most 32 calls."),
    op_full(
        "itxn_begin", 5, Modes::APP, NO_ARGS, NONE,
        "Begin building an inner transaction.",
        "Begin building an inner transaction. Set its fields with \
         `itxn_field`, then send it with `itxn_submit`.",
    ),
    op("itxn_field", 5, Modes::APP, F_TXN, NONE, "Set field F of the inner transaction under construction to value A."),
    op("itxn_submit", 5, Modes::APP, NO_ARGS, NONE, "Execute the inner transaction(s) under construction."),
    op("itxn", 5, Modes::APP, F_TXN, A, "Push a field of the last executed inner transaction."),
    op("itxna", 5, Modes::APP, F_TXN_I, A, "Push the Ith value of an array field of the last inner transaction."),
    op("txnas", 5, Modes::ANY, F_TXN, A, "Push the value of array field F at the index given by value A."),
    op("gtxnas", 5, Modes::ANY, T_F_TXN, A, "Push the value of array field F of group transaction T at index A."),
    op("gtxnsas", 5, Modes::ANY, F_TXN, A, "Push array field F of the group transaction indexed by A, at index B."),
    op("args", 5, Modes::SIG, NO_ARGS, B, "Push the LogicSig argument whose index is value A."),
    // =========================================================================
    // VERSION 6
    // =========================================================================
    op("itxn_next", 6, Modes::APP, NO_ARGS, NONE, "Finish the current inner transaction and begin a new one in the same group."),
    op("gitxn", 6, Modes::APP, T_F_TXN, A, "Push a field of the Tth inner transaction in the last executed group."),
    op("gitxna", 6, Modes::APP, T_F_TXN_I, A, "Push the Ith value of an array field of inner group transaction T."),
    op("gloadss", 6, Modes::APP, NO_ARGS, A, "Push the scratch slot B of the group transaction indexed by A."),
    op("acct_params_get", 6, Modes::APP, F_ACCT_PARAMS, AU, "Field F of account A's parameters, with existence flag."),
    op("bsqrt", 6, Modes::ANY, NO_ARGS, B, "Integer square root of byte value A."),
    op("divw", 6, Modes::ANY, NO_ARGS, U, "(A,B) divided by C as a 128-bit dividend. Fail if the quotient overflows."),
    op("itxnas", 6, Modes::APP, F_TXN, A, "Push array field F of the last inner transaction at the index given by A."),
    op("gitxnas", 6, Modes::APP, T_F_TXN, A, "Push array field F of inner group transaction T at the index given by A."),
    // =========================================================================
    // VERSION 7
    // =========================================================================
    op("base64_decode", 7, Modes::ANY, F_BASE64, B, "Decode value A as base64 using alphabet E. Fail on invalid input."),
    op("json_ref", 7, Modes::ANY, F_JSON, A, "Look up key B in JSON object A, returning shape R."),
    op("ed25519verify_bare", 7, Modes::ANY, NO_ARGS, U, "Verify signature B of data A against pubkey C, with no domain prefix."),
    op("sha3_256", 7, Modes::ANY, NO_ARGS, B, "SHA3-256 hash of value A, yields [32]byte."),
    op("vrf_verify", 7, Modes::ANY, F_VRF, BU, "Verify VRF proof B of data A against pubkey C; yields the output and a flag."),
    op("block", 7, Modes::ANY, F_BLOCK, A, "Push field F of the block with round number A."),
    op("replace2", 7, Modes::ANY, START_ONLY, B, "Value A with bytes B written at position S."),
    op("replace3", 7, Modes::ANY, NO_ARGS, B, "Value A with bytes C written at position B."),
    // =========================================================================
    // VERSION 8
    // =========================================================================
    op_var(
        "switch", 8, Modes::ANY, TARGET, NONE,
        "Branch to the Ath label in the list; fall through if out of range.",
    ),
    op_var(
        "match", 8, Modes::ANY, TARGET, NONE,
        "Branch to the label whose position matches the first stack value equal to A; fall through if none match.",
    ),
    op("box_create", 8, Modes::APP, NO_ARGS, U, "Create a box named A of length B. 1 if created, 0 if it existed."),
    op("box_extract", 8, Modes::APP, NO_ARGS, B, "Read C bytes from box A starting at B."),
    op("box_replace", 8, Modes::APP, NO_ARGS, NONE, "Write bytes C into box A starting at B."),
    op("box_del", 8, Modes::APP, NO_ARGS, U, "Delete box A. 1 if it existed, 0 otherwise."),
    op("box_len", 8, Modes::APP, NO_ARGS, UU, "Length of box A, with existence flag."),
    op("box_get", 8, Modes::APP, NO_ARGS, BU, "Contents of box A, with existence flag. Fail if longer than 4096 bytes."),
    op("box_put", 8, Modes::APP, NO_ARGS, NONE, "Write bytes B as the full contents of box A."),
    op("popn", 8, Modes::ANY, VALUE_COUNT, NONE, "Discard the top N stack values."),
    op("dupn", 8, Modes::ANY, VALUE_COUNT, NONE, "Duplicate value A, N times."),
    op("bury", 8, Modes::ANY, STACK_DEPTH, NONE, "Replace the value N deep in the stack with value A."),
    op("frame_dig", 8, Modes::ANY, FRAME_SLOT, A, "Push the value at frame slot I."),
    op("frame_bury", 8, Modes::ANY, FRAME_SLOT, NONE, "Write value A to frame slot I."),
    op_full(
        "proto", 8, Modes::ANY, PROTO_SHAPE, NONE,
        "Declare the current subroutine to take A arguments and return R values.",
        "Declare the current subroutine to take A arguments and return R \
         values. Must be the first instruction of a subroutine called with \
         `callsub`; enables `frame_dig`/`frame_bury` addressing.",
    ),
    op_var(
        "pushbytess", 8, Modes::ANY, BYTES_VALUE, NONE,
        "Push each immediate byte-string, bypassing the constant block.",
    ),
    op_var(
        "pushints", 8, Modes::ANY, UINT_VALUE, NONE,
        "Push each immediate uint64, bypassing the constant block.",
    ),
];
