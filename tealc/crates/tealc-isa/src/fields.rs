//! Field enumerations and named constants.
//!
//! These tables back every enumerated immediate in the catalog: transaction
//! fields, global fields, asset/application/account parameters, and the
//! named integer constants. Completion surfaces them verbatim; the parser
//! checks membership against them.

use crate::Choice;

/// Transaction fields, as read by `txn` and the group/array variants.
pub const TXN_FIELDS: &[Choice] = &[
    Choice::new("Sender", "32 byte address of the sender"),
    Choice::new("Fee", "microalgos paid as fee"),
    Choice::new("FirstValid", "round number of first valid round"),
    Choice::new("FirstValidTime", "UNIX timestamp of the block before FirstValid"),
    Choice::new("LastValid", "round number of last valid round"),
    Choice::new("Note", "note field, up to 1024 bytes"),
    Choice::new("Lease", "32 byte lease to enforce mutual exclusion"),
    Choice::new("Receiver", "32 byte address of the payment receiver"),
    Choice::new("Amount", "microalgos being paid"),
    Choice::new("CloseRemainderTo", "32 byte address to close the account to"),
    Choice::new("VotePK", "32 byte participation key address"),
    Choice::new("SelectionPK", "32 byte VRF selection key address"),
    Choice::new("VoteFirst", "first round the participation key is valid"),
    Choice::new("VoteLast", "last round the participation key is valid"),
    Choice::new("VoteKeyDilution", "key dilution for the participation key"),
    Choice::new("Type", "transaction type as bytes"),
    Choice::new("TypeEnum", "transaction type as an integer"),
    Choice::new("XferAsset", "asset id being transferred"),
    Choice::new("AssetAmount", "amount of asset units being transferred"),
    Choice::new("AssetSender", "32 byte address of the asset clawback source"),
    Choice::new("AssetReceiver", "32 byte address of the asset receiver"),
    Choice::new("AssetCloseTo", "32 byte address to close the asset position to"),
    Choice::new("GroupIndex", "position of this transaction within its group"),
    Choice::new("TxID", "32 byte computed id of this transaction"),
    Choice::new("ApplicationID", "application id from an application call"),
    Choice::new("OnCompletion", "application call on-completion action"),
    Choice::new("ApplicationArgs", "application call arguments, by index"),
    Choice::new("NumAppArgs", "number of application call arguments"),
    Choice::new("Accounts", "application call account references, by index"),
    Choice::new("NumAccounts", "number of account references"),
    Choice::new("ApprovalProgram", "approval program bytes"),
    Choice::new("ClearStateProgram", "clear state program bytes"),
    Choice::new("RekeyTo", "32 byte address the sender rekeys to"),
    Choice::new("ConfigAsset", "asset id in an asset config transaction"),
    Choice::new("ConfigAssetTotal", "total units of the configured asset"),
    Choice::new("ConfigAssetDecimals", "decimal places of the configured asset"),
    Choice::new("ConfigAssetDefaultFrozen", "whether holdings start frozen"),
    Choice::new("ConfigAssetUnitName", "unit name of the configured asset"),
    Choice::new("ConfigAssetName", "name of the configured asset"),
    Choice::new("ConfigAssetURL", "URL of the configured asset"),
    Choice::new("ConfigAssetMetadataHash", "32 byte metadata hash"),
    Choice::new("ConfigAssetManager", "32 byte manager address"),
    Choice::new("ConfigAssetReserve", "32 byte reserve address"),
    Choice::new("ConfigAssetFreeze", "32 byte freeze address"),
    Choice::new("ConfigAssetClawback", "32 byte clawback address"),
    Choice::new("FreezeAsset", "asset id in an asset freeze transaction"),
    Choice::new("FreezeAssetAccount", "32 byte address whose holding freezes"),
    Choice::new("FreezeAssetFrozen", "new frozen value"),
    Choice::new("Assets", "foreign asset references, by index"),
    Choice::new("NumAssets", "number of foreign asset references"),
    Choice::new("Applications", "foreign application references, by index"),
    Choice::new("NumApplications", "number of foreign application references"),
    Choice::new("GlobalNumUint", "number of global integer state values"),
    Choice::new("GlobalNumByteSlice", "number of global byte state values"),
    Choice::new("LocalNumUint", "number of local integer state values"),
    Choice::new("LocalNumByteSlice", "number of local byte state values"),
    Choice::new("ExtraProgramPages", "number of extra program pages"),
    Choice::new("Nonparticipation", "marks the sender nonparticipating"),
    Choice::new("Logs", "log messages emitted so far, by index"),
    Choice::new("NumLogs", "number of log messages"),
    Choice::new("CreatedAssetID", "asset id created by this transaction"),
    Choice::new("CreatedApplicationID", "application id created by this transaction"),
    Choice::new("LastLog", "most recent log message"),
    Choice::new("StateProofPK", "64 byte state proof public key"),
    Choice::new("ApprovalProgramPages", "approval program pages, by index"),
    Choice::new("NumApprovalProgramPages", "number of approval program pages"),
    Choice::new("ClearStateProgramPages", "clear state program pages, by index"),
    Choice::new("NumClearStateProgramPages", "number of clear state program pages"),
];

/// Global fields, as read by `global`.
pub const GLOBAL_FIELDS: &[Choice] = &[
    Choice::new("MinTxnFee", "minimum transaction fee in microalgos"),
    Choice::new("MinBalance", "minimum account balance in microalgos"),
    Choice::new("MaxTxnLife", "maximum transaction validity window in rounds"),
    Choice::new("ZeroAddress", "the 32 byte all-zero address"),
    Choice::new("GroupSize", "number of transactions in this group"),
    Choice::new("LogicSigVersion", "maximum supported program version"),
    Choice::new("Round", "current round number"),
    Choice::new("LatestTimestamp", "timestamp of the previous block"),
    Choice::new("CurrentApplicationID", "id of the executing application"),
    Choice::new("CreatorAddress", "address of the executing application's creator"),
    Choice::new("CurrentApplicationAddress", "address of the executing application"),
    Choice::new("GroupID", "32 byte id of this transaction group"),
    Choice::new("OpcodeBudget", "remaining opcode execution budget"),
    Choice::new("CallerApplicationID", "id of the calling application, or zero"),
    Choice::new("CallerApplicationAddress", "address of the calling application"),
];

/// Holding fields read by `asset_holding_get`.
pub const ASSET_HOLDING_FIELDS: &[Choice] = &[
    Choice::new("AssetBalance", "amount of the asset held by the account"),
    Choice::new("AssetFrozen", "whether the holding is frozen"),
];

/// Parameter fields read by `asset_params_get`.
pub const ASSET_PARAMS_FIELDS: &[Choice] = &[
    Choice::new("AssetTotal", "total number of asset units"),
    Choice::new("AssetDecimals", "number of decimal places"),
    Choice::new("AssetDefaultFrozen", "whether holdings start frozen"),
    Choice::new("AssetUnitName", "asset unit name"),
    Choice::new("AssetName", "asset name"),
    Choice::new("AssetURL", "asset URL"),
    Choice::new("AssetMetadataHash", "32 byte metadata hash"),
    Choice::new("AssetManager", "manager address"),
    Choice::new("AssetReserve", "reserve address"),
    Choice::new("AssetFreeze", "freeze address"),
    Choice::new("AssetClawback", "clawback address"),
    Choice::new("AssetCreator", "creator address"),
];

/// Parameter fields read by `app_params_get`.
pub const APP_PARAMS_FIELDS: &[Choice] = &[
    Choice::new("AppApprovalProgram", "approval program bytes"),
    Choice::new("AppClearStateProgram", "clear state program bytes"),
    Choice::new("AppGlobalNumUint", "number of global integer state values"),
    Choice::new("AppGlobalNumByteSlice", "number of global byte state values"),
    Choice::new("AppLocalNumUint", "number of local integer state values"),
    Choice::new("AppLocalNumByteSlice", "number of local byte state values"),
    Choice::new("AppExtraProgramPages", "number of extra program pages"),
    Choice::new("AppCreator", "creator address"),
    Choice::new("AppAddress", "application account address"),
];

/// Parameter fields read by `acct_params_get`.
pub const ACCT_PARAMS_FIELDS: &[Choice] = &[
    Choice::new("AcctBalance", "account balance in microalgos"),
    Choice::new("AcctMinBalance", "minimum required balance in microalgos"),
    Choice::new("AcctAuthAddr", "authorizing address, or zero if not rekeyed"),
    Choice::new("AcctTotalNumUint", "total integer state values allocated"),
    Choice::new("AcctTotalNumByteSlice", "total byte state values allocated"),
    Choice::new("AcctTotalExtraAppPages", "total extra application pages"),
    Choice::new("AcctTotalAppsCreated", "number of applications created"),
    Choice::new("AcctTotalAppsOptedIn", "number of applications opted into"),
    Choice::new("AcctTotalAssetsCreated", "number of assets created"),
    Choice::new("AcctTotalAssets", "number of asset holdings"),
    Choice::new("AcctTotalBoxes", "number of boxes owned"),
    Choice::new("AcctTotalBoxBytes", "total bytes across owned boxes"),
];

/// Named integer constants accepted wherever a literal integer is: the
/// transaction types and the OnCompletion actions.
pub const NAMED_INTEGERS: &[Choice] = &[
    Choice::new("pay", "payment transaction type"),
    Choice::new("keyreg", "key registration transaction type"),
    Choice::new("acfg", "asset configuration transaction type"),
    Choice::new("axfer", "asset transfer transaction type"),
    Choice::new("afrz", "asset freeze transaction type"),
    Choice::new("appl", "application call transaction type"),
    Choice::new("unknown", "unknown transaction type"),
    Choice::new("NoOp", "plain application call"),
    Choice::new("OptIn", "opt the sender into the application"),
    Choice::new("CloseOut", "close the sender out of the application"),
    Choice::new("ClearState", "clear the sender's application state"),
    Choice::new("UpdateApplication", "replace the application's programs"),
    Choice::new("DeleteApplication", "delete the application"),
];

/// Curves accepted by the `ecdsa_*` opcodes.
pub const ECDSA_CURVES: &[Choice] = &[
    Choice::new("Secp256k1", "secp256k1 curve, as used by Bitcoin and Ethereum"),
    Choice::new("Secp256r1", "secp256r1 (NIST P-256) curve"),
];

/// Standards accepted by `vrf_verify`.
pub const VRF_STANDARDS: &[Choice] = &[
    Choice::new("VrfAlgorand", "the Algorand VRF construction"),
];

/// Block header fields read by `block`.
pub const BLOCK_FIELDS: &[Choice] = &[
    Choice::new("BlkSeed", "block seed"),
    Choice::new("BlkTimestamp", "block timestamp"),
];

/// Alphabets accepted by `base64_decode`.
pub const BASE64_ENCODINGS: &[Choice] = &[
    Choice::new("URLEncoding", "base64 URL and filename safe alphabet"),
    Choice::new("StdEncoding", "standard base64 alphabet"),
];

/// Result shapes accepted by `json_ref`.
pub const JSON_REF_TYPES: &[Choice] = &[
    Choice::new("JSONString", "string value"),
    Choice::new("JSONUint64", "unsigned integer value"),
    Choice::new("JSONObject", "object value, re-encoded as bytes"),
];
