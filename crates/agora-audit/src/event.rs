//! Chain event and exported-log types.
//!
//! `LogEvent` is a single entry in the hash chain: it wraps an
//! `ActionRecord` with sequence numbering and the SHA-256 hashes that make
//! tampering detectable. `ActionLog` is the sealed snapshot produced by an
//! export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::ActionRecord;

/// A single entry in the SHA-256 hash chain.
///
/// Each event commits to the previous one via `prev_hash`, forming an
/// append-only chain. Modifying any field, including those of the embedded
/// record, invalidates `this_hash` and every subsequent `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// The immutable action record.
    pub record: ActionRecord,

    /// SHA-256 hash (hex) of the previous event, or `GENESIS_HASH` for the
    /// first event.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this event's canonical content.
    pub this_hash: String,
}

impl LogEvent {
    /// The sentinel `prev_hash` used for the first event in every chain.
    ///
    /// 64 hex zeros, a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed snapshot of the action log.
///
/// The `terminal_hash` is the `this_hash` of the last event and serves as
/// a compact commitment to the entire log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    /// All events in chain order (sequence 0 first).
    pub events: Vec<LogEvent>,

    /// Wall-clock time (UTC) the snapshot was exported.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last event. Empty string if the log is empty.
    pub terminal_hash: String,
}
