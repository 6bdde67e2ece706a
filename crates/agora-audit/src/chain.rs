//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Every field that contributes to an event's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   3. canonical JSON of record (serde_json with no pretty-printing)

use sha2::{Digest, Sha256};

use crate::action::ActionRecord;
use crate::event::LogEvent;

/// Compute the SHA-256 hash for a single log event.
///
/// The hash commits to the event's position in the chain (`sequence`), its
/// link to the previous event (`prev_hash`), and the full record.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `record` cannot be serialized to JSON, which cannot happen
/// for the well-formed `ActionRecord` type.
pub fn hash_event(sequence: u64, record: &ActionRecord, prev_hash: &str) -> String {
    let record_json =
        serde_json::to_vec(record).expect("ActionRecord must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a hash chain.
///
/// Returns `true` when the chain is valid according to both rules:
///
/// 1. Prev-hash linkage: each event's `prev_hash` equals the `this_hash`
///    of the preceding event (or `GENESIS_HASH` for event 0).
/// 2. Hash correctness: each event's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected. An empty chain is
/// defined as valid.
pub fn verify_chain(events: &[LogEvent]) -> bool {
    let mut expected_prev = LogEvent::GENESIS_HASH.to_string();

    for event in events {
        if event.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_event(event.sequence, &event.record, &event.prev_hash);
        if event.this_hash != recomputed {
            return false;
        }

        expected_prev = event.this_hash.clone();
    }

    true
}
