//! In-memory implementation of `ActionLogStore`.
//!
//! `InMemoryActionLog` keeps all events in a `Vec` protected by a `Mutex`.
//! Clones share the same underlying chain, so a handle can be kept for
//! inspection while the logger owns another.
//!
//! Use `export()` to obtain a sealed `ActionLog` snapshot and
//! `verify_integrity()` at any time to confirm the chain has not been
//! tampered with in memory.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use agora_contracts::error::{AgoraError, AgoraResult};

use crate::{
    action::ActionRecord,
    chain::{hash_event, verify_chain},
    event::{ActionLog, LogEvent},
    sink::ActionLogStore,
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryActionLog`.
pub(crate) struct InMemoryState {
    /// All events written so far, in append order.
    pub(crate) events: Vec<LogEvent>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last written event, or `GENESIS_HASH` before
    /// any event has been written.
    pub(crate) last_hash: String,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// An in-memory, append-only action log backed by a SHA-256 hash chain.
///
/// # Thread safety
///
/// `append()` acquires a `Mutex` internally; clones of the store share one
/// chain and may be used from multiple threads.
#[derive(Clone)]
pub struct InMemoryActionLog {
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryActionLog {
    /// Create an empty log.
    ///
    /// The internal `last_hash` starts at `LogEvent::GENESIS_HASH` so the
    /// first event's `prev_hash` is automatically correct.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState {
                events: Vec::new(),
                sequence: 0,
                last_hash: LogEvent::GENESIS_HASH.to_string(),
            })),
        }
    }

    /// Export a sealed `ActionLog` containing all events written so far.
    pub fn export(&self) -> ActionLog {
        let state = self.state.lock().expect("action log lock poisoned");
        let terminal_hash = state
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        info!(
            event_count = state.events.len(),
            terminal_hash = %terminal_hash,
            "action log exported"
        );

        ActionLog {
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("action log lock poisoned");
        verify_chain(&state.events)
    }
}

impl Default for InMemoryActionLog {
    fn default() -> Self {
        Self::new()
    }
}

// ── ActionLogStore impl ───────────────────────────────────────────────────────

impl ActionLogStore for InMemoryActionLog {
    /// Append one record to the hash chain.
    ///
    /// Computes `this_hash` from (sequence, prev_hash, record), wraps the
    /// record in a `LogEvent`, appends it, then advances the sequence
    /// counter and `last_hash`.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn append(&self, record: &ActionRecord) -> AgoraResult<()> {
        let mut state = self.state.lock().map_err(|e| AgoraError::AuditWriteFailed {
            reason: format!("action log lock poisoned: {}", e),
        })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;

        let this_hash = hash_event(sequence, record, &prev_hash);

        let event = LogEvent {
            sequence,
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        };

        state.events.push(event);
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }
}
