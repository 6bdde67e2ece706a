//! The sink seam between the action logger and whatever stores records.

use agora_contracts::error::AgoraResult;

use crate::action::ActionRecord;

/// Where validated action records go.
///
/// Implementations must treat this as an append-only operation. Records
/// written here are never modified or deleted. The logger does not consume
/// any return value beyond success.
pub trait ActionLogStore: Send + Sync {
    /// Append one record to the log.
    fn append(&self, record: &ActionRecord) -> AgoraResult<()>;
}
