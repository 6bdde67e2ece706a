//! Staff action kinds and the records the sink persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agora_contracts::actor::UserId;

/// The staff actions the sink knows how to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    DeleteUser,
    DeleteTopic,
    DeletePost,
    TrustLevelChange,
    SiteSettingChange,
    SuspendUser,
    UnsuspendUser,
    GrantBadge,
    RevokeBadge,
    RollUp,
}

/// One fire-and-forget record of who did what to whom.
///
/// `previous_value` and `new_value` carry the before/after state for
/// actions that change something; `details` is free-form context.
/// Records are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Unique identity of this record.
    pub id: Uuid,

    /// The staff member who performed the action.
    pub acting_user_id: UserId,

    pub action: ActionKind,

    /// The user the action was performed on, for user-directed actions.
    pub target_user_id: Option<UserId>,

    /// Short label for what was acted on (a setting name, a topic title).
    pub subject: Option<String>,

    pub previous_value: Option<String>,

    pub new_value: Option<String>,

    /// Free-form context (a suspension reason, a badge name).
    pub details: Option<String>,

    /// Wall-clock time (UTC) the record was created.
    pub created_at: DateTime<Utc>,
}
