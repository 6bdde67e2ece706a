//! The staff action logger: validation in front of the sink.
//!
//! Calling code records an action *after* the guardian permits it. Every
//! operation validates its arguments before anything reaches the store;
//! a missing or out-of-range argument is `AgoraError::InvalidParameters`,
//! a programming error the caller should propagate, not swallow.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use agora_contracts::{
    actor::{Actor, User, UserId},
    error::{AgoraError, AgoraResult},
    settings::SiteSettings,
    target::{BadgeGrant, Post, Topic},
    trust::TrustLevel,
};

use crate::{
    action::{ActionKind, ActionRecord},
    sink::ActionLogStore,
};

/// Records staff actions on behalf of one acting user.
///
/// Construction fails for an anonymous actor: every record needs a real
/// principal behind it.
pub struct ActionLogger {
    acting_user_id: UserId,
    store: Box<dyn ActionLogStore>,
}

impl ActionLogger {
    /// Build a logger for the given actor.
    ///
    /// Returns `InvalidParameters` when the actor is anonymous.
    pub fn new(actor: &Actor, store: Box<dyn ActionLogStore>) -> AgoraResult<Self> {
        let Some(user) = actor.user() else {
            return Err(AgoraError::InvalidParameters {
                reason: "acting user is required".to_string(),
            });
        };
        Ok(Self {
            acting_user_id: user.id,
            store,
        })
    }

    // ── Operations ────────────────────────────────────────────────────────────

    pub fn log_user_deletion(&self, deleted: Option<&User>) -> AgoraResult<ActionRecord> {
        let deleted = required(deleted, "deleted user is required")?;
        self.write(ActionRecord {
            target_user_id: Some(deleted.id),
            details: Some(deleted.username.clone()),
            ..self.base(ActionKind::DeleteUser)
        })
    }

    pub fn log_topic_deletion(&self, topic: Option<&Topic>) -> AgoraResult<ActionRecord> {
        let topic = required(topic, "deleted topic is required")?;
        self.write(ActionRecord {
            target_user_id: topic.user_id,
            subject: Some(topic.title.clone()),
            ..self.base(ActionKind::DeleteTopic)
        })
    }

    pub fn log_post_deletion(&self, post: Option<&Post>) -> AgoraResult<ActionRecord> {
        let post = required(post, "deleted post is required")?;
        self.write(ActionRecord {
            target_user_id: post.user_id,
            subject: Some(format!("post {}", post.id.0)),
            ..self.base(ActionKind::DeletePost)
        })
    }

    /// Record a trust level change.
    ///
    /// Both levels must be inside the valid trust-level range; the user is
    /// required. The record keeps the numeric before/after values and a
    /// human-readable summary of the new level.
    pub fn log_trust_level_change(
        &self,
        user: Option<&User>,
        old_level: i64,
        new_level: i64,
    ) -> AgoraResult<ActionRecord> {
        let user = required(user, "user is required")?;
        valid_trust_level(old_level)?;
        valid_trust_level(new_level)?;

        self.write(ActionRecord {
            target_user_id: Some(user.id),
            previous_value: Some(old_level.to_string()),
            new_value: Some(new_level.to_string()),
            details: Some(format!("new trust level: {}", new_level)),
            ..self.base(ActionKind::TrustLevelChange)
        })
    }

    /// Record a site setting change.
    ///
    /// The setting name must be one the configuration system recognizes.
    pub fn log_site_setting_change(
        &self,
        name: Option<&str>,
        previous_value: Option<&str>,
        new_value: Option<&str>,
    ) -> AgoraResult<ActionRecord> {
        let name = required(name, "setting name is required")?;
        if !SiteSettings::is_known_setting(name) {
            return Err(AgoraError::InvalidParameters {
                reason: format!("unknown site setting '{}'", name),
            });
        }

        self.write(ActionRecord {
            subject: Some(name.to_string()),
            previous_value: previous_value.map(str::to_string),
            new_value: new_value.map(str::to_string),
            ..self.base(ActionKind::SiteSettingChange)
        })
    }

    /// Record a suspension. The reason is optional and lands in `details`.
    pub fn log_user_suspend(
        &self,
        user: Option<&User>,
        reason: Option<&str>,
    ) -> AgoraResult<ActionRecord> {
        let user = required(user, "suspended user is required")?;
        self.write(ActionRecord {
            target_user_id: Some(user.id),
            details: reason.map(str::to_string),
            ..self.base(ActionKind::SuspendUser)
        })
    }

    pub fn log_user_unsuspend(&self, user: Option<&User>) -> AgoraResult<ActionRecord> {
        let user = required(user, "unsuspended user is required")?;
        self.write(ActionRecord {
            target_user_id: Some(user.id),
            ..self.base(ActionKind::UnsuspendUser)
        })
    }

    pub fn log_badge_grant(&self, grant: Option<&BadgeGrant>) -> AgoraResult<ActionRecord> {
        let grant = required(grant, "badge grant is required")?;
        self.write(ActionRecord {
            target_user_id: Some(grant.user_id),
            details: Some(grant.badge_name.clone()),
            ..self.base(ActionKind::GrantBadge)
        })
    }

    pub fn log_badge_revoke(&self, grant: Option<&BadgeGrant>) -> AgoraResult<ActionRecord> {
        let grant = required(grant, "badge grant is required")?;
        self.write(ActionRecord {
            target_user_id: Some(grant.user_id),
            details: Some(grant.badge_name.clone()),
            ..self.base(ActionKind::RevokeBadge)
        })
    }

    /// Record an IP roll-up over a list of subnets.
    pub fn log_roll_up(&self, subnets: &[String]) -> AgoraResult<ActionRecord> {
        self.write(ActionRecord {
            details: Some(subnets.join(", ")),
            ..self.base(ActionKind::RollUp)
        })
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn base(&self, action: ActionKind) -> ActionRecord {
        ActionRecord {
            id: Uuid::new_v4(),
            acting_user_id: self.acting_user_id,
            action,
            target_user_id: None,
            subject: None,
            previous_value: None,
            new_value: None,
            details: None,
            created_at: Utc::now(),
        }
    }

    fn write(&self, record: ActionRecord) -> AgoraResult<ActionRecord> {
        self.store.append(&record)?;
        debug!(action = ?record.action, record_id = %record.id, "staff action recorded");
        Ok(record)
    }
}

/// Unwrap a required argument or fail with `InvalidParameters`.
fn required<T>(value: Option<T>, reason: &str) -> AgoraResult<T> {
    value.ok_or_else(|| AgoraError::InvalidParameters {
        reason: reason.to_string(),
    })
}

/// Check a raw numeric level against the valid trust-level range.
fn valid_trust_level(level: i64) -> AgoraResult<TrustLevel> {
    TrustLevel::from_index(level).ok_or_else(|| AgoraError::InvalidParameters {
        reason: format!(
            "trust level {} is outside the valid range {}..={}",
            level,
            TrustLevel::MIN.index(),
            TrustLevel::MAX.index()
        ),
    })
}
