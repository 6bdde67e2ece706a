//! # agora-audit
//!
//! Validated, append-only, SHA-256 hash-chained staff-action log for the
//! Agora platform.
//!
//! ## Overview
//!
//! Calling code invokes [`ActionLogger`] after the guardian permits an
//! action. The logger validates its arguments (anything missing or out of
//! range is `InvalidParameters`), builds an [`ActionRecord`], and appends
//! it through the [`ActionLogStore`] seam. The bundled
//! [`InMemoryActionLog`] chains every record to the previous one via its
//! SHA-256 hash; tampering with any event, even a single byte, breaks the
//! chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agora_audit::{ActionLogger, InMemoryActionLog};
//!
//! let store = InMemoryActionLog::new();
//! let logger = ActionLogger::new(&actor, Box::new(store.clone()))?;
//! logger.log_user_suspend(Some(&user), Some("spamming"))?;
//!
//! assert!(store.verify_integrity());
//! ```

pub mod action;
pub mod chain;
pub mod event;
pub mod logger;
pub mod memory;
pub mod sink;

pub use action::{ActionKind, ActionRecord};
pub use chain::{hash_event, verify_chain};
pub use event::{ActionLog, LogEvent};
pub use logger::ActionLogger;
pub use memory::InMemoryActionLog;
pub use sink::ActionLogStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use agora_contracts::{
        actor::{Actor, User, UserId},
        error::AgoraError,
        target::{BadgeGrant, Category, CategoryId, Post, PostId, Topic, TopicId},
        trust::TrustLevel,
    };

    use super::{ActionKind, ActionLogger, InMemoryActionLog, LogEvent};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn user(id: i64) -> User {
        User {
            id: UserId(id),
            username: format!("user{id}"),
            email: None,
            admin: false,
            moderator: false,
            approved: true,
            active: true,
            suspended: false,
            suspended_until: None,
            trust_level: TrustLevel::Basic,
            moderated_category_ids: vec![],
        }
    }

    fn admin_actor() -> Actor {
        Actor::Authenticated(User {
            admin: true,
            ..user(1)
        })
    }

    fn logger_with_store() -> (ActionLogger, InMemoryActionLog) {
        let store = InMemoryActionLog::new();
        let logger = ActionLogger::new(&admin_actor(), Box::new(store.clone())).unwrap();
        (logger, store)
    }

    fn assert_invalid<T: std::fmt::Debug>(result: Result<T, AgoraError>) {
        match result {
            Err(AgoraError::InvalidParameters { .. }) => {}
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    // ── Logger construction ───────────────────────────────────────────────────

    /// The logger refuses an anonymous acting user.
    #[test]
    fn logger_requires_an_acting_user() {
        let store = InMemoryActionLog::new();
        match ActionLogger::new(&Actor::Anonymous, Box::new(store)) {
            Err(AgoraError::InvalidParameters { reason }) => {
                assert!(reason.contains("acting user"));
            }
            Ok(_) => panic!("expected InvalidParameters for an anonymous actor"),
            Err(other) => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    // ── Validation per operation ──────────────────────────────────────────────

    #[test]
    fn deletions_require_their_target() {
        let (logger, _) = logger_with_store();
        assert_invalid(logger.log_user_deletion(None));
        assert_invalid(logger.log_topic_deletion(None));
        assert_invalid(logger.log_post_deletion(None));
    }

    #[test]
    fn user_deletion_records_the_target() {
        let (logger, store) = logger_with_store();
        let deleted = user(9);

        let record = logger.log_user_deletion(Some(&deleted)).unwrap();
        assert_eq!(record.action, ActionKind::DeleteUser);
        assert_eq!(record.target_user_id, Some(UserId(9)));
        assert_eq!(record.details.as_deref(), Some("user9"));
        assert_eq!(store.export().events.len(), 1);
    }

    #[test]
    fn topic_deletion_keeps_the_title() {
        let (logger, _) = logger_with_store();
        let topic = Topic {
            id: TopicId(3),
            title: "farewell".to_string(),
            user_id: Some(UserId(7)),
            category: Some(Category {
                id: CategoryId(1),
                name: "general".to_string(),
                read_restricted: false,
            }),
            closed: false,
        };

        let record = logger.log_topic_deletion(Some(&topic)).unwrap();
        assert_eq!(record.subject.as_deref(), Some("farewell"));
        assert_eq!(record.target_user_id, Some(UserId(7)));
    }

    #[test]
    fn post_deletion_names_the_post() {
        let (logger, _) = logger_with_store();
        let post = Post {
            id: PostId(12),
            topic_id: TopicId(3),
            user_id: None,
        };

        let record = logger.log_post_deletion(Some(&post)).unwrap();
        assert_eq!(record.action, ActionKind::DeletePost);
        assert_eq!(record.subject.as_deref(), Some("post 12"));
        assert_eq!(record.target_user_id, None);
    }

    /// Trust level changes reject a missing user and any level outside the
    /// valid range.
    #[test]
    fn trust_level_change_validates_its_arguments() {
        let (logger, _) = logger_with_store();
        let target = user(9);

        assert_invalid(logger.log_trust_level_change(None, 0, 1));
        assert_invalid(logger.log_trust_level_change(Some(&target), -1, 1));
        assert_invalid(logger.log_trust_level_change(Some(&target), 0, 5));
    }

    #[test]
    fn trust_level_change_records_before_and_after() {
        let (logger, _) = logger_with_store();
        let target = user(9);

        let record = logger.log_trust_level_change(Some(&target), 0, 1).unwrap();
        assert_eq!(record.previous_value.as_deref(), Some("0"));
        assert_eq!(record.new_value.as_deref(), Some("1"));
        assert!(record.details.unwrap().contains("new trust level: 1"));
    }

    /// Site setting changes reject a missing name and a name the
    /// configuration system does not recognize.
    #[test]
    fn site_setting_change_validates_the_name() {
        let (logger, _) = logger_with_store();
        assert_invalid(logger.log_site_setting_change(None, Some("1"), Some("2")));
        assert_invalid(logger.log_site_setting_change(Some("abc"), Some("1"), Some("2")));
    }

    #[test]
    fn site_setting_change_records_both_values() {
        let (logger, _) = logger_with_store();
        let record = logger
            .log_site_setting_change(Some("title"), Some("Agora"), Some("My Site"))
            .unwrap();
        assert_eq!(record.subject.as_deref(), Some("title"));
        assert_eq!(record.previous_value.as_deref(), Some("Agora"));
        assert_eq!(record.new_value.as_deref(), Some("My Site"));
    }

    /// The suspension reason is optional; the user is not.
    #[test]
    fn suspension_requires_user_not_reason() {
        let (logger, _) = logger_with_store();
        let target = user(9);

        assert_invalid(logger.log_user_suspend(None, None));
        assert_invalid(logger.log_user_suspend(None, Some("he was bad")));

        let without_reason = logger.log_user_suspend(Some(&target), None).unwrap();
        assert_eq!(without_reason.details, None);

        let with_reason = logger
            .log_user_suspend(Some(&target), Some("spamming"))
            .unwrap();
        assert_eq!(with_reason.details.as_deref(), Some("spamming"));
        assert_eq!(with_reason.target_user_id, Some(UserId(9)));
    }

    #[test]
    fn unsuspend_requires_the_user() {
        let (logger, _) = logger_with_store();
        assert_invalid(logger.log_user_unsuspend(None));

        let record = logger.log_user_unsuspend(Some(&user(9))).unwrap();
        assert_eq!(record.action, ActionKind::UnsuspendUser);
        assert_eq!(record.target_user_id, Some(UserId(9)));
    }

    #[test]
    fn badge_records_carry_the_badge_name() {
        let (logger, _) = logger_with_store();
        let grant = BadgeGrant {
            user_id: UserId(9),
            badge_name: "first-like".to_string(),
        };

        assert_invalid(logger.log_badge_grant(None));
        assert_invalid(logger.log_badge_revoke(None));

        let granted = logger.log_badge_grant(Some(&grant)).unwrap();
        assert_eq!(granted.target_user_id, Some(UserId(9)));
        assert_eq!(granted.details.as_deref(), Some("first-like"));

        let revoked = logger.log_badge_revoke(Some(&grant)).unwrap();
        assert_eq!(revoked.action, ActionKind::RevokeBadge);
        assert_eq!(revoked.details.as_deref(), Some("first-like"));
    }

    #[test]
    fn roll_up_joins_the_subnets() {
        let (logger, _) = logger_with_store();
        let subnets = vec!["1.2.3.0/24".to_string(), "42.42.42.0/24".to_string()];

        let record = logger.log_roll_up(&subnets).unwrap();
        assert_eq!(
            record.details.as_deref(),
            Some("1.2.3.0/24, 42.42.42.0/24")
        );
    }

    // ── Chain behavior ────────────────────────────────────────────────────────

    /// Writing several records produces a valid chain with monotonic
    /// sequence numbers.
    #[test]
    fn chain_is_valid_after_sequential_writes() {
        let (logger, store) = logger_with_store();
        logger.log_user_suspend(Some(&user(2)), Some("a")).unwrap();
        logger.log_user_unsuspend(Some(&user(2))).unwrap();
        logger.log_roll_up(&["10.0.0.0/8".to_string()]).unwrap();

        assert!(store.verify_integrity());

        let log = store.export();
        assert_eq!(log.events.len(), 3);
        for (idx, event) in log.events.iter().enumerate() {
            assert_eq!(event.sequence, idx as u64);
        }
        assert_eq!(
            log.terminal_hash,
            log.events.last().unwrap().this_hash,
            "terminal_hash must equal the last event's this_hash"
        );
    }

    /// The first event links to the genesis sentinel hash.
    #[test]
    fn first_event_links_to_genesis() {
        let (logger, store) = logger_with_store();
        logger.log_user_deletion(Some(&user(9))).unwrap();

        let log = store.export();
        assert_eq!(log.events[0].prev_hash, LogEvent::GENESIS_HASH);
    }

    /// Mutating any stored event breaks the chain.
    #[test]
    fn tampering_is_detected() {
        let (logger, store) = logger_with_store();
        logger.log_user_suspend(Some(&user(2)), Some("a")).unwrap();
        logger.log_user_suspend(Some(&user(3)), Some("b")).unwrap();

        {
            let mut state = store.state.lock().unwrap();
            state.events[0].record.details = Some("TAMPERED".to_string());
        }

        assert!(!store.verify_integrity());
    }

    /// An empty chain is trivially valid.
    #[test]
    fn empty_chain_is_valid() {
        let store = InMemoryActionLog::new();
        assert!(store.verify_integrity());
        assert!(super::verify_chain(&[]));
        assert_eq!(store.export().terminal_hash, "");
    }
}
