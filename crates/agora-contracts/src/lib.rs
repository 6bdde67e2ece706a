//! # agora-contracts
//!
//! Shared types and contracts for the Agora authorization core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate - only data definitions and error types.

pub mod actor;
pub mod error;
pub mod settings;
pub mod target;
pub mod trust;

#[cfg(test)]
mod tests {
    use super::*;
    use actor::{Actor, User, UserId};
    use error::AgoraError;
    use settings::{DeploymentMode, SiteSettings};
    use target::{Category, CategoryId, Post, PostId, Target, TargetKind, Topic, TopicId};
    use trust::TrustLevel;

    fn plain_user(id: i64) -> User {
        User {
            id: UserId(id),
            username: format!("user{id}"),
            email: Some(format!("user{id}@example.com")),
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

    // ── TrustLevel ───────────────────────────────────────────────────────────

    #[test]
    fn trust_levels_are_ordered() {
        assert!(TrustLevel::NewUser < TrustLevel::Basic);
        assert!(TrustLevel::Basic < TrustLevel::Member);
        assert!(TrustLevel::Member < TrustLevel::Regular);
        assert!(TrustLevel::Regular < TrustLevel::Leader);
    }

    #[test]
    fn trust_level_index_round_trips() {
        for index in 0..=4 {
            let level = TrustLevel::from_index(index).unwrap();
            assert_eq!(level.index(), index);
        }
    }

    #[test]
    fn trust_level_rejects_out_of_range() {
        assert_eq!(TrustLevel::from_index(-1), None);
        assert_eq!(TrustLevel::from_index(5), None);
        assert_eq!(TrustLevel::MAX.index() + 1, 5);
    }

    // ── Actor ────────────────────────────────────────────────────────────────

    /// The anonymous actor satisfies no predicate and yields no identity.
    #[test]
    fn anonymous_actor_is_capability_free() {
        let anon = Actor::Anonymous;

        assert!(!anon.is_authenticated());
        assert!(!anon.is_admin());
        assert!(!anon.is_staff());
        assert!(!anon.is_moderator());
        assert!(!anon.is_approved());
        assert!(!anon.is_moderating());
        for index in 0..=4 {
            assert!(!anon.has_trust_level(TrustLevel::from_index(index).unwrap()));
        }
        assert_eq!(anon.id(), None);
        assert_eq!(anon.username(), None);
        assert_eq!(anon.email(), None);
    }

    #[test]
    fn staff_is_admin_or_moderator() {
        let mut user = plain_user(1);
        assert!(!user.is_staff());
        assert!(user.is_regular_user());

        user.moderator = true;
        assert!(user.is_staff());

        user.moderator = false;
        user.admin = true;
        assert!(user.is_staff());
        assert!(!user.is_regular_user());
    }

    #[test]
    fn trust_comparison_is_at_least() {
        let mut user = plain_user(2);
        user.trust_level = TrustLevel::Member;
        let actor = Actor::Authenticated(user);

        assert!(actor.has_trust_level(TrustLevel::NewUser));
        assert!(actor.has_trust_level(TrustLevel::Member));
        assert!(!actor.has_trust_level(TrustLevel::Regular));
        assert!(!actor.has_trust_level(TrustLevel::Leader));
    }

    #[test]
    fn moderation_tracks_category_ids() {
        let mut user = plain_user(3);
        user.moderated_category_ids = vec![CategoryId(7)];
        let actor = Actor::Authenticated(user);

        assert!(actor.is_moderating());
        assert!(actor.moderates(CategoryId(7)));
        assert!(!actor.moderates(CategoryId(8)));
    }

    // ── Target ───────────────────────────────────────────────────────────────

    #[test]
    fn target_kind_matches_variant() {
        let category = Category {
            id: CategoryId(1),
            name: "general".to_string(),
            read_restricted: false,
        };
        let topic = Topic {
            id: TopicId(1),
            title: "hello".to_string(),
            user_id: Some(UserId(9)),
            category: Some(category.clone()),
            closed: false,
        };

        assert_eq!(Target::Category(&category).kind(), TargetKind::Category);
        assert_eq!(Target::Topic(&topic).kind(), TargetKind::Topic);
    }

    #[test]
    fn owner_id_only_for_owned_targets() {
        let post = Post {
            id: PostId(1),
            topic_id: TopicId(1),
            user_id: Some(UserId(42)),
        };
        let user = plain_user(42);

        assert_eq!(Target::Post(&post).owner_id(), Some(UserId(42)));
        // A user is not "owned"; identity comparison handles that case.
        assert_eq!(Target::User(&user).owner_id(), None);
    }

    // ── SiteSettings ─────────────────────────────────────────────────────────

    #[test]
    fn settings_defaults_are_permissive() {
        let settings = SiteSettings::default();
        assert!(!settings.must_approve_users);
        assert!(!settings.enable_sso);
        assert!(settings.enable_local_logins);
        assert!(settings.enable_private_messages);
        assert!(settings.enable_badges);
        assert_eq!(settings.deployment, DeploymentMode::Production);
    }

    #[test]
    fn known_settings_recognized() {
        assert!(SiteSettings::is_known_setting("must_approve_users"));
        assert!(SiteSettings::is_known_setting("title"));
        assert!(!SiteSettings::is_known_setting("no_such_setting"));
    }

    // ── Serde round trips ────────────────────────────────────────────────────

    #[test]
    fn actor_round_trips_through_json() {
        let original = Actor::Authenticated(plain_user(5));
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── AgoraError display messages ──────────────────────────────────────────

    #[test]
    fn error_invalid_parameters_display() {
        let err = AgoraError::InvalidParameters {
            reason: "acting user is required".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid parameters"));
        assert!(msg.contains("acting user is required"));
    }

    #[test]
    fn error_config_error_display() {
        let err = AgoraError::ConfigError {
            reason: "missing settings path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing settings path"));
    }
}
