//! Deterministic sample data for scenarios and demos.
//!
//! Everything here is hardcoded and fictional. The sample site covers the
//! role and trust spectrum one screenful of demo output can exercise: an
//! admin, a moderator, an established member, a newcomer, and a suspended
//! account, spread over a public and a read-restricted category.

use chrono::{Duration, Utc};

use agora_contracts::{
    actor::{User, UserId},
    settings::SiteSettings,
    target::{Category, CategoryId, Group, GroupId, Topic, TopicId},
    trust::TrustLevel,
};

/// The assembled sample site.
pub struct SampleSite {
    pub settings: SiteSettings,
    pub admin: User,
    pub moderator: User,
    pub member: User,
    pub newcomer: User,
    pub suspended: User,
    /// Public category.
    pub general: Category,
    /// Read-restricted category.
    pub lounge: Category,
    /// Topic in the public category, started by the member.
    pub welcome_topic: Topic,
    /// Hidden group.
    pub staff_group: Group,
    /// Publicly visible group.
    pub regulars_group: Group,
}

fn base_user(id: i64, username: &str) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
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

impl SampleSite {
    pub fn build() -> Self {
        let general = Category {
            id: CategoryId(1),
            name: "general".to_string(),
            read_restricted: false,
        };
        let lounge = Category {
            id: CategoryId(2),
            name: "lounge".to_string(),
            read_restricted: true,
        };

        let admin = User {
            admin: true,
            ..base_user(1, "alice")
        };
        let moderator = User {
            moderator: true,
            ..base_user(2, "bob")
        };
        let member = User {
            trust_level: TrustLevel::Member,
            ..base_user(3, "carol")
        };
        let newcomer = User {
            trust_level: TrustLevel::NewUser,
            ..base_user(4, "dana")
        };
        let suspended = User {
            suspended: true,
            suspended_until: Some(Utc::now() + Duration::days(30)),
            ..base_user(5, "eve")
        };

        let welcome_topic = Topic {
            id: TopicId(1),
            title: "Welcome to Agora".to_string(),
            user_id: Some(member.id),
            category: Some(general.clone()),
            closed: false,
        };

        let staff_group = Group {
            id: GroupId(1),
            name: "staff".to_string(),
            visible: false,
        };
        let regulars_group = Group {
            id: GroupId(2),
            name: "regulars".to_string(),
            visible: true,
        };

        Self {
            settings: SiteSettings::default(),
            admin,
            moderator,
            member,
            newcomer,
            suspended,
            general,
            lounge,
            welcome_topic,
            staff_group,
            regulars_group,
        }
    }
}
