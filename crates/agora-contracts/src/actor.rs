//! Actor identity: the authenticated principal or the anonymous default.
//!
//! The guardian is constructed around one `Actor` snapshot per request.
//! `Actor::Anonymous` satisfies no capability predicate and yields `None`
//! for every identity field; code never branches on a nullable user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::target::CategoryId;
use crate::trust::TrustLevel;

/// Stable numeric identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// A read-only snapshot of an authenticated principal.
///
/// The guardian only reads these fields; nothing in the authorization core
/// mutates a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub admin: bool,
    pub moderator: bool,
    /// Whether the account passed the site's approval queue.
    pub approved: bool,
    /// Whether the account is activated (email confirmed).
    pub active: bool,
    pub suspended: bool,
    /// When the suspension lapses; informational alongside `suspended`.
    pub suspended_until: Option<DateTime<Utc>>,
    pub trust_level: TrustLevel,
    /// Categories this user actively moderates.
    pub moderated_category_ids: Vec<CategoryId>,
}

impl User {
    /// Staff means admin or moderator.
    pub fn is_staff(&self) -> bool {
        self.admin || self.moderator
    }

    /// An ordinary, non-staff user.
    pub fn is_regular_user(&self) -> bool {
        !self.is_staff()
    }

    /// True if this user moderates the given category.
    pub fn moderates(&self, category_id: CategoryId) -> bool {
        self.moderated_category_ids.contains(&category_id)
    }

    /// True if this user actively moderates at least one category.
    pub fn is_moderating(&self) -> bool {
        !self.moderated_category_ids.is_empty()
    }
}

/// The principal a guardian evaluates permissions for.
///
/// Anonymous is a real variant, not a null user: every predicate below
/// pattern-matches on the tag, so an unauthenticated request can never
/// accidentally satisfy a staff or trust check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Authenticated(User),
    Anonymous,
}

impl Actor {
    /// The underlying principal, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Actor::Authenticated(user) => Some(user),
            Actor::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Authenticated(_))
    }

    pub fn id(&self) -> Option<UserId> {
        self.user().map(|u| u.id)
    }

    pub fn username(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user().and_then(|u| u.email.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.admin)
    }

    pub fn is_moderator(&self) -> bool {
        self.user().is_some_and(|u| u.moderator)
    }

    pub fn is_staff(&self) -> bool {
        self.user().is_some_and(User::is_staff)
    }

    pub fn is_approved(&self) -> bool {
        self.user().is_some_and(|u| u.approved)
    }

    /// Trust comparison; always false for the anonymous actor.
    pub fn has_trust_level(&self, level: TrustLevel) -> bool {
        self.user().is_some_and(|u| u.trust_level >= level)
    }

    /// True if the actor moderates the given category.
    pub fn moderates(&self, category_id: CategoryId) -> bool {
        self.user().is_some_and(|u| u.moderates(category_id))
    }

    /// True if the actor actively moderates at least one category.
    pub fn is_moderating(&self) -> bool {
        self.user().is_some_and(User::is_moderating)
    }
}
