//! Target entities the guardian is asked about.
//!
//! Each type exposes the minimal read-only surface a permission decision
//! needs. The guardian never owns or mutates a target; `Target` borrows.

use serde::{Deserialize, Serialize};

use crate::actor::{User, UserId};

/// Stable numeric identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

/// Stable numeric identifier for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub i64);

/// Stable numeric identifier for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

/// Stable numeric identifier for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

/// A category of topics, possibly read-restricted to a subset of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Restricted categories are invisible to users without access.
    pub read_restricted: bool,
}

/// A discussion topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    /// The user who started the topic, when known.
    pub user_id: Option<UserId>,
    /// The category the topic lives in. Uncategorized topics carry `None`.
    pub category: Option<Category>,
    /// Closed topics accept no new posts from ordinary users.
    pub closed: bool,
}

/// A user group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Publicly visible groups can be seen by anyone; hidden groups only
    /// by admins.
    pub visible: bool,
}

/// A single post inside a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub topic_id: TopicId,
    /// The post's author, when known.
    pub user_id: Option<UserId>,
}

/// A stored revision of a post's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRevision {
    pub post_id: PostId,
    /// The user who made the revision, when known.
    pub user_id: Option<UserId>,
    /// Hidden revisions are visible to staff only.
    pub hidden: bool,
}

/// A badge granted to a user, the unit the audit sink records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeGrant {
    pub user_id: UserId,
    pub badge_name: String,
}

/// Fieldless type tag for a target, used as a rule-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Topic,
    Category,
    Group,
    User,
    Post,
    PostRevision,
}

/// A borrowed view of any entity the guardian can be asked about.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Topic(&'a Topic),
    Category(&'a Category),
    Group(&'a Group),
    User(&'a User),
    Post(&'a Post),
    PostRevision(&'a PostRevision),
}

impl Target<'_> {
    /// The type tag rule lookups key on.
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Topic(_) => TargetKind::Topic,
            Target::Category(_) => TargetKind::Category,
            Target::Group(_) => TargetKind::Group,
            Target::User(_) => TargetKind::User,
            Target::Post(_) => TargetKind::Post,
            Target::PostRevision(_) => TargetKind::PostRevision,
        }
    }

    /// The owning user id, for targets that carry one.
    ///
    /// `None` means the target either has no owner field or its owner is
    /// unknown; ownership checks fall through to identity comparison.
    pub fn owner_id(&self) -> Option<UserId> {
        match self {
            Target::Topic(topic) => topic.user_id,
            Target::Post(post) => post.user_id,
            Target::PostRevision(revision) => revision.user_id,
            Target::Category(_) | Target::Group(_) | Target::User(_) => None,
        }
    }
}
