//! The guardian: the per-request permission decision engine.
//!
//! A `Guardian` is constructed once per request from an actor snapshot and
//! the site settings, then queried before an action is performed or a view
//! rendered. Queries are pure functions of (actor, settings, target); the
//! single exception is the `can_see_emails` flag, ordinary instance state
//! set by privileged callers.
//!
//! Absent targets never panic and never error: every query on a missing
//! target returns `false`, except `can_see`, whose missing-target result
//! is `None` and must not be read as a denial.

use tracing::debug;

use agora_contracts::{
    actor::{Actor, User, UserId},
    settings::{DeploymentMode, SiteSettings},
    target::{Group, GroupId, Target, TargetKind},
    trust::TrustLevel,
};

use crate::domains;
use crate::rules::{Action, RuleTable};

/// Confirms access to site resources and operations for one actor.
///
/// One guardian per request. The rule table is populated at construction
/// and read-only afterwards; do not share an instance across threads, the
/// `can_see_emails` flag is plain unsynchronized state.
#[derive(Debug)]
pub struct Guardian {
    actor: Actor,
    settings: SiteSettings,
    rules: RuleTable,
    can_see_emails: bool,
}

impl Guardian {
    /// Build a guardian with the standard per-domain rule set.
    pub fn new(actor: Actor, settings: SiteSettings) -> Self {
        let mut rules = RuleTable::new();
        domains::register_all(&mut rules);
        Self {
            actor,
            settings,
            rules,
            can_see_emails: false,
        }
    }

    /// Build a guardian with a caller-assembled rule table.
    pub fn with_rules(actor: Actor, settings: SiteSettings, rules: RuleTable) -> Self {
        Self {
            actor,
            settings,
            rules,
            can_see_emails: false,
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// The authenticated principal, if any.
    pub fn user(&self) -> Option<&User> {
        self.actor.user()
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    // ── Identity and capability predicates ────────────────────────────────────

    pub fn authenticated(&self) -> bool {
        self.actor.is_authenticated()
    }

    pub fn anonymous(&self) -> bool {
        !self.authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.actor.is_admin()
    }

    pub fn is_staff(&self) -> bool {
        self.actor.is_staff()
    }

    pub fn is_moderator(&self) -> bool {
        self.actor.is_moderator()
    }

    /// Actor trust is at least `level`. Always false for anonymous actors.
    pub fn has_trust_level(&self, level: TrustLevel) -> bool {
        self.actor.has_trust_level(level)
    }

    pub fn is_user_basic(&self) -> bool {
        self.has_trust_level(TrustLevel::Basic)
    }

    pub fn is_user_member(&self) -> bool {
        self.has_trust_level(TrustLevel::Member)
    }

    /// Gates on the same level as `is_user_member`. The shared level-2
    /// threshold is intentional, not a typo.
    pub fn is_user_regular(&self) -> bool {
        self.has_trust_level(TrustLevel::Member)
    }

    pub fn is_user_leader(&self) -> bool {
        self.has_trust_level(TrustLevel::Leader)
    }

    /// An admin running a development deployment, or an admin whose email
    /// is on the configured developer allowlist.
    pub fn is_developer(&self) -> bool {
        self.is_admin()
            && (self.settings.deployment == DeploymentMode::Development
                || self
                    .actor
                    .email()
                    .is_some_and(|email| self.settings.developer_emails.iter().any(|d| d == email)))
    }

    // ── Generic see/edit/delete/create dispatch ───────────────────────────────

    /// Can the actor see the target?
    ///
    /// A missing target yields `None`: a non-result, not a denial. With a
    /// target present, the registered See rule for its kind decides;
    /// kinds without a rule are visible to everyone.
    pub fn can_see(&self, target: Option<&Target<'_>>) -> Option<bool> {
        let target = target?;
        let allowed = match self.rules.target_rule(Action::See, target.kind()) {
            Some(rule) => rule(self, target),
            None => true,
        };
        debug!(target = ?target.kind(), allowed, "visibility check");
        Some(allowed)
    }

    /// Can the actor edit the target?
    pub fn can_edit(&self, target: Option<&Target<'_>>) -> bool {
        self.can_do(Action::Edit, target)
    }

    /// Can the actor delete the target?
    pub fn can_delete(&self, target: Option<&Target<'_>>) -> bool {
        self.can_do(Action::Delete, target)
    }

    fn can_do(&self, action: Action, target: Option<&Target<'_>>) -> bool {
        let Some(target) = target else {
            return false;
        };
        if self.anonymous() {
            return false;
        }
        let allowed = match self.rules.target_rule(action, target.kind()) {
            Some(rule) => rule(self, target),
            None => true,
        };
        debug!(?action, target = ?target.kind(), allowed, "action check");
        allowed
    }

    /// Can the actor create an entity of `kind`, optionally under `parent`?
    ///
    /// With a parent, the parent must be visible and the rule is looked up
    /// under (Create, kind, parent kind); without one, under (Create,
    /// kind). Unregistered combinations are allowed.
    pub fn can_create(&self, kind: TargetKind, parent: Option<&Target<'_>>) -> bool {
        if self.anonymous() {
            return false;
        }

        if let Some(parent) = parent {
            if self.can_see(Some(parent)) != Some(true) {
                debug!(?kind, parent = ?parent.kind(), "create denied, parent not visible");
                return false;
            }
            return match self.rules.create_rule(kind, Some(parent.kind())) {
                Some(rule) => rule(self, Some(parent)),
                None => true,
            };
        }

        match self.rules.create_rule(kind, None) {
            Some(rule) => rule(self, None),
            None => true,
        }
    }

    // ── Moderation ────────────────────────────────────────────────────────────

    /// True when the actor moderates this particular target: leaders
    /// moderate everything moderatable, category moderators their category
    /// and the topics in it. Other target kinds are never moderatable.
    pub fn can_moderate_target(&self, target: &Target<'_>) -> bool {
        match *target {
            Target::Topic(topic) => {
                self.is_user_leader()
                    || topic
                        .category
                        .as_ref()
                        .is_some_and(|category| self.actor.moderates(category.id))
            }
            Target::Category(category) => {
                self.is_user_leader() || self.actor.moderates(category.id)
            }
            _ => false,
        }
    }

    pub fn can_moderate(&self, target: Option<&Target<'_>>) -> bool {
        let Some(target) = target else {
            return false;
        };
        self.authenticated() && (self.is_staff() || self.can_moderate_target(target))
    }

    /// Synonym for `can_moderate`.
    pub fn can_move_posts(&self, target: Option<&Target<'_>>) -> bool {
        self.can_moderate(target)
    }

    /// Synonym for `can_moderate`.
    pub fn can_see_flags(&self, target: Option<&Target<'_>>) -> bool {
        self.can_moderate(target)
    }

    /// Synonym for `can_moderate`.
    pub fn can_send_activation_email(&self, target: Option<&Target<'_>>) -> bool {
        self.can_moderate(target)
    }

    // ── Administrative actions ────────────────────────────────────────────────

    pub fn can_grant_badges(&self) -> bool {
        self.settings.enable_badges && self.is_staff()
    }

    pub fn can_see_group(&self, group: Option<&Group>) -> bool {
        group.is_some_and(|group| self.is_admin() || group.visible)
    }

    /// Can the actor impersonate this user?
    ///
    /// Admins only, and admins may not impersonate other admins unless
    /// they are developers. There is no explicit self check: the two
    /// admin-status tests cannot both hold for the same identity.
    pub fn can_impersonate(&self, target: Option<&User>) -> bool {
        target.is_some_and(|target| self.is_admin() && (!target.admin || self.is_developer()))
    }

    pub fn can_approve(&self, target: Option<&User>) -> bool {
        self.is_staff() && target.is_some_and(|target| !target.approved)
    }

    pub fn can_activate(&self, target: Option<&User>) -> bool {
        self.is_staff() && target.is_some_and(|target| !target.active)
    }

    /// Staff may suspend ordinary users; staff accounts are never
    /// suspendable, whoever asks.
    pub fn can_suspend(&self, other: Option<&User>) -> bool {
        other.is_some_and(|other| self.is_staff() && other.is_regular_user())
    }

    /// Synonym for `can_suspend`.
    pub fn can_deactivate(&self, other: Option<&User>) -> bool {
        self.can_suspend(other)
    }

    pub fn can_revoke_admin(&self, admin: Option<&User>) -> bool {
        self.can_administer_user(admin) && admin.is_some_and(|admin| admin.admin)
    }

    pub fn can_grant_admin(&self, user: Option<&User>) -> bool {
        self.can_administer_user(user) && user.is_some_and(|user| !user.admin)
    }

    // The moderation pair goes through can_administer, without the
    // not-yourself guard the admin pair carries. An admin who is also a
    // moderator can revoke their own moderation.

    pub fn can_revoke_moderation(&self, moderator: Option<&User>) -> bool {
        self.can_administer(moderator) && moderator.is_some_and(|moderator| moderator.moderator)
    }

    pub fn can_grant_moderation(&self, user: Option<&User>) -> bool {
        self.can_administer(user) && user.is_some_and(|user| !user.moderator)
    }

    pub fn can_grant_title(&self, user: Option<&User>) -> bool {
        user.is_some() && self.is_staff()
    }

    pub fn can_change_primary_group(&self, user: Option<&User>) -> bool {
        user.is_some() && self.is_staff()
    }

    pub fn can_change_trust_level(&self, user: Option<&User>) -> bool {
        user.is_some() && self.is_staff()
    }

    // ── Forum access, invitations, messaging ──────────────────────────────────

    /// Sites that approve users deny the unapproved; staff cannot lock
    /// themselves out.
    pub fn can_access_forum(&self) -> bool {
        if !self.settings.must_approve_users {
            return true;
        }
        let Some(user) = self.actor.user() else {
            return false;
        };
        if user.is_staff() {
            return true;
        }
        user.approved
    }

    /// Invite details are visible to their owner only.
    pub fn can_see_invite_details(&self, user: Option<&User>) -> bool {
        self.is_me(user)
    }

    pub fn can_invite_to_forum(&self, groups: Option<&[GroupId]>) -> bool {
        self.authenticated()
            && !self.settings.enable_sso
            && self.settings.enable_local_logins
            && ((!self.settings.must_approve_users && self.is_user_member())
                || self.is_staff()
                || self.actor.is_moderating())
            && (groups.map_or(true, <[GroupId]>::is_empty) || self.is_admin())
    }

    pub fn can_invite_to(
        &self,
        object: Option<&Target<'_>>,
        group_ids: Option<&[GroupId]>,
    ) -> bool {
        let Some(object) = object else {
            return false;
        };

        let mut can_invite = self.can_see(Some(object)) == Some(true)
            && self.can_invite_to_forum(group_ids)
            && (group_ids.map_or(true, <[GroupId]>::is_empty) || self.is_admin());

        // Topics in read-restricted categories take admins only.
        if let Target::Topic(topic) = *object {
            if let Some(category) = &topic.category {
                if category.read_restricted {
                    can_invite = can_invite && self.is_admin();
                }
            }
        }

        can_invite
    }

    pub fn can_bulk_invite_to_forum(&self, user: Option<&User>) -> bool {
        user.is_some_and(|user| user.admin)
    }

    pub fn can_create_disposable_invite(&self, user: Option<&User>) -> bool {
        user.is_some_and(|user| user.admin)
    }

    pub fn can_send_multiple_invites(&self, user: Option<&User>) -> bool {
        user.is_some_and(User::is_staff)
    }

    pub fn can_see_private_messages(&self, user_id: UserId) -> bool {
        self.is_admin() || (self.authenticated() && self.actor.id() == Some(user_id))
    }

    /// Can the actor send a private message to this target?
    ///
    /// Only users and groups are addressable. Suspended users only hear
    /// from staff; groups are exempt from the suspension check. With
    /// messaging disabled site-wide, the configured contact and system
    /// accounts stay reachable.
    pub fn can_send_private_message(&self, target: Option<&Target<'_>>) -> bool {
        let Some(target) = target else {
            return false;
        };
        let (is_group, target_user): (bool, Option<&User>) = match *target {
            Target::Group(_) => (true, None),
            Target::User(user) => (false, Some(user)),
            _ => return false,
        };

        self.authenticated()
            // No messaging yourself.
            && self.is_not_me(target_user)
            // At least basic trust to send messages.
            && self.is_user_basic()
            && (self.settings.enable_private_messages
                || target_user.is_some_and(|user| {
                    self.settings.site_contact_username.as_deref() == Some(user.username.as_str())
                })
                || target_user.is_some_and(|user| self.settings.system_user_id == Some(user.id)))
            && (self.is_staff() || is_group || target_user.is_some_and(|user| !user.suspended))
    }

    pub fn can_upload_for_category(&self) -> bool {
        self.is_staff() || self.actor.is_moderating()
    }

    // ── Privileged email visibility ───────────────────────────────────────────

    /// The per-instance escape hatch for privileged read contexts; off by
    /// default and never derived from actor state.
    pub fn can_see_emails(&self) -> bool {
        self.can_see_emails
    }

    pub fn set_can_see_emails(&mut self, allowed: bool) {
        self.can_see_emails = allowed;
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Ownership probe: owner-id match first, then owner-object identity.
    /// Always false for the anonymous actor.
    pub(crate) fn is_my_own(&self, target: &Target<'_>) -> bool {
        let Some(me) = self.actor.user() else {
            return false;
        };
        if let Some(owner) = target.owner_id() {
            return owner == me.id;
        }
        if let Target::User(user) = *target {
            return user.id == me.id;
        }
        false
    }

    pub(crate) fn is_me(&self, other: Option<&User>) -> bool {
        other.is_some_and(|other| self.actor.id() == Some(other.id))
    }

    pub(crate) fn is_not_me(&self, other: Option<&User>) -> bool {
        !self.is_me(other)
    }

    pub(crate) fn can_administer(&self, user: Option<&User>) -> bool {
        self.is_admin() && user.is_some()
    }

    /// `can_administer` plus the not-yourself guard.
    pub(crate) fn can_administer_user(&self, other: Option<&User>) -> bool {
        self.can_administer(other) && self.is_not_me(other)
    }
}
