//! The site-wide configuration snapshot.
//!
//! Settings are refreshed out-of-band and injected at guardian
//! construction. Nothing in the authorization core reads ambient globals
//! or mutates this value.

use serde::{Deserialize, Serialize};

use crate::actor::UserId;

/// The deployment mode of the running process.
///
/// Development mode relaxes the developer check: any admin counts as a
/// developer without being on the allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    Production,
    Development,
}

/// Read-only snapshot of the site-wide toggles the guardian consults.
///
/// Every field has a default, so a settings TOML file only needs to name
/// what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site title, recorded in audit entries when changed.
    pub title: String,
    /// When true, unapproved users cannot access the forum.
    pub must_approve_users: bool,
    /// When true, accounts come from single sign-on and local invitation
    /// flows are disabled.
    pub enable_sso: bool,
    /// When false, local logins (and with them invitations) are off.
    pub enable_local_logins: bool,
    pub enable_private_messages: bool,
    pub enable_badges: bool,
    /// Username of the designated site-contact account, if any.
    pub site_contact_username: Option<String>,
    /// The system account, if the site designates one.
    pub system_user_id: Option<UserId>,
    pub deployment: DeploymentMode,
    /// Admin emails granted developer powers in production.
    pub developer_emails: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Agora".to_string(),
            must_approve_users: false,
            enable_sso: false,
            enable_local_logins: true,
            enable_private_messages: true,
            enable_badges: true,
            site_contact_username: None,
            system_user_id: None,
            deployment: DeploymentMode::Production,
            developer_emails: Vec::new(),
        }
    }
}

/// Every setting name the configuration system recognizes, in declaration
/// order. The audit sink validates site-setting changes against this list.
pub const KNOWN_SETTINGS: &[&str] = &[
    "title",
    "must_approve_users",
    "enable_sso",
    "enable_local_logins",
    "enable_private_messages",
    "enable_badges",
    "site_contact_username",
    "system_user_id",
    "deployment",
    "developer_emails",
];

impl SiteSettings {
    /// True if `name` is a setting the configuration system recognizes.
    pub fn is_known_setting(name: &str) -> bool {
        KNOWN_SETTINGS.contains(&name)
    }
}
