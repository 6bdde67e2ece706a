//! Per-domain permission rules.
//!
//! Each module groups the rules for one target domain and registers them
//! into the shared lookup table at guardian construction. An (action,
//! kind) pair no module registers stays allowed; these rules only
//! restrict.

pub(crate) mod category;
pub(crate) mod group;
pub(crate) mod post;
pub(crate) mod post_revision;
pub(crate) mod topic;
pub(crate) mod user;

use crate::rules::RuleTable;

/// Register the standard rule set for every domain.
pub(crate) fn register_all(table: &mut RuleTable) {
    category::register(table);
    group::register(table);
    post::register(table);
    post_revision::register(table);
    topic::register(table);
    user::register(table);
}
