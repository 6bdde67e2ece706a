//! User rules.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::Edit, TargetKind::User, can_edit_user);
}

/// Users edit themselves; staff edit anyone.
fn can_edit_user(guardian: &Guardian, target: &Target<'_>) -> bool {
    let Target::User(user) = *target else {
        return false;
    };
    guardian.is_me(Some(user)) || guardian.is_staff()
}
