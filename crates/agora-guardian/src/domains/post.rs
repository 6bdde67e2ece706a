//! Post rules.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::Edit, TargetKind::Post, can_edit_post);
    table.register(Action::Delete, TargetKind::Post, can_delete_post);
}

fn can_edit_post(guardian: &Guardian, target: &Target<'_>) -> bool {
    guardian.is_my_own(target) || guardian.is_staff()
}

fn can_delete_post(guardian: &Guardian, target: &Target<'_>) -> bool {
    guardian.is_staff() || guardian.is_my_own(target)
}
