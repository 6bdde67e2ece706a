//! Group rules.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::See, TargetKind::Group, can_see_group);
}

fn can_see_group(guardian: &Guardian, target: &Target<'_>) -> bool {
    let Target::Group(group) = *target else {
        return false;
    };
    guardian.can_see_group(Some(group))
}
