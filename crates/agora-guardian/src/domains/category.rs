//! Category rules.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::See, TargetKind::Category, can_see_category);
    table.register(Action::Edit, TargetKind::Category, can_edit_category);
}

/// Read-restricted categories are visible to staff and to the users who
/// moderate them; everything else is public.
fn can_see_category(guardian: &Guardian, target: &Target<'_>) -> bool {
    let Target::Category(category) = *target else {
        return false;
    };
    !category.read_restricted || guardian.is_staff() || guardian.actor().moderates(category.id)
}

fn can_edit_category(guardian: &Guardian, _target: &Target<'_>) -> bool {
    guardian.is_staff()
}
