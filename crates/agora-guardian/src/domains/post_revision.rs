//! Post revision rules.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::See, TargetKind::PostRevision, can_see_post_revision);
}

/// Hidden revisions are a staff-only view.
fn can_see_post_revision(guardian: &Guardian, target: &Target<'_>) -> bool {
    let Target::PostRevision(revision) = *target else {
        return false;
    };
    !revision.hidden || guardian.is_staff()
}
