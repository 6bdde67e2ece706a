//! Topic rules, including post creation inside a topic.

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;
use crate::rules::{Action, RuleTable};

pub(crate) fn register(table: &mut RuleTable) {
    table.register(Action::See, TargetKind::Topic, can_see_topic);
    table.register(Action::Edit, TargetKind::Topic, can_edit_topic);
    table.register(Action::Delete, TargetKind::Topic, can_delete_topic);
    table.register_create(
        TargetKind::Post,
        Some(TargetKind::Topic),
        can_create_post_on_topic,
    );
}

/// A topic is as visible as its category; uncategorized topics are public.
fn can_see_topic(guardian: &Guardian, target: &Target<'_>) -> bool {
    let Target::Topic(topic) = *target else {
        return false;
    };
    match &topic.category {
        Some(category) => guardian.can_see(Some(&Target::Category(category))) == Some(true),
        None => true,
    }
}

fn can_edit_topic(guardian: &Guardian, target: &Target<'_>) -> bool {
    guardian.can_moderate(Some(target)) || guardian.is_my_own(target)
}

fn can_delete_topic(guardian: &Guardian, target: &Target<'_>) -> bool {
    guardian.is_staff() || guardian.can_moderate_target(target)
}

/// Closed topics accept new posts from staff only.
fn can_create_post_on_topic(guardian: &Guardian, parent: Option<&Target<'_>>) -> bool {
    match parent {
        Some(Target::Topic(topic)) => guardian.is_staff() || !topic.closed,
        _ => false,
    }
}
