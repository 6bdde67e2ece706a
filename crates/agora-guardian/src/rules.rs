//! The capability lookup table behind generic dispatch.
//!
//! Keys are (action, target kind, optional parent kind); values are plain
//! function pointers. A missing key is not an error: the guardian treats
//! it as allowed, so registered rules subtract permission from a
//! permissive base. That inversion is load-bearing; "no rule found" means
//! "nothing restricts this action".

use std::collections::HashMap;

use agora_contracts::target::{Target, TargetKind};

use crate::engine::Guardian;

/// The action classes generic dispatch distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    See,
    Edit,
    Delete,
    Create,
}

/// Lookup key: an action on a target kind, optionally scoped to the parent
/// kind the target is being created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub action: Action,
    pub target: TargetKind,
    pub parent: Option<TargetKind>,
}

/// A rule for see/edit/delete: the target exists and is borrowed.
pub type TargetRuleFn = fn(&Guardian, &Target<'_>) -> bool;

/// A rule for create: only the optional parent exists at decision time.
pub type CreateRuleFn = fn(&Guardian, Option<&Target<'_>>) -> bool;

#[derive(Debug, Clone, Copy)]
enum Rule {
    Target(TargetRuleFn),
    Create(CreateRuleFn),
}

/// The shared rule table a guardian consults for see/edit/delete/create.
///
/// Populated once at guardian construction by the per-domain modules in
/// `domains`; lookups afterwards are read-only.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: HashMap<RuleKey, Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a see/edit/delete rule for a target kind.
    ///
    /// Registering the same (action, kind) twice replaces the earlier rule.
    pub fn register(&mut self, action: Action, target: TargetKind, rule: TargetRuleFn) {
        self.rules.insert(
            RuleKey {
                action,
                target,
                parent: None,
            },
            Rule::Target(rule),
        );
    }

    /// Register a create rule, optionally scoped to a parent kind.
    pub fn register_create(
        &mut self,
        target: TargetKind,
        parent: Option<TargetKind>,
        rule: CreateRuleFn,
    ) {
        self.rules.insert(
            RuleKey {
                action: Action::Create,
                target,
                parent,
            },
            Rule::Create(rule),
        );
    }

    /// Look up the see/edit/delete rule for a target kind, if one exists.
    pub(crate) fn target_rule(&self, action: Action, target: TargetKind) -> Option<TargetRuleFn> {
        match self.rules.get(&RuleKey {
            action,
            target,
            parent: None,
        }) {
            Some(Rule::Target(rule)) => Some(*rule),
            _ => None,
        }
    }

    /// Look up the create rule for (kind, parent kind), if one exists.
    pub(crate) fn create_rule(
        &self,
        target: TargetKind,
        parent: Option<TargetKind>,
    ) -> Option<CreateRuleFn> {
        match self.rules.get(&RuleKey {
            action: Action::Create,
            target,
            parent,
        }) {
            Some(Rule::Create(rule)) => Some(*rule),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
