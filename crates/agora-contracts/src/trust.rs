//! Trust levels for ordinary (non-staff) users.
//!
//! Trust is an ordered five-tier ladder. Staff status is orthogonal: an
//! admin with `NewUser` trust is still staff everywhere staff matters.

use serde::{Deserialize, Serialize};

/// The ordered trust tier of a user, level 0 through 4.
///
/// Derived `Ord` follows declaration order, so `TrustLevel::Member <=
/// user.trust_level` is the "has at least member trust" comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// Level 0: a brand-new account.
    NewUser,
    /// Level 1: basic participation unlocked.
    Basic,
    /// Level 2: an established member.
    Member,
    /// Level 3: a regular.
    Regular,
    /// Level 4: a community leader.
    Leader,
}

impl TrustLevel {
    /// The lowest valid level.
    pub const MIN: TrustLevel = TrustLevel::NewUser;

    /// The highest valid level.
    pub const MAX: TrustLevel = TrustLevel::Leader;

    /// The numeric level, 0 through 4.
    pub fn index(self) -> i64 {
        match self {
            TrustLevel::NewUser => 0,
            TrustLevel::Basic => 1,
            TrustLevel::Member => 2,
            TrustLevel::Regular => 3,
            TrustLevel::Leader => 4,
        }
    }

    /// Parse a raw numeric level. Returns `None` outside the valid range,
    /// which callers treat as an invalid-parameters condition.
    pub fn from_index(index: i64) -> Option<TrustLevel> {
        match index {
            0 => Some(TrustLevel::NewUser),
            1 => Some(TrustLevel::Basic),
            2 => Some(TrustLevel::Member),
            3 => Some(TrustLevel::Regular),
            4 => Some(TrustLevel::Leader),
            _ => None,
        }
    }
}
