use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Access tier attached to an authenticated marketplace account.
///
/// Exactly one role is carried per session. The wire form is the snake_case
/// tag stored in the hosted user metadata (e.g. `"super_admin"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Support,
    Operator,
    User,
}

impl Role {
    /// Every role, from most to least privileged.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Support,
        Role::Operator,
        Role::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Support => "support",
            Role::Operator => "operator",
            Role::User => "user",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Platform owner with every capability, including tour deletion",
            Role::Admin => "Back-office administrator with full admin panel access",
            Role::Support => "Support staff limited to tickets and review moderation",
            Role::Operator => "Tour operator managing their own listings",
            Role::User => "Customer browsing, saving and reviewing tours",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| AuthError::UnknownRole(s.to_string()))
    }
}
