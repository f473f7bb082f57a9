//! Role → permission table and the predicates layered on it.
//!
//! Every role lists its permissions explicitly; there is no inheritance.
//! `super_admin` repeats the `admin` row (plus extras) by hand, so a permission
//! added to one row must be added to the other. [`lint_role_table`] reports
//! drift between the two instead of deriving one from the other.
//!
//! All functions here are pure: no IO, no panics, no interior state.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{Permission, Role};

/// Set of permissions granted to a role (ordered for stable output).
pub type PermissionSet = BTreeSet<Permission>;

const SUPER_ADMIN: &[Permission] = &[
    Permission::Dashboard,
    Permission::Approval,
    Permission::ToursCreate,
    Permission::ToursEdit,
    Permission::ToursDelete,
    Permission::ToursView,
    Permission::Reviews,
    Permission::Tickets,
    Permission::Import,
    Permission::Audit,
    Permission::Analytics,
    Permission::Files,
    Permission::Users,
    Permission::Verification,
    Permission::Notifications,
    Permission::Settings,
    Permission::Cms,
    Permission::Reports,
    Permission::History,
    Permission::FeatureFlags,
    Permission::OwnTours,
    Permission::OwnStats,
    Permission::LicenseUpload,
    Permission::Favorites,
    Permission::UserReviews,
];

const ADMIN: &[Permission] = &[
    Permission::Dashboard,
    Permission::Approval,
    Permission::ToursCreate,
    Permission::ToursEdit,
    Permission::ToursView,
    Permission::Reviews,
    Permission::Tickets,
    Permission::Import,
    Permission::Audit,
    Permission::Analytics,
    Permission::Files,
    Permission::Users,
    Permission::Verification,
    Permission::Notifications,
    Permission::Settings,
    Permission::Cms,
    Permission::Reports,
    Permission::History,
    Permission::FeatureFlags,
];

const SUPPORT: &[Permission] = &[Permission::Tickets, Permission::Reviews];

const OPERATOR: &[Permission] = &[
    Permission::OwnTours,
    Permission::OwnStats,
    Permission::LicenseUpload,
    Permission::ToursCreate,
    Permission::ToursEdit,
];

const USER: &[Permission] = &[
    Permission::ToursView,
    Permission::Favorites,
    Permission::UserReviews,
];

/// The explicit table row for `role`.
pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Admin => ADMIN,
        Role::Support => SUPPORT,
        Role::Operator => OPERATOR,
        Role::User => USER,
    }
}

/// Whether `role` is granted `permission`. An absent role has no permissions.
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    match role {
        Some(role) => role_permissions(role).contains(&permission),
        None => false,
    }
}

/// Full administrators (`super_admin`, `admin`), as opposed to support staff.
pub fn is_admin_role(role: Option<Role>) -> bool {
    matches!(role, Some(Role::SuperAdmin | Role::Admin))
}

/// Roles allowed into the admin shell.
///
/// Broader than [`is_admin_role`]: support staff enter the panel but only see
/// the sidebar entries their permissions allow.
pub fn can_access_admin_panel(role: Option<Role>) -> bool {
    matches!(role, Some(Role::SuperAdmin | Role::Admin | Role::Support))
}

/// Every permission `role` holds; empty for an absent role.
pub fn get_permissions(role: Option<Role>) -> PermissionSet {
    role.map(|r| role_permissions(r).iter().copied().collect())
        .unwrap_or_default()
}

/// Interpret an untrusted role tag (e.g. from session metadata).
///
/// Unknown tags resolve to `None`, which every predicate treats as "no
/// permissions".
pub fn resolve_role(raw: Option<&str>) -> Option<Role> {
    let raw = raw?;
    match raw.parse::<Role>() {
        Ok(role) => Some(role),
        Err(e) => {
            tracing::warn!(role = raw, error = %e, "unrecognized role tag; treating as unauthenticated");
            None
        }
    }
}

/// Consistency problems in the role table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("role '{0}' has no permissions")]
    EmptyRole(Role),

    #[error("role '{role}' lists '{permission}' more than once")]
    DuplicateEntry { role: Role, permission: Permission },

    #[error("super_admin is missing '{permission}' granted to '{role}'")]
    SuperAdminMissing { role: Role, permission: Permission },
}

/// Check the hand-maintained table for drift.
///
/// Returns the first problem found, scanning roles in [`Role::ALL`] order.
pub fn lint_role_table() -> Result<(), PolicyError> {
    for role in Role::ALL {
        let row = role_permissions(role);
        if row.is_empty() {
            return Err(PolicyError::EmptyRole(role));
        }

        let mut seen = PermissionSet::new();
        for &permission in row {
            if !seen.insert(permission) {
                return Err(PolicyError::DuplicateEntry { role, permission });
            }
        }
    }

    for role in Role::ALL.into_iter().filter(|r| *r != Role::SuperAdmin) {
        if let Some(&permission) = role_permissions(role)
            .iter()
            .find(|p| !SUPER_ADMIN.contains(*p))
        {
            tracing::error!(%role, %permission, "role table drift detected");
            return Err(PolicyError::SuperAdminMissing { role, permission });
        }
    }

    Ok(())
}
