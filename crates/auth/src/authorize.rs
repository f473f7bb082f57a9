use serde::Serialize;
use thiserror::Error;

use tourmarket_core::DomainError;

use crate::policy::{can_access_admin_panel, get_permissions, has_permission, is_admin_role, role_permissions};
use crate::{Permission, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),

    #[error("forbidden: role '{role}' is not one of {allowed:?}")]
    RoleNotAllowed { role: Role, allowed: Vec<Role> },
}

impl From<AuthzError> for DomainError {
    fn from(_: AuthzError) -> Self {
        DomainError::Unauthorized
    }
}

/// Result-returning form of [`has_permission`] for service-side callers.
///
/// - No IO
/// - No panics
pub fn authorize(role: Option<Role>, required: Permission) -> Result<(), AuthzError> {
    let Some(role) = role else {
        return Err(AuthzError::Unauthenticated);
    };

    if has_permission(Some(role), required) {
        Ok(())
    } else {
        tracing::info!(%role, permission = %required, "authorization denied");
        Err(AuthzError::Forbidden(required))
    }
}

/// Admit `role` if it is listed in `allowed`. `super_admin` is always admitted.
pub fn require_any_role(role: Option<Role>, allowed: &[Role]) -> Result<Role, AuthzError> {
    let role = role.ok_or(AuthzError::Unauthenticated)?;
    if role == Role::SuperAdmin || allowed.contains(&role) {
        return Ok(role);
    }

    tracing::info!(%role, ?allowed, "role requirement not met");
    Err(AuthzError::RoleNotAllowed {
        role,
        allowed: allowed.to_vec(),
    })
}

/// Full administrators only.
pub fn require_admin(role: Option<Role>) -> Result<Role, AuthzError> {
    require_any_role(role, &[Role::Admin])
}

pub fn require_super_admin(role: Option<Role>) -> Result<Role, AuthzError> {
    require_any_role(role, &[])
}

/// Operators, plus administrators acting on their behalf.
pub fn require_operator(role: Option<Role>) -> Result<Role, AuthzError> {
    require_any_role(role, &[Role::Operator, Role::Admin])
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
///
/// Answers "why can (or can't) this account see that page?" for support and
/// audit tooling.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    /// The permission that was being checked.
    pub required_permission: Permission,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    pub role: RoleState,

    /// If denied, this explains what was missing.
    pub denial_reason: Option<DenialReason>,
}

/// Access-relevant facts about the role being checked.
#[derive(Debug, Clone, Serialize)]
pub struct RoleState {
    pub role: Option<Role>,
    pub is_admin_role: bool,
    pub can_access_admin_panel: bool,
    pub effective_permissions: Vec<Permission>,
}

impl RoleState {
    fn of(role: Option<Role>) -> Self {
        Self {
            role,
            is_admin_role: is_admin_role(role),
            can_access_admin_panel: can_access_admin_panel(role),
            effective_permissions: get_permissions(role).into_iter().collect(),
        }
    }
}

/// Detailed reason why authorization was denied.
#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    Unauthenticated,
    MissingPermission,
}

/// Roles whose table row contains `permission`.
pub fn roles_granting(permission: Permission) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|r| role_permissions(*r).contains(&permission))
        .collect()
}

/// Explain why an authorization decision was made (or would be made).
pub fn explain_authorization(role: Option<Role>, required: Permission) -> AuthorizationExplanation {
    let state = RoleState::of(role);

    let Some(current) = role else {
        return AuthorizationExplanation {
            required_permission: required,
            granted: false,
            reason: "No role: the session is missing, still loading, or carries an unknown role tag"
                .to_string(),
            role: state,
            denial_reason: Some(DenialReason {
                kind: DenialKind::Unauthenticated,
                message: "Absent roles are granted nothing".to_string(),
                suggestions: vec![
                    "Sign in before requesting this page".to_string(),
                    "Check that the account's role metadata is one of the known role tags".to_string(),
                ],
            }),
        };
    };

    if has_permission(role, required) {
        return AuthorizationExplanation {
            required_permission: required,
            granted: true,
            reason: format!("Role '{}' lists permission '{}'", current, required),
            role: state,
            denial_reason: None,
        };
    }

    let granting = roles_granting(required);
    let mut suggestions = Vec::new();
    if !granting.is_empty() {
        let names: Vec<&str> = granting.iter().map(|r| r.as_str()).collect();
        suggestions.push(format!(
            "Assign one of the roles that grant '{}': {}",
            required,
            names.join(", ")
        ));
    }
    if can_access_admin_panel(role) && !is_admin_role(role) {
        suggestions.push(
            "Support staff reach the admin panel with a reduced sidebar; escalate to an admin".to_string(),
        );
    }

    AuthorizationExplanation {
        required_permission: required,
        granted: false,
        reason: format!(
            "Role '{}' does not list permission '{}'. Current permissions: {:?}",
            current,
            required,
            state
                .effective_permissions
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
        ),
        role: state,
        denial_reason: Some(DenialReason {
            kind: DenialKind::MissingPermission,
            message: format!("Missing required permission: '{}'", required),
            suggestions,
        }),
    }
}

/// Role definition with its granted permissions (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub name: Role,
    pub description: &'static str,
    pub is_admin_role: bool,
    pub can_access_admin_panel: bool,
    pub permissions: Vec<Permission>,
}

/// Permission definition (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct PermissionDefinition {
    pub name: Permission,
    pub description: &'static str,
    pub category: &'static str,
    pub granted_to: Vec<Role>,
}

/// Complete view of the RBAC table for auditing.
#[derive(Debug, Clone, Serialize)]
pub struct RbacRegistry {
    pub roles: Vec<RoleDefinition>,
    pub permissions: Vec<PermissionDefinition>,
}

impl RbacRegistry {
    pub fn new() -> Self {
        let roles = Role::ALL
            .into_iter()
            .map(|role| RoleDefinition {
                name: role,
                description: role.description(),
                is_admin_role: is_admin_role(Some(role)),
                can_access_admin_panel: can_access_admin_panel(Some(role)),
                permissions: role_permissions(role).to_vec(),
            })
            .collect();

        let permissions = Permission::ALL
            .into_iter()
            .map(|permission| PermissionDefinition {
                name: permission,
                description: permission.description(),
                category: permission.category(),
                granted_to: roles_granting(permission),
            })
            .collect();

        Self { roles, permissions }
    }

    pub fn role(&self, role: Role) -> Option<&RoleDefinition> {
        self.roles.iter().find(|r| r.name == role)
    }

    pub fn permission(&self, permission: Permission) -> Option<&PermissionDefinition> {
        self.permissions.iter().find(|p| p.name == permission)
    }
}

impl Default for RbacRegistry {
    fn default() -> Self {
        Self::new()
    }
}
