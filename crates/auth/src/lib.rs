//! `tourmarket-auth` — role-based access control for the tour marketplace.
//!
//! The core is a static role → permission table with pure predicates on top
//! ([`policy`]). Everything else here consumes it: session resolution, route
//! guards, the admin sidebar and audit explanations. Nothing in this crate
//! performs IO; row-level security in the hosted data store is enforced
//! elsewhere.

pub mod authorize;
pub mod claims;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod permissions;
pub mod policy;
pub mod roles;
pub mod routes;
pub mod session;

pub use authorize::{
    authorize, explain_authorization, require_admin, require_any_role, require_operator,
    require_super_admin, AuthorizationExplanation, AuthzError, RbacRegistry,
};
pub use claims::{validate_claims, SessionClaims, TokenValidationError};
pub use error::AuthError;
pub use guard::{GuardDecision, RouteGuard};
pub use navigation::{sidebar, visible_items, MenuItem, SidebarEntry, ADMIN_MENU};
pub use permissions::Permission;
pub use policy::{
    can_access_admin_panel, get_permissions, has_permission, is_admin_role, lint_role_table,
    resolve_role, role_permissions, PermissionSet, PolicyError,
};
pub use roles::Role;
pub use session::{login_step, post_login_path, LoginStep, Session, SessionState};
