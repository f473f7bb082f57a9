//! Application route table: which guard protects which path.

use crate::guard::RouteGuard;
use crate::navigation::ADMIN_MENU;
use crate::Permission;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

const TOURS_PATH: &str = "/tours";
const OPERATOR_DASHBOARD_PATH: &str = "/operator/dashboard";
const SUPPORT_TICKETS_PATH: &str = "/support/tickets";

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether `path` is `prefix` followed by exactly one non-empty segment
/// (a `:id` route parameter).
fn has_single_param(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|id| !id.is_empty() && !id.contains('/'))
}

/// Guard for `path`. Unknown paths are public (they render the not-found page).
pub fn guard_for(path: &str) -> RouteGuard {
    let path = normalize(path);
    match path {
        "/login" | "/register" | "/forgot-password" => RouteGuard::GuestOnly {
            redirect_to: TOURS_PATH,
        },
        "/operator/register" => RouteGuard::GuestOnly {
            redirect_to: OPERATOR_DASHBOARD_PATH,
        },
        OPERATOR_DASHBOARD_PATH | "/operator/create" => RouteGuard::Operator,
        p if has_single_param(p, "/operator/edit") => RouteGuard::Operator,
        SUPPORT_TICKETS_PATH => RouteGuard::Private,
        p if has_single_param(p, SUPPORT_TICKETS_PATH) => RouteGuard::Private,
        ADMIN_LOGIN_PATH => RouteGuard::Public,
        p if is_under(p, "/admin") => RouteGuard::AdminPanel,
        _ => RouteGuard::Public,
    }
}

/// Whether `path` renders inside the admin shell (sidebar, no public navbar).
pub fn is_admin_shell(path: &str) -> bool {
    let path = normalize(path);
    is_under(path, "/admin") && path != ADMIN_LOGIN_PATH
}

/// Permission declared by the sidebar entry for an admin page, if any.
///
/// Sub-pages inherit their section's permission (`/admin/tickets/42` needs
/// `tickets`).
pub fn required_permission(path: &str) -> Option<Permission> {
    let path = normalize(path);
    ADMIN_MENU
        .iter()
        .filter(|item| !item.is_external())
        .find(|item| is_under(path, item.path))
        .and_then(|item| item.required_permission)
}
