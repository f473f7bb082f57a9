//! Route guards.
//!
//! A guard turns the current [`SessionState`] into a navigation decision. While
//! the session is still loading, protected routes show a placeholder instead
//! of redirecting, so a slow session restore never bounces a signed-in admin.

use serde::Serialize;

use crate::policy::can_access_admin_panel;
use crate::session::SessionState;
use crate::Role;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "guard", rename_all = "snake_case")]
pub enum RouteGuard {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in account.
    Private,
    /// Only visitors without a session (login, registration); signed-in
    /// accounts are sent to `redirect_to`.
    GuestOnly { redirect_to: &'static str },
    /// `super_admin`, `admin` and `support`.
    AdminPanel,
    /// Tour operators only.
    Operator,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum GuardDecision {
    Render,
    Loading,
    Redirect(&'static str),
}

impl RouteGuard {
    pub fn evaluate(&self, state: &SessionState) -> GuardDecision {
        let decision = match self {
            RouteGuard::Public => GuardDecision::Render,
            RouteGuard::GuestOnly { redirect_to } => match state {
                SessionState::Authenticated(_) => GuardDecision::Redirect(*redirect_to),
                _ => GuardDecision::Render,
            },
            RouteGuard::Private => protected(state, LOGIN_PATH, |_| true),
            RouteGuard::AdminPanel => protected(state, HOME_PATH, can_access_admin_panel),
            RouteGuard::Operator => {
                protected(state, HOME_PATH, |role| role == Some(Role::Operator))
            }
        };

        if let GuardDecision::Redirect(to) = decision {
            tracing::debug!(guard = ?self, role = ?state.role(), to, "route guard redirect");
        }
        decision
    }
}

fn protected(
    state: &SessionState,
    fallback: &'static str,
    admit: impl Fn(Option<Role>) -> bool,
) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Loading,
        SessionState::Anonymous => GuardDecision::Redirect(fallback),
        SessionState::Authenticated(session) => {
            if admit(session.role) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(fallback)
            }
        }
    }
}
