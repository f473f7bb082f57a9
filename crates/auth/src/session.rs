//! Session state as seen by access-control consumers.
//!
//! The auth provider restores sessions asynchronously, so a caller can be in a
//! loading window with no role yet. Guards treat that window explicitly; the
//! predicates in [`crate::policy`] simply see an absent role.

use serde::Serialize;

use tourmarket_core::UserId;

use crate::claims::SessionClaims;
use crate::policy::{can_access_admin_panel, resolve_role};
use crate::Role;

/// An authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    /// `None` when the stored tag is not a known role.
    pub role: Option<Role>,
}

impl Session {
    pub fn new(user_id: UserId, email: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Build a session from decoded claims.
    ///
    /// Accounts without role metadata are plain customers (`user`). A tag that
    /// is present but unrecognized resolves to no role at all.
    pub fn from_claims(claims: &SessionClaims) -> Self {
        let role = match claims.role.as_deref() {
            None => Some(Role::User),
            Some(raw) => resolve_role(Some(raw)),
        };

        Self {
            user_id: claims.sub,
            email: claims.email.clone(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Session restore is still in flight.
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(s) => Some(s),
            _ => None,
        }
    }

    /// Role of the current session; absent while loading or signed out.
    pub fn role(&self) -> Option<Role> {
        self.session().and_then(|s| s.role)
    }
}

/// What happens after a password check succeeds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStep {
    /// Session can be established immediately.
    Complete,
    /// The password session is discarded and an e-mail one-time code is sent.
    OtpRequired,
}

/// Second-factor policy: accounts that can change other people's data must
/// confirm an e-mail OTP.
pub fn login_step(role: Option<Role>) -> LoginStep {
    match role {
        Some(Role::SuperAdmin | Role::Admin | Role::Operator) => LoginStep::OtpRequired,
        _ => LoginStep::Complete,
    }
}

/// Landing page once sign-in completes.
pub fn post_login_path(role: Option<Role>) -> &'static str {
    if can_access_admin_panel(role) {
        "/admin/dashboard"
    } else if role == Some(Role::Operator) {
        "/operator/dashboard"
    } else {
        "/tours"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn claims_with_role(role: Option<&str>) -> SessionClaims {
        let now = Utc::now();
        SessionClaims {
            sub: UserId::new(),
            email: "zeynep@example.com".to_string(),
            role: role.map(str::to_string),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    #[test]
    fn missing_metadata_defaults_to_user() {
        let session = Session::from_claims(&claims_with_role(None));
        assert_eq!(session.role, Some(Role::User));
    }

    #[test]
    fn known_metadata_is_resolved() {
        let session = Session::from_claims(&claims_with_role(Some("support")));
        assert_eq!(session.role, Some(Role::Support));
    }

    #[test]
    fn unknown_metadata_fails_closed() {
        let session = Session::from_claims(&claims_with_role(Some("owner")));
        assert_eq!(session.role, None);
    }

    #[test]
    fn role_is_absent_outside_authenticated_state() {
        assert_eq!(SessionState::Loading.role(), None);
        assert_eq!(SessionState::Anonymous.role(), None);

        let state = SessionState::Authenticated(Session::new(
            UserId::new(),
            "ali@example.com",
            Some(Role::Operator),
        ));
        assert_eq!(state.role(), Some(Role::Operator));
        assert!(!state.is_loading());
    }

    #[test]
    fn default_state_is_loading() {
        assert!(SessionState::default().is_loading());
    }

    #[test]
    fn privileged_logins_need_otp() {
        assert_eq!(login_step(Some(Role::SuperAdmin)), LoginStep::OtpRequired);
        assert_eq!(login_step(Some(Role::Admin)), LoginStep::OtpRequired);
        assert_eq!(login_step(Some(Role::Operator)), LoginStep::OtpRequired);
        assert_eq!(login_step(Some(Role::Support)), LoginStep::Complete);
        assert_eq!(login_step(Some(Role::User)), LoginStep::Complete);
        assert_eq!(login_step(None), LoginStep::Complete);
    }

    #[test]
    fn landing_page_follows_role() {
        for role in [Role::SuperAdmin, Role::Admin, Role::Support] {
            assert_eq!(post_login_path(Some(role)), "/admin/dashboard", "{role}");
        }
        assert_eq!(post_login_path(Some(Role::Operator)), "/operator/dashboard");
        assert_eq!(post_login_path(Some(Role::User)), "/tours");
        assert_eq!(post_login_path(None), "/tours");
    }
}
