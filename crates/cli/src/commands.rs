use anyhow::{Context, Result};
use serde_json::{json, Value};

use tourmarket_auth::{
    explain_authorization, lint_role_table, login_step, post_login_path, resolve_role, routes,
    sidebar, RbacRegistry, Session, SessionState,
};
use tourmarket_core::UserId;

use crate::Command;

pub(crate) fn run(command: &Command) -> Result<Value> {
    match command {
        Command::Roles => {
            let registry = RbacRegistry::new();
            Ok(json!({ "roles": registry.roles }))
        }
        Command::Permissions => {
            let registry = RbacRegistry::new();
            Ok(json!({ "permissions": registry.permissions }))
        }
        Command::Check { role, permission } => {
            let role = resolve_role(role.as_deref());
            let explanation = explain_authorization(role, *permission);
            Ok(json!({
                "explanation": explanation,
                "login_step": login_step(role),
                "post_login_path": post_login_path(role),
            }))
        }
        Command::Sidebar { role, pending } => {
            let role = resolve_role(role.as_deref());
            Ok(json!({ "role": role, "entries": sidebar(role, *pending) }))
        }
        Command::Guard { path, role, loading } => {
            let state = session_state(role.as_deref(), *loading);
            let guard = routes::guard_for(path);
            Ok(json!({
                "path": path,
                "guard": guard,
                "admin_shell": routes::is_admin_shell(path),
                "required_permission": routes::required_permission(path),
                "result": guard.evaluate(&state),
            }))
        }
        Command::Lint => {
            lint_role_table().context("role table lint failed")?;
            tracing::info!("role table is consistent");
            Ok(json!({ "ok": true }))
        }
    }
}

fn session_state(role: Option<&str>, loading: bool) -> SessionState {
    if loading {
        return SessionState::Loading;
    }
    match role {
        None => SessionState::Anonymous,
        Some(tag) => SessionState::Authenticated(Session::new(
            UserId::new(),
            "rbac-cli@localhost",
            resolve_role(Some(tag)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use tourmarket_auth::Permission;

    use super::*;

    #[test]
    fn roles_lists_all_five() {
        let out = run(&Command::Roles).unwrap();
        assert_eq!(out["roles"].as_array().unwrap().len(), 5);
        assert_eq!(out["roles"][0]["name"], "super_admin");
    }

    #[test]
    fn check_explains_denial() {
        let out = run(&Command::Check {
            role: Some("support".to_string()),
            permission: Permission::Settings,
        })
        .unwrap();
        assert_eq!(out["explanation"]["granted"], false);
        assert_eq!(out["explanation"]["denial_reason"]["kind"], "missing_permission");
        assert_eq!(out["login_step"], "complete");
        assert_eq!(out["post_login_path"], "/admin/dashboard");
    }

    #[test]
    fn check_with_unknown_role_fails_closed() {
        let out = run(&Command::Check {
            role: Some("root".to_string()),
            permission: Permission::ToursView,
        })
        .unwrap();
        assert_eq!(out["explanation"]["granted"], false);
        assert_eq!(out["explanation"]["role"]["role"], Value::Null);
        assert_eq!(out["post_login_path"], "/tours");
    }

    #[test]
    fn sidebar_for_support() {
        let out = run(&Command::Sidebar {
            role: Some("support".to_string()),
            pending: 2,
        })
        .unwrap();
        let paths: Vec<&str> = out["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["/admin/reviews", "/admin/tickets", "/tours"]);
    }

    #[test]
    fn guard_redirects_operator_from_admin() {
        let out = run(&Command::Guard {
            path: "/admin/settings".to_string(),
            role: Some("operator".to_string()),
            loading: false,
        })
        .unwrap();
        assert_eq!(out["guard"]["guard"], "admin_panel");
        assert_eq!(out["result"], json!({ "decision": "redirect", "to": "/" }));
        assert_eq!(out["required_permission"], "settings");
        assert_eq!(out["admin_shell"], true);
    }

    #[test]
    fn guard_while_loading() {
        let out = run(&Command::Guard {
            path: "/operator/create".to_string(),
            role: None,
            loading: true,
        })
        .unwrap();
        assert_eq!(out["result"], json!({ "decision": "loading" }));
    }

    #[test]
    fn lint_passes_on_shipped_table() {
        assert_eq!(run(&Command::Lint).unwrap(), json!({ "ok": true }));
    }
}
