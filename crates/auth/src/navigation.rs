//! Admin sidebar.

use serde::Serialize;

use crate::policy::has_permission;
use crate::{Permission, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    /// `None` means every admin-panel visitor sees the entry.
    pub required_permission: Option<Permission>,
}

impl MenuItem {
    const fn gated(path: &'static str, label: &'static str, permission: Permission) -> Self {
        Self {
            path,
            label,
            required_permission: Some(permission),
        }
    }

    /// Links leaving the admin shell open the public site in a new tab.
    pub fn is_external(&self) -> bool {
        !self.path.starts_with("/admin")
    }

    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        self.required_permission
            .is_none_or(|permission| has_permission(role, permission))
    }
}

pub const APPROVAL_PATH: &str = "/admin/approval";

pub const ADMIN_MENU: &[MenuItem] = &[
    MenuItem::gated("/admin/dashboard", "Dashboard", Permission::Dashboard),
    MenuItem::gated(APPROVAL_PATH, "Tour Approvals", Permission::Approval),
    MenuItem::gated("/admin/add-tour", "Add New Tour", Permission::ToursCreate),
    MenuItem::gated("/admin/users", "Users", Permission::Users),
    MenuItem::gated("/admin/verification", "Operator Verification", Permission::Verification),
    MenuItem::gated("/admin/reviews", "Reviews", Permission::Reviews),
    MenuItem::gated("/admin/tickets", "Support Tickets", Permission::Tickets),
    MenuItem::gated("/admin/notifications", "Notifications", Permission::Notifications),
    MenuItem::gated("/admin/reports", "Reports", Permission::Reports),
    MenuItem::gated("/admin/import", "CSV Import", Permission::Import),
    MenuItem::gated("/admin/audit", "Audit Log", Permission::Audit),
    MenuItem::gated("/admin/analytics", "Analytics", Permission::Analytics),
    MenuItem::gated("/admin/files", "File Management", Permission::Files),
    MenuItem::gated("/admin/settings", "Settings", Permission::Settings),
    MenuItem::gated("/admin/cms", "CMS", Permission::Cms),
    MenuItem {
        path: "/tours",
        label: "All Tours (Site)",
        required_permission: None,
    },
];

/// Menu entries `role` may see, in menu order.
pub fn visible_items(role: Option<Role>) -> Vec<&'static MenuItem> {
    ADMIN_MENU.iter().filter(|item| item.is_visible_to(role)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    #[serde(flatten)]
    pub item: &'static MenuItem,
    pub external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

/// Rendered sidebar for `role`, with the approval queue size as a badge.
pub fn sidebar(role: Option<Role>, pending_approvals: u32) -> Vec<SidebarEntry> {
    visible_items(role)
        .into_iter()
        .map(|item| SidebarEntry {
            item,
            external: item.is_external(),
            badge: (item.path == APPROVAL_PATH && pending_approvals > 0).then_some(pending_approvals),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(role: Option<Role>) -> Vec<&'static str> {
        visible_items(role).into_iter().map(|i| i.path).collect()
    }

    #[test]
    fn support_sees_reviews_tickets_and_site_link() {
        assert_eq!(
            paths(Some(Role::Support)),
            vec!["/admin/reviews", "/admin/tickets", "/tours"]
        );
    }

    #[test]
    fn admins_see_the_whole_menu() {
        assert_eq!(paths(Some(Role::Admin)).len(), ADMIN_MENU.len());
        assert_eq!(paths(Some(Role::SuperAdmin)).len(), ADMIN_MENU.len());
    }

    #[test]
    fn operator_only_sees_tour_creation() {
        assert_eq!(paths(Some(Role::Operator)), vec!["/admin/add-tour", "/tours"]);
    }

    #[test]
    fn absent_role_only_sees_ungated_link() {
        assert_eq!(paths(None), vec!["/tours"]);
    }

    #[test]
    fn approval_badge_only_when_queue_non_empty() {
        let entries = sidebar(Some(Role::Admin), 3);
        let approval = entries.iter().find(|e| e.item.path == APPROVAL_PATH).unwrap();
        assert_eq!(approval.badge, Some(3));
        assert!(entries.iter().filter(|e| e.item.path != APPROVAL_PATH).all(|e| e.badge.is_none()));

        let entries = sidebar(Some(Role::Admin), 0);
        assert!(entries.iter().all(|e| e.badge.is_none()));
    }

    #[test]
    fn site_link_is_external() {
        let entries = sidebar(Some(Role::Support), 0);
        let external: Vec<&str> = entries.iter().filter(|e| e.external).map(|e| e.item.path).collect();
        assert_eq!(external, vec!["/tours"]);
    }

    #[test]
    fn entry_serializes_flat() {
        let entries = sidebar(Some(Role::Support), 0);
        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": "/admin/tickets",
                "label": "Support Tickets",
                "required_permission": "tickets",
                "external": false,
            })
        );
    }
}
