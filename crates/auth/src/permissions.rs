use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Capability tag gating one UI action or admin page.
///
/// The set is closed: permissions are opaque identifiers with no internal
/// structure beyond the optional `area.action` naming of the tour actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "dashboard")]
    Dashboard,
    #[serde(rename = "approval")]
    Approval,
    #[serde(rename = "tours.create")]
    ToursCreate,
    #[serde(rename = "tours.edit")]
    ToursEdit,
    #[serde(rename = "tours.delete")]
    ToursDelete,
    #[serde(rename = "tours.view")]
    ToursView,
    #[serde(rename = "reviews")]
    Reviews,
    #[serde(rename = "tickets")]
    Tickets,
    #[serde(rename = "import")]
    Import,
    #[serde(rename = "audit")]
    Audit,
    #[serde(rename = "analytics")]
    Analytics,
    #[serde(rename = "files")]
    Files,
    #[serde(rename = "users")]
    Users,
    #[serde(rename = "verification")]
    Verification,
    #[serde(rename = "notifications")]
    Notifications,
    #[serde(rename = "settings")]
    Settings,
    #[serde(rename = "cms")]
    Cms,
    #[serde(rename = "reports")]
    Reports,
    #[serde(rename = "history")]
    History,
    #[serde(rename = "feature_flags")]
    FeatureFlags,
    #[serde(rename = "own_tours")]
    OwnTours,
    #[serde(rename = "own_stats")]
    OwnStats,
    #[serde(rename = "license_upload")]
    LicenseUpload,
    #[serde(rename = "favorites")]
    Favorites,
    #[serde(rename = "user_reviews")]
    UserReviews,
}

impl Permission {
    pub const ALL: [Permission; 25] = [
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

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Dashboard => "dashboard",
            Permission::Approval => "approval",
            Permission::ToursCreate => "tours.create",
            Permission::ToursEdit => "tours.edit",
            Permission::ToursDelete => "tours.delete",
            Permission::ToursView => "tours.view",
            Permission::Reviews => "reviews",
            Permission::Tickets => "tickets",
            Permission::Import => "import",
            Permission::Audit => "audit",
            Permission::Analytics => "analytics",
            Permission::Files => "files",
            Permission::Users => "users",
            Permission::Verification => "verification",
            Permission::Notifications => "notifications",
            Permission::Settings => "settings",
            Permission::Cms => "cms",
            Permission::Reports => "reports",
            Permission::History => "history",
            Permission::FeatureFlags => "feature_flags",
            Permission::OwnTours => "own_tours",
            Permission::OwnStats => "own_stats",
            Permission::LicenseUpload => "license_upload",
            Permission::Favorites => "favorites",
            Permission::UserReviews => "user_reviews",
        }
    }

    /// Grouping used by the audit registry: the segment before the first `.`.
    pub fn category(&self) -> &'static str {
        let tag = self.as_str();
        tag.split_once('.').map_or(tag, |(area, _)| area)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Permission::Dashboard => "View the admin dashboard",
            Permission::Approval => "Approve or reject submitted tours",
            Permission::ToursCreate => "Create new tours",
            Permission::ToursEdit => "Edit existing tours",
            Permission::ToursDelete => "Delete tours",
            Permission::ToursView => "Browse published tours",
            Permission::Reviews => "Moderate customer reviews",
            Permission::Tickets => "Handle support tickets",
            Permission::Import => "Bulk-import tours from CSV",
            Permission::Audit => "Read the audit log",
            Permission::Analytics => "View marketplace analytics",
            Permission::Files => "Manage uploaded files",
            Permission::Users => "Manage user accounts",
            Permission::Verification => "Verify operator licenses",
            Permission::Notifications => "Send and manage notifications",
            Permission::Settings => "Change platform settings",
            Permission::Cms => "Edit CMS content",
            Permission::Reports => "Handle content reports",
            Permission::History => "Browse change history",
            Permission::FeatureFlags => "Toggle feature flags",
            Permission::OwnTours => "Manage the operator's own tours",
            Permission::OwnStats => "View the operator's own statistics",
            Permission::LicenseUpload => "Upload operator license documents",
            Permission::Favorites => "Keep a favorites list",
            Permission::UserReviews => "Write tour reviews",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AuthError::UnknownPermission(s.to_string()))
    }
}
