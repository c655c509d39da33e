//! Static role → tab lookup table.

use ewaste_auth::Role;
use serde::Serialize;

/// Identifier of the default tab shared by every role.
pub const DEFAULT_TAB: &str = "dashboard";

/// Presentation surface mounted for a tab.
///
/// Opaque to the shell beyond its identity; the rendering layer maps each
/// variant to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    UserDashboard,
    EWasteRegistration,
    CollectionCenters,
    PickupScheduler,
    Analytics,
    RecyclerDashboard,
    PickupManagement,
    ProcessingQueue,
    CustomerManagement,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::UserDashboard => "user_dashboard",
            Surface::EWasteRegistration => "e_waste_registration",
            Surface::CollectionCenters => "collection_centers",
            Surface::PickupScheduler => "pickup_scheduler",
            Surface::Analytics => "analytics",
            Surface::RecyclerDashboard => "recycler_dashboard",
            Surface::PickupManagement => "pickup_management",
            Surface::ProcessingQueue => "processing_queue",
            Surface::CustomerManagement => "customer_management",
        }
    }
}

impl core::fmt::Display for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub surface: Surface,
}

/// The ordered tab set of a role plus its navigation chrome.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleNavigation {
    pub role: Role,
    pub portal_label: &'static str,
    pub tabs: &'static [TabSpec],
    default_index: usize,
}

impl RoleNavigation {
    pub fn find(&self, id: &str) -> Option<&'static TabSpec> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn default_tab(&self) -> &'static TabSpec {
        &self.tabs[self.default_index]
    }

    pub fn tab_ids(&self) -> impl Iterator<Item = &'static str> {
        self.tabs.iter().map(|tab| tab.id)
    }
}

static INDIVIDUAL_TABS: [TabSpec; 5] = [
    TabSpec { id: DEFAULT_TAB, label: "Dashboard", surface: Surface::UserDashboard },
    TabSpec { id: "register", label: "Register E-Waste", surface: Surface::EWasteRegistration },
    TabSpec { id: "centers", label: "Collection Centers", surface: Surface::CollectionCenters },
    TabSpec { id: "schedule", label: "Schedule Pickup", surface: Surface::PickupScheduler },
    TabSpec { id: "analytics", label: "My Analytics", surface: Surface::Analytics },
];

static RECYCLER_TABS: [TabSpec; 5] = [
    TabSpec { id: DEFAULT_TAB, label: "Dashboard", surface: Surface::RecyclerDashboard },
    TabSpec { id: "pickups", label: "Manage Pickups", surface: Surface::PickupManagement },
    TabSpec { id: "processing", label: "Processing Queue", surface: Surface::ProcessingQueue },
    TabSpec { id: "customers", label: "Customer Management", surface: Surface::CustomerManagement },
    TabSpec { id: "analytics", label: "Business Analytics", surface: Surface::Analytics },
];

static INDIVIDUAL: RoleNavigation = RoleNavigation {
    role: Role::IndividualUser,
    portal_label: "User Portal",
    tabs: &INDIVIDUAL_TABS,
    default_index: 0,
};

static RECYCLER: RoleNavigation = RoleNavigation {
    role: Role::RecyclingCenter,
    portal_label: "Recycler Portal",
    tabs: &RECYCLER_TABS,
    default_index: 0,
};

pub fn navigation_for(role: Role) -> &'static RoleNavigation {
    match role {
        Role::IndividualUser => &INDIVIDUAL,
        Role::RecyclingCenter => &RECYCLER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_role_defaults_to_dashboard() {
        for role in Role::ALL {
            let nav = navigation_for(role);
            assert_eq!(nav.role, role);
            assert_eq!(nav.default_tab().id, DEFAULT_TAB);
        }
    }

    #[test]
    fn tab_sets_are_ordered_as_displayed() {
        let user: Vec<_> = navigation_for(Role::IndividualUser).tab_ids().collect();
        assert_eq!(user, ["dashboard", "register", "centers", "schedule", "analytics"]);

        let recycler: Vec<_> = navigation_for(Role::RecyclingCenter).tab_ids().collect();
        assert_eq!(recycler, ["dashboard", "pickups", "processing", "customers", "analytics"]);
    }

    #[test]
    fn tab_ids_are_unique_per_role() {
        for role in Role::ALL {
            let nav = navigation_for(role);
            let unique: HashSet<_> = nav.tab_ids().collect();
            assert_eq!(unique.len(), nav.tabs.len());
        }
    }

    #[test]
    fn dashboards_differ_by_role_but_analytics_is_shared() {
        let user = navigation_for(Role::IndividualUser);
        let recycler = navigation_for(Role::RecyclingCenter);
        assert_ne!(user.default_tab().surface, recycler.default_tab().surface);
        assert_eq!(
            user.find("analytics").map(|t| t.surface),
            recycler.find("analytics").map(|t| t.surface)
        );
    }

    #[test]
    fn surface_serializes_snake_case() {
        let json = serde_json::to_string(&Surface::PickupManagement).unwrap();
        assert_eq!(json, "\"pickup_management\"");
    }
}
