use ewaste_auth::Role;

use crate::resolver::{Resolution, resolve};
use crate::table::{RoleNavigation, Surface, TabSpec, navigation_for};

/// Navigation of an active session.
///
/// `active` is always a member of `role`'s tab set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    role: Role,
    active: &'static TabSpec,
    menu_open: bool,
}

impl NavigationState {
    /// Start on the role's default tab with the menu closed.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            active: navigation_for(role).default_tab(),
            menu_open: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn navigation(&self) -> &'static RoleNavigation {
        navigation_for(self.role)
    }

    pub fn active_tab_id(&self) -> &'static str {
        self.active.id
    }

    pub fn active_tab(&self) -> &'static TabSpec {
        self.active
    }

    pub fn surface(&self) -> Surface {
        self.active.surface
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active.id == tab_id
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Resolve and store a requested tab. Any tab request closes the menu.
    pub fn request_tab(&mut self, requested: &str) -> Resolution {
        let resolution = resolve(self.role, requested);
        self.active = resolution.tab;
        self.menu_open = false;
        resolution
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard_with_menu_closed() {
        let nav = NavigationState::new(Role::RecyclingCenter);
        assert_eq!(nav.active_tab_id(), "dashboard");
        assert_eq!(nav.surface(), Surface::RecyclerDashboard);
        assert!(!nav.menu_open());
    }

    #[test]
    fn request_tab_stores_resolved_id() {
        let mut nav = NavigationState::new(Role::RecyclingCenter);

        nav.request_tab("pickups");
        assert_eq!(nav.active_tab_id(), "pickups");
        assert_eq!(nav.surface(), Surface::PickupManagement);

        let resolution = nav.request_tab("bogus");
        assert!(resolution.fell_back);
        assert_eq!(nav.active_tab_id(), "dashboard");
    }

    #[test]
    fn tab_request_closes_menu() {
        let mut nav = NavigationState::new(Role::IndividualUser);
        nav.toggle_menu();
        assert!(nav.menu_open());

        nav.request_tab("schedule");
        assert!(!nav.menu_open());
        assert!(nav.is_active("schedule"));
    }
}
