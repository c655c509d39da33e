use ewaste_auth::Role;

use crate::table::{Surface, TabSpec, navigation_for};

/// Outcome of resolving a requested tab for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub role: Role,
    pub tab: &'static TabSpec,
    /// True when the requested id was not in the role's set.
    pub fell_back: bool,
}

impl Resolution {
    pub fn tab_id(&self) -> &'static str {
        self.tab.id
    }

    pub fn surface(&self) -> Surface {
        self.tab.surface
    }
}

/// Resolve `requested` against `role`'s tab set.
///
/// Members resolve to their own surface; anything else resolves to the
/// role's default tab.
pub fn resolve(role: Role, requested: &str) -> Resolution {
    let nav = navigation_for(role);
    match nav.find(requested) {
        Some(tab) => Resolution {
            role,
            tab,
            fell_back: false,
        },
        None => {
            let tab = nav.default_tab();
            tracing::debug!(
                %role,
                requested,
                fallback = tab.id,
                "tab not permitted for role; using default"
            );
            Resolution {
                role,
                tab,
                fell_back: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DEFAULT_TAB;

    #[test]
    fn members_resolve_to_their_own_surface() {
        for role in Role::ALL {
            for tab in navigation_for(role).tabs {
                let resolution = resolve(role, tab.id);
                assert_eq!(resolution.surface(), tab.surface);
                assert_eq!(resolution.tab_id(), tab.id);
                assert!(!resolution.fell_back);
            }
        }
    }

    #[test]
    fn other_roles_tabs_fall_back_to_default() {
        let resolution = resolve(Role::IndividualUser, "pickups");
        assert!(resolution.fell_back);
        assert_eq!(resolution.tab_id(), DEFAULT_TAB);
        assert_eq!(resolution.surface(), Surface::UserDashboard);

        let resolution = resolve(Role::RecyclingCenter, "register");
        assert!(resolution.fell_back);
        assert_eq!(resolution.surface(), Surface::RecyclerDashboard);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(resolve(Role::RecyclingCenter, "Pickups").fell_back);
        assert!(resolve(Role::RecyclingCenter, "").fell_back);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop_oneof![Just(Role::IndividualUser), Just(Role::RecyclingCenter)]
        }

        proptest! {
            /// Property: ids outside the role's set always resolve to the default.
            #[test]
            fn unknown_ids_resolve_to_default(role in any_role(), requested in ".{0,24}") {
                let nav = navigation_for(role);
                let resolution = resolve(role, &requested);
                if nav.contains(&requested) {
                    prop_assert_eq!(resolution.tab_id(), requested.as_str());
                    prop_assert!(!resolution.fell_back);
                } else {
                    prop_assert_eq!(resolution.tab, nav.default_tab());
                    prop_assert!(resolution.fell_back);
                }
            }

            /// Property: resolution is deterministic.
            #[test]
            fn resolution_is_deterministic(role in any_role(), requested in "[a-z]{0,12}") {
                prop_assert_eq!(resolve(role, &requested), resolve(role, &requested));
            }
        }
    }
}
