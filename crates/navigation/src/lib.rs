//! Role-scoped navigation: which tabs a role may see and which surface a
//! requested tab mounts.
//!
//! Pure and deterministic. Unknown tab identifiers never error; they
//! resolve to the role's default tab.

pub mod resolver;
pub mod state;
pub mod table;

pub use resolver::{Resolution, resolve};
pub use state::NavigationState;
pub use table::{DEFAULT_TAB, RoleNavigation, Surface, TabSpec, navigation_for};
