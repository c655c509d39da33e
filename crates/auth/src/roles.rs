use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account kind chosen at authentication time.
///
/// Decides which navigation set and dashboards apply for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    #[serde(alias = "user")]
    IndividualUser,
    #[serde(alias = "recycler")]
    RecyclingCenter,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::IndividualUser, Role::RecyclingCenter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::IndividualUser => "individual_user",
            Role::RecyclingCenter => "recycling_center",
        }
    }

    /// Label shown on the role toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Role::IndividualUser => "Individual User",
            Role::RecyclingCenter => "Recycling Center",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual_user" | "user" => Ok(Role::IndividualUser),
            "recycling_center" | "recycler" => Ok(Role::RecyclingCenter),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_short_names() {
        assert_eq!("individual_user".parse::<Role>().unwrap(), Role::IndividualUser);
        assert_eq!("recycler".parse::<Role>().unwrap(), Role::RecyclingCenter);
        assert_eq!(
            "admin".parse::<Role>().unwrap_err(),
            UnknownRole("admin".to_string())
        );
    }

    #[test]
    fn serde_uses_snake_case_and_accepts_aliases() {
        let json = serde_json::to_string(&Role::RecyclingCenter).unwrap();
        assert_eq!(json, "\"recycling_center\"");

        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::IndividualUser);
    }

    #[test]
    fn default_role_is_individual_user() {
        assert_eq!(Role::default(), Role::IndividualUser);
    }
}
