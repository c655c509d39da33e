//! Shell configuration.
//!
//! The core reads no environment variables or files; the host decides where
//! the JSON comes from.

use std::time::Duration;

use ewaste_auth::{DEFAULT_SUBMIT_DELAY, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::AuthMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shell config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Simulated round-trip latency for accepted submissions.
    pub submit_delay_ms: u64,
    /// Role preselected on the authentication screen.
    pub default_role: Role,
    /// Form tab shown first on the authentication screen.
    pub default_auth_mode: AuthMode,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY.as_millis() as u64,
            default_role: Role::IndividualUser,
            default_auth_mode: AuthMode::Login,
        }
    }
}

impl ShellConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_product() {
        let config = ShellConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.default_role, Role::IndividualUser);
        assert_eq!(config.default_auth_mode, AuthMode::Login);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = ShellConfig::from_json_str(r#"{ "default_role": "recycler" }"#).unwrap();
        assert_eq!(config.default_role, Role::RecyclingCenter);
        assert_eq!(config.submit_delay_ms, 1500);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ShellConfig::from_json_str("{}").unwrap(), ShellConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ShellConfig::from_json_str(r#"{ "submit_delay_ms": "soon" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
