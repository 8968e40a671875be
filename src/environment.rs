//! Deployment environments known to the registry

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::{EnvSource, ProcessEnv};

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    Development,
    /// Production environment
    Production,
}

impl Environment {
    /// Environment variable consulted by [`Environment::detect`]
    pub const ENV_VAR: &'static str = "APP_ENV";

    /// All registered environments, in registry order
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    /// Determine the environment from `source`.
    ///
    /// An unset selector variable defaults to `Development`. A selector
    /// that is set but holds an unrecognized value is an error, not a
    /// silent fallback.
    pub fn detect(source: &impl EnvSource) -> Result<Self, ConfigError> {
        match source.var(Self::ENV_VAR) {
            None => Ok(Environment::default()),
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::env_var(format!(
                    "{} is set to '{}'. Valid values are: development, production",
                    Self::ENV_VAR,
                    raw
                ))
            }),
        }
    }

    /// Determine the environment from the real process environment.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::detect(&ProcessEnv)
    }

    /// Convert the environment to its registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Whether this is the development environment
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Registry keys are case-sensitive: exactly `"development"` or
    /// `"production"` parse; anything else is an unknown profile.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::unknown_profile(s)),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
