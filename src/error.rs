//! Configuration error types

use thiserror::Error;

use crate::environment::Environment;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile name not present in the registry
    #[error("Unknown profile '{name}'. Registered profiles are: {known}")]
    UnknownProfile {
        /// The name that failed to resolve
        name: String,
        /// The registered profile names, comma-separated
        known: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVarError(String),
}

impl ConfigError {
    /// Create a new unknown-profile error listing the registered names
    pub fn unknown_profile<S: Into<String>>(name: S) -> Self {
        let known = Environment::ALL
            .iter()
            .map(|environment| environment.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        ConfigError::UnknownProfile {
            name: name.into(),
            known,
        }
    }

    /// Create a new environment variable error
    pub fn env_var<S: Into<String>>(message: S) -> Self {
        ConfigError::EnvVarError(message.into())
    }
}
