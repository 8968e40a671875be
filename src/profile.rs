//! Settings profiles.
//!
//! A profile is the immutable bundle of configuration values for one
//! deployment environment. Flag values are fixed per environment; secret
//! values come verbatim from the environment source at load time.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::source::EnvSource;

/// Configuration values for one deployment environment.
///
/// Built once, at registry load time, and never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsProfile {
    /// Whether verbose/diagnostic behavior is enabled
    pub debug: bool,

    /// Whether the process is running under a test harness
    pub testing: bool,

    /// Secret material for signing and verifying tokens.
    ///
    /// `None` when `JWT_SECRET_KEY` is unset.
    pub jwt_secret_key: Option<String>,

    /// Connection string for the persistence layer.
    ///
    /// `None` when `SQLALCHEMY_DATABASE_URI` is unset.
    pub database_uri: Option<String>,
}

impl SettingsProfile {
    /// Environment variable backing `jwt_secret_key`
    pub const JWT_SECRET_ENV: &'static str = "JWT_SECRET_KEY";

    /// Environment variable backing `database_uri`
    pub const DATABASE_URI_ENV: &'static str = "SQLALCHEMY_DATABASE_URI";

    /// Build the profile for `environment`, reading secrets from `source`.
    ///
    /// Secret values are stored verbatim: no parsing, no validation, no
    /// transformation. A missing variable is stored as `None`, never an
    /// error — downstream consumers decide at their own boundary whether
    /// absence is fatal.
    pub fn for_environment(environment: Environment, source: &impl EnvSource) -> Self {
        let (debug, testing) = match environment {
            Environment::Development => (true, false),
            Environment::Production => (false, false),
        };

        Self {
            debug,
            testing,
            jwt_secret_key: source.var(Self::JWT_SECRET_ENV),
            database_uri: source.var(Self::DATABASE_URI_ENV),
        }
    }
}

impl std::fmt::Debug for SettingsProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProfile")
            .field("debug", &self.debug)
            .field("testing", &self.testing)
            .field(
                "jwt_secret_key",
                &self.jwt_secret_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "database_uri",
                &self.database_uri.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
