//! Configuration registry: the fixed mapping from profile name to settings.
//!
//! The registry is built once, at process start, by reading the environment
//! through an [`EnvSource`]. It is immutable afterwards; every lookup is a
//! pure read against state established at load.

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::profile::SettingsProfile;
use crate::source::{EnvSource, ProcessEnv};

/// The fixed mapping from profile name to [`SettingsProfile`].
///
/// Exactly one profile exists per registered environment, and the key set
/// is fixed at compile time — there is no dynamic registration. Once
/// [`ConfigRegistry::load`] returns, the registry is read-only; shared
/// references can be handed to any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRegistry {
    development: SettingsProfile,
    production: SettingsProfile,
}

impl ConfigRegistry {
    /// Registered profile names, in registry order
    pub const NAMES: [&'static str; 2] = ["development", "production"];

    /// Build the registry by reading the environment through `source`.
    ///
    /// Each profile reads `JWT_SECRET_KEY` and `SQLALCHEMY_DATABASE_URI`
    /// and stores the values verbatim. A missing variable is stored as
    /// `None`; this function cannot fail.
    pub fn load(source: &impl EnvSource) -> Self {
        let development = SettingsProfile::for_environment(Environment::Development, source);
        let production = SettingsProfile::for_environment(Environment::Production, source);

        // Log presence only, never the secret values
        tracing::debug!(
            jwt_secret_configured = %(development.jwt_secret_key.is_some()),
            database_uri_configured = %(development.database_uri.is_some()),
            "Configuration profiles loaded"
        );

        Self {
            development,
            production,
        }
    }

    /// Build the registry from the real process environment.
    ///
    /// Loads a `.env` file first when one is present, then reads the
    /// process environment.
    pub fn from_process_env() -> Self {
        dotenvy::dotenv().ok();
        Self::load(&ProcessEnv)
    }

    /// Look up a profile by registry key.
    ///
    /// `name` must be exactly `"development"` or `"production"`; keys are
    /// case-sensitive. Repeated calls return the same attribute values for
    /// the lifetime of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] for any other name.
    pub fn get_profile(&self, name: &str) -> Result<&SettingsProfile, ConfigError> {
        let environment: Environment = name.parse()?;
        Ok(self.profile(environment))
    }

    /// Look up a profile by typed environment. Infallible.
    pub fn profile(&self, environment: Environment) -> &SettingsProfile {
        match environment {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }

    /// Iterate over `(name, profile)` pairs in registry order.
    pub fn profiles(&self) -> impl Iterator<Item = (&'static str, &SettingsProfile)> + '_ {
        Environment::ALL
            .into_iter()
            .map(move |environment| (environment.as_str(), self.profile(environment)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticEnv;
    use proptest::prelude::*;
    use std::sync::Mutex;

    // Global mutex to ensure tests touching the process environment run
    // sequentially.
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in &self.vars_to_restore {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    fn populated_source() -> StaticEnv {
        StaticEnv::new()
            .with_var(SettingsProfile::JWT_SECRET_ENV, "abc123")
            .with_var(SettingsProfile::DATABASE_URI_ENV, "postgres://x")
    }

    #[test]
    fn test_get_profile_production_with_values() {
        let registry = ConfigRegistry::load(&populated_source());
        let profile = registry.get_profile("production").expect("Should resolve");

        assert!(!profile.debug);
        assert!(!profile.testing);
        assert_eq!(profile.jwt_secret_key.as_deref(), Some("abc123"));
        assert_eq!(profile.database_uri.as_deref(), Some("postgres://x"));
    }

    #[test]
    fn test_get_profile_development_with_empty_environment() {
        let registry = ConfigRegistry::load(&StaticEnv::new());
        let profile = registry.get_profile("development").expect("Should resolve");

        assert!(profile.debug);
        assert!(!profile.testing);
        assert_eq!(profile.jwt_secret_key, None);
        assert_eq!(profile.database_uri, None);
    }

    #[test]
    fn test_profiles_share_secret_values() {
        let registry = ConfigRegistry::load(&populated_source());
        let development = registry.get_profile("development").unwrap();
        let production = registry.get_profile("production").unwrap();

        assert_eq!(development.jwt_secret_key, production.jwt_secret_key);
        assert_eq!(development.database_uri, production.database_uri);
    }

    #[test]
    fn test_get_profile_is_idempotent() {
        let registry = ConfigRegistry::load(&populated_source());
        let first = registry.get_profile("development").unwrap().clone();
        let second = registry.get_profile("development").unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_profile_unknown_name() {
        let registry = ConfigRegistry::load(&StaticEnv::new());
        let err = registry.get_profile("staging").unwrap_err();
        match err {
            ConfigError::UnknownProfile { name, known } => {
                assert_eq!(name, "staging");
                assert_eq!(known, "development, production");
            }
            other => panic!("Expected UnknownProfile, got: {other:?}"),
        }
    }

    #[test]
    fn test_get_profile_keys_are_case_sensitive() {
        let registry = ConfigRegistry::load(&StaticEnv::new());
        assert!(registry.get_profile("DEVELOPMENT").is_err());
        assert!(registry.get_profile("Production").is_err());
    }

    #[test]
    fn test_get_profile_rejects_aliases() {
        let registry = ConfigRegistry::load(&StaticEnv::new());
        assert!(registry.get_profile("dev").is_err());
        assert!(registry.get_profile("prod").is_err());
    }

    #[test]
    fn test_get_profile_rejects_empty_name() {
        let registry = ConfigRegistry::load(&StaticEnv::new());
        assert!(registry.get_profile("").is_err());
    }

    #[test]
    fn test_typed_and_named_lookup_agree() {
        let registry = ConfigRegistry::load(&populated_source());
        for environment in Environment::ALL {
            assert_eq!(
                registry.get_profile(environment.as_str()).unwrap(),
                registry.profile(environment)
            );
        }
    }

    #[test]
    fn test_names_match_registered_environments() {
        assert_eq!(ConfigRegistry::NAMES, ["development", "production"]);

        let registry = ConfigRegistry::load(&StaticEnv::new());
        let names: Vec<&str> = registry.profiles().map(|(name, _)| name).collect();
        assert_eq!(names, ConfigRegistry::NAMES);
    }

    #[test]
    fn test_from_process_env_reads_real_environment() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.set(SettingsProfile::JWT_SECRET_ENV, "process-secret");
        env.set(SettingsProfile::DATABASE_URI_ENV, "postgres://proc/db");

        let registry = ConfigRegistry::from_process_env();
        let profile = registry.get_profile("production").unwrap();

        assert_eq!(profile.jwt_secret_key.as_deref(), Some("process-secret"));
        assert_eq!(profile.database_uri.as_deref(), Some("postgres://proc/db"));
    }

    #[test]
    fn test_from_process_env_missing_variables_are_none() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.remove(SettingsProfile::JWT_SECRET_ENV);
        env.remove(SettingsProfile::DATABASE_URI_ENV);

        let registry = ConfigRegistry::from_process_env();
        let profile = registry.get_profile("development").unwrap();

        assert_eq!(profile.jwt_secret_key, None);
        assert_eq!(profile.database_uri, None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any name outside the registered key set fails to resolve.
        #[test]
        fn prop_unknown_names_fail(name in "[a-zA-Z0-9_-]{0,16}") {
            prop_assume!(name != "development" && name != "production");

            let registry = ConfigRegistry::load(&StaticEnv::new());
            prop_assert!(registry.get_profile(&name).is_err());
        }
    }
}
