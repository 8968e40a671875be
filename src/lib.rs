//! Environment profile registry for web backends.
//!
//! This crate holds a fixed set of named configuration profiles, each an
//! immutable bundle of settings for one deployment environment, and exposes
//! lookup by profile name:
//!
//! - `development` — debug on, testing off
//! - `production` — debug off, testing off
//!
//! Secrets (`JWT_SECRET_KEY`, `SQLALCHEMY_DATABASE_URI`) are read at load
//! time through an injectable [`EnvSource`] and stored verbatim; a missing
//! variable resolves to `None`, never an error. Unknown profile names fail
//! fast with [`ConfigError::UnknownProfile`].
//!
//! # Example
//!
//! ```
//! use appconfig::{ConfigRegistry, StaticEnv};
//!
//! let source = StaticEnv::new()
//!     .with_var("JWT_SECRET_KEY", "super-secret")
//!     .with_var("SQLALCHEMY_DATABASE_URI", "postgres://localhost/app");
//!
//! let registry = ConfigRegistry::load(&source);
//! let profile = registry.get_profile("production")?;
//!
//! assert!(!profile.debug);
//! assert_eq!(profile.jwt_secret_key.as_deref(), Some("super-secret"));
//! # Ok::<(), appconfig::ConfigError>(())
//! ```
//!
//! Production code uses [`ConfigRegistry::from_process_env`], which loads a
//! `.env` file when one is present and then reads the real process
//! environment, and [`Environment::detect`] to pick the active profile from
//! `APP_ENV`.

pub mod environment;
pub mod error;
pub mod profile;
pub mod registry;
pub mod source;

// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use profile::SettingsProfile;
pub use registry::ConfigRegistry;
pub use source::{EnvSource, ProcessEnv, StaticEnv};
