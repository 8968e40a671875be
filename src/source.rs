//! Environment source abstraction.
//!
//! Every environment variable read in this crate goes through the
//! [`EnvSource`] trait, so tests can supply synthetic values instead of
//! mutating the real process environment.

use std::collections::HashMap;

/// Read-only access to environment variables.
///
/// Implementations answer lookups by exact variable name. A variable that
/// is unset, or whose value is not valid unicode, yields `None`.
pub trait EnvSource {
    /// Get the value of an environment variable.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment, for tests and embedding.
///
/// Lookups consult only the stored map; the process environment is never
/// touched.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty source where every lookup yields `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, returning the source for chaining.
    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
