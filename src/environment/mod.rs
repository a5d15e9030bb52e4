//! Deployment environments and their aliases.
//!
//! [`Environment`] is the closed set of deployment stages. Free-form names
//! are resolved to a stage in two steps:
//!
//! 1. Case-insensitive match against the canonical name (`production`)
//! 2. Alias match, scanning environments in declaration order (`live`)
//!
//! Aliases live in an [`EnvironmentRegistry`]; the process-wide one is
//! reached through [`global`].

pub mod alias;
pub mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

pub use alias::{matches, validate_alias_format, Alias, ALIAS_PATTERN};
pub use registry::{global, EnvironmentRegistry};

use crate::error::{DeployEnvError, Result};

/// A deployment environment stage.
///
/// Variants are ordered as declared; alias lookups scan in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    Local,
    Development,
    Integration,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Every environment, in declaration order.
    pub const ALL: [Environment; 6] = [
        Environment::Local,
        Environment::Development,
        Environment::Integration,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// The canonical name, e.g. `"PRODUCTION"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Development => "DEVELOPMENT",
            Self::Integration => "INTEGRATION",
            Self::Test => "TEST",
            Self::Staging => "STAGING",
            Self::Production => "PRODUCTION",
        }
    }

    /// Aliases every registry created with
    /// [`EnvironmentRegistry::with_defaults`] starts with.
    pub fn default_aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Local => &[],
            Self::Development => &["trunk"],
            Self::Integration => &[],
            Self::Test => &["qa", "internal-acceptance"],
            Self::Staging => &["stage", "pre-production", "external-client-acceptance"],
            Self::Production => &["live"],
        }
    }

    /// Look up an environment by canonical name, ignoring case.
    ///
    /// Aliases are not consulted.
    pub fn from_canonical_name(input: &str) -> Option<Self> {
        let upper = input.to_uppercase();
        Self::ALL.into_iter().find(|env| env.name() == upper)
    }

    /// Resolve a name or alias using the process-wide registry.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentRegistry::resolve`].
    pub fn resolve<'a>(input: impl Into<Option<&'a str>>) -> Result<Self> {
        global().resolve(input)
    }

    /// Register an alias for this environment in the process-wide registry.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentRegistry::register_alias`].
    pub fn register_alias<'a>(self, alias: impl Into<Option<&'a str>>) -> Result<bool> {
        global().register_alias(self, alias)
    }

    /// Current aliases of this environment in the process-wide registry.
    pub fn aliases(&self) -> Vec<String> {
        global().aliases(*self)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = DeployEnvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::resolve(name.as_str()).map_err(serde::de::Error::custom)
    }
}
