//! Alias registry.
//!
//! [`EnvironmentRegistry`] owns the alias set of every [`Environment`] and
//! is the only place those sets change. Registration checks the candidate
//! against every other environment under a single lock, so no alias can ever
//! resolve to two environments.
//!
//! Most callers use the process-wide registry through [`global`] or the
//! free functions re-exported at the crate root.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{LazyLock, Mutex, MutexGuard};

use tracing::{debug, trace};

use super::alias::{matches, validate_alias_format};
use super::Environment;
use crate::error::{DeployEnvError, Result};

static GLOBAL: LazyLock<EnvironmentRegistry> = LazyLock::new(EnvironmentRegistry::with_defaults);

/// The process-wide registry, seeded with [`Environment::default_aliases`].
pub fn global() -> &'static EnvironmentRegistry {
    &GLOBAL
}

/// Table of environments and the aliases they own.
///
/// # Example
///
/// ```
/// use deployenv::{Environment, EnvironmentRegistry};
///
/// let registry = EnvironmentRegistry::with_defaults();
/// assert_eq!(registry.resolve("qa").unwrap(), Environment::Test);
///
/// assert!(registry.register_alias(Environment::Production, "prod").unwrap());
/// assert_eq!(registry.resolve("PROD").unwrap(), Environment::Production);
/// assert!(registry.register_alias(Environment::Staging, "prod").is_err());
/// ```
#[derive(Debug)]
pub struct EnvironmentRegistry {
    aliases: Mutex<BTreeMap<Environment, BTreeSet<String>>>,
}

impl EnvironmentRegistry {
    /// Create a registry where no environment has any alias.
    pub fn new() -> Self {
        let table: BTreeMap<_, BTreeSet<String>> = Environment::ALL
            .iter()
            .map(|env| (*env, BTreeSet::new()))
            .collect();
        Self {
            aliases: Mutex::new(table),
        }
    }

    /// Create a registry seeded with each environment's default aliases.
    pub fn with_defaults() -> Self {
        let table: BTreeMap<_, BTreeSet<String>> = Environment::ALL
            .iter()
            .map(|env| {
                let defaults = env.default_aliases().iter().map(|a| a.to_string());
                (*env, defaults.collect())
            })
            .collect();
        Self {
            aliases: Mutex::new(table),
        }
    }

    /// Resolve a free-form name to an environment.
    ///
    /// Canonical names win over aliases. Otherwise environments are scanned
    /// in declaration order and the first owning a matching alias is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `NullInput` if `input` is `None`.
    /// Returns `NoMatch` if neither a canonical name nor an alias matches.
    pub fn resolve<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Environment> {
        let input = input
            .into()
            .ok_or(DeployEnvError::NullInput { argument: "input" })?;

        if let Some(env) = Environment::from_canonical_name(input) {
            trace!("'{}' is the canonical name of {}", input, env);
            return Ok(env);
        }

        let table = self.lock();
        for (env, aliases) in table.iter() {
            if let Some(alias) = aliases.iter().find(|alias| matches(alias, input)) {
                trace!("'{}' matched alias '{}' of {}", input, alias, env);
                return Ok(*env);
            }
        }

        Err(DeployEnvError::NoMatch {
            input: input.to_string(),
        })
    }

    /// Register `candidate` as an alias of `target`.
    ///
    /// Returns `true` if the alias was added, `false` if `target` already
    /// owned it.
    ///
    /// # Errors
    ///
    /// Returns `NullInput` if `target` or `candidate` is `None`.
    /// Returns `InvalidFormat` if `candidate` is not a well-formed alias.
    /// Returns `AliasConflict` if `candidate` matches the canonical name or
    /// an alias of another environment.
    pub fn register_alias<'a>(
        &self,
        target: impl Into<Option<Environment>>,
        candidate: impl Into<Option<&'a str>>,
    ) -> Result<bool> {
        let target = target
            .into()
            .ok_or(DeployEnvError::NullInput { argument: "target" })?;
        let alias = validate_alias_format(candidate)?;

        let mut table = self.lock();
        for (env, owned) in table.iter() {
            if *env == target {
                continue;
            }
            // The candidate is checked as a registered alias against the
            // other canonical names, so its hyphen-free spelling counts too.
            if matches(alias.as_str(), env.name())
                || owned.iter().any(|a| matches(a, alias.as_str()))
            {
                debug!("Rejected alias '{}' for {}: owned by {}", alias, target, env);
                return Err(DeployEnvError::AliasConflict {
                    alias: alias.into_inner(),
                    existing: *env,
                });
            }
        }

        let added = table
            .entry(target)
            .or_default()
            .insert(alias.as_str().to_string());
        if added {
            debug!("Registered alias '{}' for {}", alias, target);
        }
        Ok(added)
    }

    /// Snapshot of the aliases `env` currently owns, sorted.
    pub fn aliases(&self, env: Environment) -> Vec<String> {
        self.lock()
            .get(&env)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot of every environment with its aliases, in declaration order.
    pub fn snapshot(&self) -> Vec<(Environment, Vec<String>)> {
        self.lock()
            .iter()
            .map(|(env, set)| (*env, set.iter().cloned().collect()))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Environment, BTreeSet<String>>> {
        // Inserts are the final step of a registration, so a poisoned table
        // is still consistent.
        self.aliases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EnvironmentRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
