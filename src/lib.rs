//! deployenv - Deployment environment stages with alias resolution.
//!
//! Maps free-form environment names such as `qa` or `pre-production` onto a
//! closed set of stages (`LOCAL`, `DEVELOPMENT`, `INTEGRATION`, `TEST`,
//! `STAGING`, `PRODUCTION`). Aliases can be registered at runtime; the
//! registry refuses any alias that would make a name ambiguous.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - The environment enum, alias rules, and registry
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output styling
//!
//! # Example
//!
//! ```
//! use deployenv::{register_alias, resolve, Environment};
//!
//! assert_eq!(resolve("qa").unwrap(), Environment::Test);
//! assert_eq!(resolve("PreProduction").unwrap(), Environment::Staging);
//!
//! assert!(register_alias(Environment::Production, "prod-lib-doc").unwrap());
//! assert_eq!(resolve("PROD-LIB-DOC").unwrap(), Environment::Production);
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod ui;

pub use environment::{
    global, matches, validate_alias_format, Alias, Environment, EnvironmentRegistry,
};
pub use error::{DeployEnvError, Result};

/// Resolve a name or alias using the process-wide registry.
///
/// # Errors
///
/// See [`EnvironmentRegistry::resolve`].
pub fn resolve<'a>(input: impl Into<Option<&'a str>>) -> Result<Environment> {
    global().resolve(input)
}

/// Register an alias in the process-wide registry.
///
/// # Errors
///
/// See [`EnvironmentRegistry::register_alias`].
pub fn register_alias<'a>(
    target: impl Into<Option<Environment>>,
    alias: impl Into<Option<&'a str>>,
) -> Result<bool> {
    global().register_alias(target, alias)
}
