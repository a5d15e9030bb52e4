//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandContext`] carrying the registry, theme, and output sink
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::environment::EnvironmentRegistry;
use crate::error::{DeployEnvError, Result};
use crate::ui::Theme;

/// Everything a command needs while it runs.
pub struct CommandContext<'a> {
    /// Registry used for resolution and listing.
    pub registry: &'a EnvironmentRegistry,
    /// Styling for human-readable output.
    pub theme: &'a Theme,
    /// Where command output is written.
    pub out: &'a mut dyn Write,
}

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    registry: &'a EnvironmentRegistry,
    theme: Theme,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher over the given registry.
    pub fn new(registry: &'a EnvironmentRegistry, theme: Theme) -> Self {
        Self { registry, theme }
    }

    /// Register `ENV=ALIAS` pairs from the command line.
    ///
    /// `ENV` may be a canonical name or an alias already known to the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAliasSpec` for a pair without `=`, and any error
    /// from resolving `ENV` or registering `ALIAS`.
    pub fn register_aliases(&self, specs: &[String]) -> Result<()> {
        for spec in specs {
            let (env, alias) = spec
                .split_once('=')
                .ok_or_else(|| DeployEnvError::InvalidAliasSpec { spec: spec.clone() })?;
            let target = self.registry.resolve(env)?;
            let added = self.registry.register_alias(target, alias)?;
            debug!("Command-line alias '{}' for {} (new: {})", alias, target, added);
        }
        Ok(())
    }

    /// Dispatch and execute a command.
    ///
    /// Registers any `--alias` pairs first, then routes the CLI subcommand
    /// to the appropriate command implementation and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        self.register_aliases(&cli.aliases)?;

        let mut ctx = CommandContext {
            registry: self.registry,
            theme: &self.theme,
            out,
        };

        match &cli.command {
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(args.clone());
                cmd.execute(&mut ctx)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(&mut ctx)
            }
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(args.clone());
                cmd.execute(&mut ctx)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(&mut ctx)
            }
        }
    }
}
