//! List command implementation.
//!
//! The `deployenv list` command lists every environment with its aliases.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::environment::Environment;
use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// JSON shape of one listed environment.
#[derive(Debug, Serialize)]
struct Entry {
    environment: Environment,
    aliases: Vec<String>,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let snapshot = ctx.registry.snapshot();

        if self.args.json {
            let entries: Vec<Entry> = snapshot
                .into_iter()
                .map(|(environment, aliases)| Entry {
                    environment,
                    aliases,
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            writeln!(ctx.out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        for (env, aliases) in &snapshot {
            writeln!(ctx.out, "{}", ctx.theme.format_environment(*env, aliases))?;
        }

        Ok(CommandResult::success())
    }
}
