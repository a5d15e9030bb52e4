//! Resolve command implementation.
//!
//! The `deployenv resolve` command prints the environment a name maps to.

use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::environment::Environment;
use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// JSON shape of a resolution.
#[derive(Debug, Serialize)]
struct Resolution<'a> {
    input: &'a str,
    environment: Environment,
    aliases: Vec<String>,
}

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(args: ResolveArgs) -> Self {
        Self { args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let env = ctx.registry.resolve(self.args.name.as_str())?;

        if self.args.json {
            let resolution = Resolution {
                input: &self.args.name,
                environment: env,
                aliases: ctx.registry.aliases(env),
            };
            let json = serde_json::to_string_pretty(&resolution).map_err(anyhow::Error::from)?;
            writeln!(ctx.out, "{}", json)?;
        } else {
            writeln!(ctx.out, "{}", env)?;
        }

        Ok(CommandResult::success())
    }
}
