//! Validate command implementation.
//!
//! The `deployenv validate` command checks alias syntax without registering
//! anything.

use crate::cli::args::ValidateArgs;
use crate::environment::validate_alias_format;
use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let mut invalid = 0;

        for candidate in &self.args.aliases {
            match validate_alias_format(candidate.as_str()) {
                Ok(alias) => writeln!(ctx.out, "{}", ctx.theme.format_success(alias.as_str()))?,
                Err(e) => {
                    invalid += 1;
                    writeln!(ctx.out, "{}", ctx.theme.format_error(&e.to_string()))?;
                }
            }
        }

        if invalid > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
