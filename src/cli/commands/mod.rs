//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`deployenv resolve`, `deployenv list`)
//! - Command-line aliases registered once before any command runs
//! - Output written to any `io::Write`, so commands are testable

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod resolve;
pub mod validate;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
