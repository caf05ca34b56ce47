use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports what should be printed
/// and which exit code to use.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
