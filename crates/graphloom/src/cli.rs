use clap::CommandFactory;
use crate::commands;

/// Validate and execute directive-driven GraphQL schemas.
#[derive(clap::Parser, Debug)]
#[command(name = "graphloom", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at debug level, overriding LOG_LEVEL.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
