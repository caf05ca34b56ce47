mod exec;
mod schema_files;
mod validate;

use crate::Cli;
use crate::CommandResult;
use exec::ExecCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphloom")]
pub(crate) enum CommandEnum {
    Exec(Box<ExecCmd>),
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Exec(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
