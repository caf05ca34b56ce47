mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, invalid_env_level) = resolve_log_level(cli.verbose, env_level.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(raw) = invalid_env_level {
        log::warn!("Ignoring invalid `LOG_LEVEL` value `{raw}`.");
    }
}

/// `--verbose` wins over `LOG_LEVEL`. An unparseable `LOG_LEVEL` is returned
/// alongside the default so it can be reported once logging is up.
fn resolve_log_level(verbose: bool, env_level: Option<&str>) -> (tracing::Level, Option<&str>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_level.map(|raw| (raw, raw.trim().parse::<tracing::Level>())) {
        Some((_, Ok(level))) => (level, None),
        Some((raw, Err(_))) => (DEFAULT_LOG_LEVEL, Some(raw)),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}
