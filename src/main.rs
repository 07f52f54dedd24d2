use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use gradle_action::config::constants::DEFAULT_LOG_FILTER;
use gradle_action::errors::ErrorHandler;
use gradle_action::structs::cli::Cli;
use gradle_action::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::from_cli(&cli).context("failed to set up gradle-action")?;

    match runner.run_command(cli.command).await {
        Ok(0) => Ok(()),
        Ok(status) => std::process::exit(status),
        Err(error) => {
            ErrorHandler::handle_error(&error);
            std::process::exit(1);
        }
    }
}
