//! CLI module graph and dispatch.

pub mod check;
pub mod command;
pub mod config;
pub mod history;
pub mod output;
pub mod serve;

use command::{Cli, Commands, ConfigCommand};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet), &cli.color);

    if let Commands::Config(ConfigCommand::Validate) = cli.command {
        return config::execute_validate(&cli.config);
    }

    let mut settings = Config::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    settings.init_logging();

    match cli.command {
        Commands::Check(args) => check::execute(&settings, &args).await,
        Commands::Serve(args) => serve::execute(&settings, &args).await,
        Commands::History(args) => history::execute(&settings, &args).await,
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
