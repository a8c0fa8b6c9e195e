use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use scorewatch::adapter::inbound::cli::{self, command::Cli, output};

async fn run(args: Cli) -> anyhow::Result<()> {
    let name = args.command.name();
    cli::run(args).await.with_context(|| format!("{name} failed"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
