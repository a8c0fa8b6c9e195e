//! Handler for the `serve` command.

use std::sync::Arc;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_checker;
use crate::infrastructure::config::settings::Config;

/// Serve the HTTP trigger until interrupted.
pub async fn execute(config: &Config, args: &ServeArgs) -> Result<()> {
    let bind = match args.bind {
        Some(addr) => addr,
        None => config.bind_addr()?,
    };
    let checker = build_checker(config, args.dry_run)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Team", &config.team);
    output::field("Listening", output::highlight(format!("http://{bind}/poll")));
    if args.dry_run {
        output::warning("Dry run: nothing is stored or sent");
    }

    http::serve(Arc::new(checker), bind).await
}
