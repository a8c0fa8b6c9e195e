//! Handler for the `check` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_checker;
use crate::infrastructure::config::settings::Config;
use crate::port::CycleOutcome;

/// Run one cycle and report its outcome.
pub async fn execute(config: &Config, args: &CheckArgs) -> Result<()> {
    let checker = build_checker(config, args.dry_run)?;
    let outcome = checker.check().await?;
    report(&config.team, &outcome);
    Ok(())
}

fn report(team: &str, outcome: &CycleOutcome) {
    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "team": team,
            "result": outcome,
        }));
        return;
    }

    match outcome {
        CycleOutcome::NoGame => output::note(&format!("{team} has no game today")),
        CycleOutcome::Unchanged => output::note("No change since the last observation"),
        CycleOutcome::Notified {
            message,
            indicator,
            key,
        } => {
            output::success("Notification sent");
            output::field("Status", message);
            output::field("Indicator", indicator);
            output::field("Key", key);
        }
    }
}
