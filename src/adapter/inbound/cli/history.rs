//! Handler for the `history` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::HistoryArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::StoredObservation;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_store;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Key")]
    key: i64,
    #[tabled(rename = "Captured (UTC)")]
    captured_at: String,
    #[tabled(rename = "Brief")]
    brief: String,
    #[tabled(rename = "Text")]
    text: String,
}

impl From<&StoredObservation> for HistoryRow {
    fn from(stored: &StoredObservation) -> Self {
        Self {
            key: stored.key.get(),
            captured_at: stored
                .observation
                .captured_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            brief: stored.observation.brief.clone(),
            text: stored.observation.text.clone(),
        }
    }
}

/// Print stored observations for the configured scope, newest first.
pub async fn execute(config: &Config, args: &HistoryArgs) -> Result<()> {
    let store = build_store(config)?;
    let history = store.history(&config.scope, args.limit).await?;

    if output::is_json() {
        for stored in &history {
            output::json_output(json!(stored));
        }
        return Ok(());
    }

    output::section(&format!("History for {}", output::highlight(&config.scope)));
    if history.is_empty() {
        output::note("(no observations stored)");
        return Ok(());
    }

    let rows: Vec<HistoryRow> = history.iter().map(HistoryRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
