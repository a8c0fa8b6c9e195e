//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config validate`.
///
/// Loading already validates, so reaching the summary means the file and
/// environment are usable.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "path": path.display().to_string(),
            "team": config.team,
            "scope": config.scope,
            "notifier": config.notifier.kind.as_str(),
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Path", path.display());
    output::field("Team", &config.team);
    output::field("Scope", &config.scope);
    output::field("Database", &config.database);
    output::field("Timezone", &config.source.timezone);
    output::field("Notifier", config.notifier.kind.as_str());
    output::field("Bind", &config.server.bind);
    Ok(())
}
