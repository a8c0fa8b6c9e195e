//! Composition root: builds a [`Checker`] from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::memory::MemoryObservationStore;
use crate::adapter::outbound::mlb::{HttpScoreboardSource, ScoreboardUrl};
use crate::adapter::outbound::notifier::{HipChatNotifier, SlackNotifier};
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteObservationStore;
use crate::application::{Checker, Tracking};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, NotifierKind};
use crate::port::{LogNotifier, Notifier, ObservationStore, ScoreboardSource};

/// Build the scoreboard source.
pub fn build_source(config: &Config) -> Result<Arc<dyn ScoreboardSource>> {
    let url = ScoreboardUrl::new(config.source.url_template.as_str(), &config.source.timezone)?;
    Ok(Arc::new(HttpScoreboardSource::new(
        url,
        config.source.timeout(),
    )?))
}

/// Open the SQLite store at `config.database` and apply pending migrations.
pub fn build_store(config: &Config) -> Result<Arc<dyn ObservationStore>> {
    let pool = create_pool(&config.database)?;
    run_migrations(&pool)?;
    info!(database = %config.database, "Observation store ready");
    Ok(Arc::new(SqliteObservationStore::new(pool)))
}

/// Build the configured notification channel.
pub fn build_notifier(config: &Config) -> Result<Arc<dyn Notifier>> {
    let notifier: Arc<dyn Notifier> = match config.notifier.kind {
        NotifierKind::Slack => {
            let slack = config
                .notifier
                .slack
                .as_ref()
                .ok_or(ConfigError::MissingField {
                    field: "SLACK_WEBHOOK_URL",
                })?;
            Arc::new(SlackNotifier::new(slack)?)
        }
        NotifierKind::HipChat => {
            let hipchat =
                config
                    .notifier
                    .hipchat
                    .as_ref()
                    .ok_or(ConfigError::MissingField {
                        field: "HIPCHAT_ROOM_ID/HIPCHAT_AUTH_TOKEN",
                    })?;
            Arc::new(HipChatNotifier::new(hipchat)?)
        }
        NotifierKind::Log => Arc::new(LogNotifier),
    };
    info!(channel = notifier.name(), "Notifier ready");
    Ok(notifier)
}

/// Build a checker wired from configuration.
///
/// A dry run swaps in the in-memory store and the log notifier, so nothing
/// is persisted and nothing leaves the process except the scoreboard fetch.
pub fn build_checker(config: &Config, dry_run: bool) -> Result<Checker> {
    let tracking = Tracking {
        team: config.team.clone(),
        scope: config.scope.clone(),
    };
    let source = build_source(config)?;

    let (store, notifier): (Arc<dyn ObservationStore>, Arc<dyn Notifier>) = if dry_run {
        warn!("Dry run: observations are kept in memory and notifications only logged");
        (Arc::new(MemoryObservationStore::new()), Arc::new(LogNotifier))
    } else {
        (build_store(config)?, build_notifier(config)?)
    };

    Ok(Checker::new(tracking, source, store, notifier))
}
