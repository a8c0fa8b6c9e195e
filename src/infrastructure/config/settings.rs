//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; channel credentials come only
//! from environment variables (`SLACK_WEBHOOK_URL`, `HIPCHAT_ROOM_ID`,
//! `HIPCHAT_AUTH_TOKEN`).
//!
//! # Example
//!
//! ```no_run
//! use scorewatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::mlb::{ScoreboardUrl, DEFAULT_TIMEZONE, DEFAULT_URL_TEMPLATE};
use crate::adapter::outbound::notifier::hipchat::DEFAULT_API_BASE;
use crate::adapter::outbound::notifier::{HipChatConfig, SlackConfig};
use crate::error::{ConfigError, Result};

/// Scoreboard source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL template with `{year}`, `{month}` and `{day}` placeholders.
    #[serde(default = "default_url_template")]
    pub url_template: String,
    /// IANA timezone that defines the provider's "today".
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            timezone: default_timezone(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Supported notification channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Slack incoming webhook.
    #[default]
    Slack,
    /// HipChat room notification.
    HipChat,
    /// Log only; nothing leaves the process.
    Log,
}

impl NotifierKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::HipChat => "hipchat",
            Self::Log => "log",
        }
    }
}

/// Notification channel settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub kind: NotifierKind,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// HipChat API base, for self-hosted servers.
    #[serde(default = "default_hipchat_api_base")]
    pub hipchat_api_base: String,

    /// Slack credentials, loaded from the environment.
    #[serde(skip)]
    pub slack: Option<SlackConfig>,
    /// HipChat credentials, loaded from the environment.
    #[serde(skip)]
    pub hipchat: Option<HipChatConfig>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::default(),
            timeout_secs: default_timeout_secs(),
            hipchat_api_base: default_hipchat_api_base(),
            slack: None,
            hipchat: None,
        }
    }
}

impl NotifierConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read channel credentials from `env`; blank values count as absent.
    ///
    /// A room id that is set but not numeric is rejected when HipChat is the
    /// selected channel, and ignored otherwise.
    fn load_secrets(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        self.slack = non_empty("SLACK_WEBHOOK_URL").map(|webhook_url| SlackConfig {
            webhook_url,
            timeout: self.timeout(),
        });

        let room_id = match non_empty("HIPCHAT_ROOM_ID").map(|s| s.trim().parse::<u64>()) {
            Some(Ok(id)) => Some(id),
            Some(Err(e)) if self.kind == NotifierKind::HipChat => {
                return Err(ConfigError::InvalidValue {
                    field: "HIPCHAT_ROOM_ID",
                    reason: format!("must be a numeric room id ({e})"),
                }
                .into());
            }
            _ => None,
        };
        let auth_token = non_empty("HIPCHAT_AUTH_TOKEN");
        self.hipchat = match (room_id, auth_token) {
            (Some(room_id), Some(auth_token)) => Some(HipChatConfig {
                api_base: self.hipchat_api_base.clone(),
                room_id,
                auth_token,
                timeout: self.timeout(),
            }),
            _ => None,
        };
        Ok(())
    }
}

/// HTTP trigger settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the trigger listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every field has a default.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// City the tracked team plays under on the scoreboard.
    #[serde(default = "default_team")]
    pub team: String,

    /// Store category observations are kept under.
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Path to SQLite database file.
    ///
    /// Defaults to "scorewatch.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoreboard source configuration.
    #[serde(default)]
    pub source: SourceConfig,

    /// Notification channel configuration.
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// HTTP trigger configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team: default_team(),
            scope: default_scope(),
            database: default_database_path(),
            logging: LoggingConfig::default(),
            source: SourceConfig::default(),
            notifier: NotifierConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

fn default_team() -> String {
    "Toronto".to_string()
}

fn default_scope() -> String {
    "jays".to_string()
}

fn default_database_path() -> String {
    "scorewatch.db".to_string()
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_hipchat_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads channel credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, &process_env)
    }

    /// Parse configuration, resolving credentials through `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env(content: &str, env: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.notifier.load_secrets(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.team.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "team" }.into());
        }
        if self.scope.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "scope" }.into());
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        ScoreboardUrl::new(self.source.url_template.as_str(), &self.source.timezone).map_err(
            |e| ConfigError::InvalidValue {
                field: "source",
                reason: e.to_string(),
            },
        )?;
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.notifier.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notifier.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        match self.notifier.kind {
            NotifierKind::Slack if self.notifier.slack.is_none() => {
                return Err(ConfigError::MissingField {
                    field: "SLACK_WEBHOOK_URL",
                }
                .into());
            }
            NotifierKind::HipChat if self.notifier.hipchat.is_none() => {
                return Err(ConfigError::MissingField {
                    field: "HIPCHAT_ROOM_ID/HIPCHAT_AUTH_TOKEN",
                }
                .into());
            }
            _ => {}
        }

        self.bind_addr()?;
        Ok(())
    }

    /// Parsed trigger listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    field: "server.bind",
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn slack_env(key: &str) -> Option<String> {
        (key == "SLACK_WEBHOOK_URL").then(|| "https://hooks.slack.com/services/T/B/K".to_string())
    }

    #[test]
    fn defaults_apply_to_minimal_file() {
        let config = Config::parse_toml_with_env("", &slack_env).unwrap();

        assert_eq!(config.team, "Toronto");
        assert_eq!(config.scope, "jays");
        assert_eq!(config.database, "scorewatch.db");
        assert_eq!(config.source.timezone, "America/New_York");
        assert_eq!(config.notifier.kind, NotifierKind::Slack);
        assert_eq!(
            config.notifier.slack.as_ref().unwrap().webhook_url,
            "https://hooks.slack.com/services/T/B/K"
        );
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn slack_requires_webhook_secret() {
        let result = Config::parse_toml_with_env("", &no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "SLACK_WEBHOOK_URL"
            }))
        ));
    }

    #[test]
    fn hipchat_requires_both_secrets() {
        let toml = "[notifier]\nkind = \"hipchat\"\n";
        let only_room = |key: &str| (key == "HIPCHAT_ROOM_ID").then(|| "12".to_string());
        assert!(Config::parse_toml_with_env(toml, &only_room).is_err());

        let both = |key: &str| match key {
            "HIPCHAT_ROOM_ID" => Some("12".to_string()),
            "HIPCHAT_AUTH_TOKEN" => Some("tok".to_string()),
            _ => None,
        };
        let config = Config::parse_toml_with_env(toml, &both).unwrap();
        let hipchat = config.notifier.hipchat.unwrap();
        assert_eq!(hipchat.room_id, 12);
        assert_eq!(hipchat.api_base, "https://api.hipchat.com");
    }

    #[test]
    fn bad_room_id_only_matters_for_hipchat() {
        let env = |key: &str| match key {
            "SLACK_WEBHOOK_URL" => Some("https://hooks.slack.com/services/T/B/K".to_string()),
            "HIPCHAT_ROOM_ID" => Some("ops-room".to_string()),
            "HIPCHAT_AUTH_TOKEN" => Some("tok".to_string()),
            _ => None,
        };

        let config = Config::parse_toml_with_env("", &env).unwrap();
        assert!(config.notifier.hipchat.is_none());

        assert!(matches!(
            Config::parse_toml_with_env("[notifier]\nkind = \"hipchat\"\n", &env),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "HIPCHAT_ROOM_ID",
                ..
            }))
        ));
    }

    #[test]
    fn log_notifier_needs_no_secrets() {
        let config = Config::parse_toml_with_env("[notifier]\nkind = \"log\"\n", &no_env).unwrap();
        assert_eq!(config.notifier.kind, NotifierKind::Log);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let toml = "[notifier]\nkind = \"log\"\n[source]\ntimezone = \"Mars/Olympus\"\n";
        assert!(matches!(
            Config::parse_toml_with_env(toml, &no_env),
            Err(Error::Config(ConfigError::InvalidValue { field: "source", .. }))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let toml = "[notifier]\nkind = \"log\"\n[source]\ntimeout_secs = 0\n";
        assert!(matches!(
            Config::parse_toml_with_env(toml, &no_env),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "source.timeout_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_team() {
        let toml = "team = \"  \"\n[notifier]\nkind = \"log\"\n";
        assert!(matches!(
            Config::parse_toml_with_env(toml, &no_env),
            Err(Error::Config(ConfigError::MissingField { field: "team" }))
        ));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let toml = "[notifier]\nkind = \"log\"\n[server]\nbind = \"localhost\"\n";
        assert!(matches!(
            Config::parse_toml_with_env(toml, &no_env),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "server.bind",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse_toml_with_env("team = ", &no_env),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
