//! HTTP client for the daily master scoreboard.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use tracing::debug;

use crate::domain::Scoreboard;
use crate::error::FetchError;
use crate::port::ScoreboardSource;

/// Default scoreboard location; `{year}`, `{month}` and `{day}` are filled
/// from the provider's calendar date.
pub const DEFAULT_URL_TEMPLATE: &str =
    "http://gd2.mlb.com/components/game/mlb/year_{year}/month_{month}/day_{day}/master_scoreboard.json";

/// Timezone the provider files its scoreboards under.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Builds the scoreboard URL for a given instant.
#[derive(Debug, Clone)]
pub struct ScoreboardUrl {
    template: String,
    timezone: Tz,
}

impl ScoreboardUrl {
    /// # Errors
    ///
    /// Returns [`FetchError::Timezone`] for an unknown IANA name and
    /// [`FetchError::Url`] if the template lacks a date placeholder.
    pub fn new(template: impl Into<String>, timezone: &str) -> Result<Self, FetchError> {
        let template = template.into();
        for placeholder in ["{year}", "{month}", "{day}"] {
            if !template.contains(placeholder) {
                return Err(FetchError::Url(format!(
                    "template is missing {placeholder}"
                )));
            }
        }
        let timezone = parse_timezone(timezone)?;
        Ok(Self { template, timezone })
    }

    /// URL for the provider's calendar day containing `now`.
    #[must_use]
    pub fn for_instant(&self, now: DateTime<Utc>) -> String {
        let local = now.with_timezone(&self.timezone);
        self.template
            .replace("{year}", &local.year().to_string())
            .replace("{month}", &format!("{:02}", local.month()))
            .replace("{day}", &format!("{:02}", local.day()))
    }
}

/// Parse an IANA timezone name.
///
/// # Errors
///
/// Returns [`FetchError::Timezone`] if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, FetchError> {
    name.parse::<Tz>()
        .map_err(|_| FetchError::Timezone(name.to_string()))
}

/// Fetches today's scoreboard over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScoreboardSource {
    client: Client,
    url: ScoreboardUrl,
}

impl HttpScoreboardSource {
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn new(url: ScoreboardUrl, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Fetch the scoreboard for the day containing `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for network failures, non-2xx statuses, or an
    /// undecodable body.
    pub async fn fetch_at(&self, now: DateTime<Utc>) -> Result<Scoreboard, FetchError> {
        let url = self.url.for_instant(now);
        debug!(url = %url, "Fetching scoreboard");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let scoreboard: Scoreboard = serde_json::from_slice(&body)?;
        debug!(games = scoreboard.games().len(), "Scoreboard decoded");
        Ok(scoreboard)
    }
}

#[async_trait]
impl ScoreboardSource for HttpScoreboardSource {
    async fn fetch(&self) -> Result<Scoreboard, FetchError> {
        self.fetch_at(Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn default_template_is_zero_padded() {
        let url = ScoreboardUrl::new(DEFAULT_URL_TEMPLATE, DEFAULT_TIMEZONE).unwrap();

        assert_eq!(
            url.for_instant(at("2017-06-05T16:00:00Z")),
            "http://gd2.mlb.com/components/game/mlb/year_2017/month_06/day_05/master_scoreboard.json"
        );
    }

    #[test]
    fn date_follows_provider_timezone_not_utc() {
        let url = ScoreboardUrl::new("/{year}/{month}/{day}", DEFAULT_TIMEZONE).unwrap();

        // 02:30 UTC on July 1st is still June 30th in New York.
        assert_eq!(url.for_instant(at("2017-07-01T02:30:00Z")), "/2017/06/30");
        assert_eq!(url.for_instant(at("2017-07-01T04:30:00Z")), "/2017/07/01");
    }

    #[test]
    fn year_boundary_in_provider_timezone() {
        let url = ScoreboardUrl::new("/{year}/{month}/{day}", DEFAULT_TIMEZONE).unwrap();
        assert_eq!(url.for_instant(at("2018-01-01T03:00:00Z")), "/2017/12/31");
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let result = ScoreboardUrl::new(DEFAULT_URL_TEMPLATE, "America/Toronto_Downtown");
        assert!(matches!(result, Err(FetchError::Timezone(name)) if name == "America/Toronto_Downtown"));
    }

    #[test]
    fn template_must_have_every_placeholder() {
        let result = ScoreboardUrl::new("http://x/{year}/{month}", DEFAULT_TIMEZONE);
        assert!(matches!(result, Err(FetchError::Url(_))));
    }
}
