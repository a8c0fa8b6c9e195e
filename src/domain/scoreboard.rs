//! Daily scoreboard payload and tracked-game extraction.
//!
//! Only the fields the change pipeline consults are modelled; everything
//! else in the provider's document is ignored during decoding.

use serde::{Deserialize, Deserializer};

use super::observation::Observation;

/// Full scoreboard document for one calendar day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scoreboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ScoreboardData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreboardData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub games: Games,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Games {
    #[serde(default, deserialize_with = "null_as_default")]
    pub game: Vec<Game>,
}

/// A single game on the scoreboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Game {
    #[serde(default, deserialize_with = "null_as_default")]
    pub home_team_city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub away_team_city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Alerts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linescore: Linescore,
}

/// Latest alert attached to a game.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alerts {
    /// Long-form display text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Short text; used as the comparison key between cycles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub brief_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Linescore {
    #[serde(default, rename = "r", deserialize_with = "null_as_default")]
    pub runs: Runs,
}

/// Run totals. The provider encodes them as strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Runs {
    #[serde(default, deserialize_with = "string_encoded_u32")]
    pub home: u32,
    #[serde(default, deserialize_with = "string_encoded_u32")]
    pub away: u32,
}

/// Which identity role the tracked team matched in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

/// The game involving the tracked team, and the side it plays on.
#[derive(Debug, Clone, Copy)]
pub struct TrackedGame<'a> {
    pub game: &'a Game,
    pub side: Side,
}

impl TrackedGame<'_> {
    /// Capture the notify-relevant state of this game.
    #[must_use]
    pub fn observe(&self, captured_at: chrono::DateTime<chrono::Utc>) -> Observation {
        Observation::new(
            self.game.alerts.text.clone(),
            self.game.alerts.brief_text.clone(),
            captured_at,
        )
    }
}

impl Scoreboard {
    /// Games listed on the scoreboard, in provider order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.data.games.game
    }

    /// Find the first game in which `team` plays, home or away.
    ///
    /// Within a single game the home slot is checked before the away slot.
    /// Returns `None` when the team has no game on this scoreboard.
    #[must_use]
    pub fn find(&self, team: &str) -> Option<TrackedGame<'_>> {
        self.games().iter().find_map(|game| {
            if game.home_team_city == team {
                Some(TrackedGame {
                    game,
                    side: Side::Home,
                })
            } else if game.away_team_city == team {
                Some(TrackedGame {
                    game,
                    side: Side::Away,
                })
            } else {
                None
            }
        })
    }
}

/// Decode an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Runs arrive as strings, numbers, blanks or `null`; the last two count as 0.
fn string_encoded_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u32),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Raw::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: &str, away: &str, brief: &str) -> Game {
        Game {
            home_team_city: home.into(),
            away_team_city: away.into(),
            alerts: Alerts {
                text: format!("{brief} (long)"),
                brief_text: brief.into(),
            },
            linescore: Linescore::default(),
        }
    }

    fn board(games: Vec<Game>) -> Scoreboard {
        Scoreboard {
            data: ScoreboardData {
                games: Games { game: games },
            },
        }
    }

    #[test]
    fn decodes_provider_document() {
        let json = r#"{
            "data": {
                "games": {
                    "game": [
                        {
                            "home_team_city": "Toronto",
                            "away_team_city": "Boston",
                            "venue": "Rogers Centre",
                            "alerts": {"text": "Final: TOR 5, BOS 2", "brief_text": "Jays win"},
                            "linescore": {"r": {"home": "5", "away": "2", "diff": "3"}}
                        }
                    ]
                }
            }
        }"#;

        let board: Scoreboard = serde_json::from_str(json).unwrap();
        let game = &board.games()[0];
        assert_eq!(game.home_team_city, "Toronto");
        assert_eq!(game.alerts.brief_text, "Jays win");
        assert_eq!(game.linescore.runs, Runs { home: 5, away: 2 });
    }

    #[test]
    fn missing_alerts_and_linescore_default_to_empty() {
        let json = r#"{"data":{"games":{"game":[
            {"home_team_city":"Toronto","away_team_city":"Boston"}
        ]}}}"#;

        let board: Scoreboard = serde_json::from_str(json).unwrap();
        let game = &board.games()[0];
        assert_eq!(game.alerts.brief_text, "");
        assert_eq!(game.linescore.runs, Runs::default());
    }

    #[test]
    fn blank_and_numeric_runs_are_accepted() {
        let runs: Runs = serde_json::from_str(r#"{"home": "", "away": 4}"#).unwrap();
        assert_eq!(runs, Runs { home: 0, away: 4 });
    }

    #[test]
    fn null_runs_count_as_zero() {
        let runs: Runs = serde_json::from_str(r#"{"home": null, "away": "1"}"#).unwrap();
        assert_eq!(runs, Runs { home: 0, away: 1 });
    }

    #[test]
    fn null_fields_on_another_game_do_not_hide_ours() {
        let json = r#"{"data":{"games":{"game":[
            {"home_team_city":"Boston","away_team_city":"New York","alerts":null,"linescore":null},
            {"home_team_city":"Toronto","away_team_city":null,
             "alerts":{"text":null,"brief_text":"Jays lead 2-0"},
             "linescore":{"r":null}}
        ]}}}"#;

        let board: Scoreboard = serde_json::from_str(json).unwrap();
        assert_eq!(board.games()[0].alerts.brief_text, "");

        let tracked = board.find("Toronto").unwrap();
        assert_eq!(tracked.side, Side::Home);
        assert_eq!(tracked.game.away_team_city, "");
        assert_eq!(tracked.game.alerts.text, "");
        assert_eq!(tracked.game.alerts.brief_text, "Jays lead 2-0");
        assert_eq!(tracked.game.linescore.runs, Runs::default());
    }

    #[test]
    fn null_game_list_is_empty() {
        let board: Scoreboard =
            serde_json::from_str(r#"{"data":{"games":{"game":null}}}"#).unwrap();
        assert!(board.games().is_empty());
    }

    #[test]
    fn non_numeric_runs_fail_to_decode() {
        let result: Result<Runs, _> = serde_json::from_str(r#"{"home": "x", "away": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_document_has_no_games() {
        let board: Scoreboard = serde_json::from_str("{}").unwrap();
        assert!(board.games().is_empty());
        assert!(board.find("Toronto").is_none());
    }

    #[test]
    fn find_matches_home_side() {
        let board = board(vec![
            game("Boston", "New York", "other"),
            game("Toronto", "Seattle", "ours"),
        ]);

        let tracked = board.find("Toronto").unwrap();
        assert_eq!(tracked.side, Side::Home);
        assert_eq!(tracked.game.alerts.brief_text, "ours");
    }

    #[test]
    fn find_matches_away_side() {
        let board = board(vec![game("Seattle", "Toronto", "ours")]);

        let tracked = board.find("Toronto").unwrap();
        assert_eq!(tracked.side, Side::Away);
    }

    #[test]
    fn first_match_wins() {
        let board = board(vec![
            game("Seattle", "Toronto", "first"),
            game("Toronto", "Seattle", "second"),
        ]);

        let tracked = board.find("Toronto").unwrap();
        assert_eq!(tracked.game.alerts.brief_text, "first");
        assert_eq!(tracked.side, Side::Away);
    }

    #[test]
    fn find_is_case_sensitive() {
        let board = board(vec![game("Toronto", "Seattle", "ours")]);
        assert!(board.find("toronto").is_none());
        assert!(board.find("Montreal").is_none());
    }

    #[test]
    fn observe_copies_alert_texts() {
        let board = board(vec![game("Toronto", "Seattle", "Jays win")]);
        let now = chrono::Utc::now();

        let observation = board.find("Toronto").unwrap().observe(now);
        assert_eq!(observation.brief, "Jays win");
        assert_eq!(observation.text, "Jays win (long)");
        assert_eq!(observation.captured_at, now);
    }
}
