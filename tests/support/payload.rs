//! Scoreboard documents shaped like the provider's, runs string-encoded.

use serde_json::json;

pub fn game(home: &str, away: &str, runs: (&str, &str), brief: &str) -> serde_json::Value {
    json!({
        "home_team_city": home,
        "away_team_city": away,
        "status": { "status": "In Progress", "inning": "7" },
        "alerts": { "text": format!("{brief}!"), "brief_text": brief },
        "linescore": {
            "r": { "home": runs.0, "away": runs.1, "diff": "0" },
            "h": { "home": "7", "away": "4" }
        }
    })
}

pub fn scoreboard(games: Vec<serde_json::Value>) -> String {
    json!({
        "subject": "MLB_SCOREBOARD",
        "data": { "games": { "year": "2017", "month": "06", "day": "01", "game": games } }
    })
    .to_string()
}

/// Toronto at home, 5-2, "Jays win".
pub fn jays_win() -> String {
    scoreboard(vec![
        game("New York", "Boston", ("1", "0"), "Yankees lead"),
        game("Toronto", "Baltimore", ("5", "2"), "Jays win"),
    ])
}

/// A game that has not started: no alerts, no linescore.
pub fn not_started(home: &str, away: &str) -> String {
    scoreboard(vec![json!({ "home_team_city": home, "away_team_city": away })])
}
