//! Builders for scoreboard documents used across tests.

use crate::domain::scoreboard::{Alerts, Game, Games, Linescore, Runs, ScoreboardData};
use crate::domain::Scoreboard;

/// A game between `home` and `away` with the given runs and alert text.
///
/// The long text is the brief text followed by `!`.
pub fn game(home: &str, away: &str, runs: (u32, u32), brief: &str) -> Game {
    Game {
        home_team_city: home.into(),
        away_team_city: away.into(),
        alerts: Alerts {
            text: format!("{brief}!"),
            brief_text: brief.into(),
        },
        linescore: Linescore {
            runs: Runs {
                home: runs.0,
                away: runs.1,
            },
        },
    }
}

/// A scoreboard listing `games` in order.
pub fn scoreboard(games: Vec<Game>) -> Scoreboard {
    Scoreboard {
        data: ScoreboardData {
            games: Games { game: games },
        },
    }
}

/// A scoreboard with a single game.
pub fn single_game(home: &str, away: &str, runs: (u32, u32), brief: &str) -> Scoreboard {
    scoreboard(vec![game(home, away, runs, brief)])
}
