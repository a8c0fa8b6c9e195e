//! Scripted scoreboard sources.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::Scoreboard;
use crate::error::FetchError;
use crate::port::ScoreboardSource;

/// Returns the same scoreboard on every fetch.
pub struct FixedSource {
    board: Scoreboard,
}

impl FixedSource {
    pub fn new(board: Scoreboard) -> Self {
        Self { board }
    }
}

#[async_trait]
impl ScoreboardSource for FixedSource {
    async fn fetch(&self) -> Result<Scoreboard, FetchError> {
        Ok(self.board.clone())
    }
}

/// Returns scoreboards in order, repeating the last one once exhausted.
pub struct SequenceSource {
    boards: Mutex<VecDeque<Scoreboard>>,
}

impl SequenceSource {
    pub fn new(boards: Vec<Scoreboard>) -> Self {
        Self {
            boards: Mutex::new(boards.into()),
        }
    }
}

#[async_trait]
impl ScoreboardSource for SequenceSource {
    async fn fetch(&self) -> Result<Scoreboard, FetchError> {
        let mut boards = self.boards.lock();
        if boards.len() > 1 {
            return Ok(boards.pop_front().unwrap_or_default());
        }
        Ok(boards.front().cloned().unwrap_or_default())
    }
}

/// Fails every fetch with the given HTTP status.
pub struct FailingSource(pub u16);

#[async_trait]
impl ScoreboardSource for FailingSource {
    async fn fetch(&self) -> Result<Scoreboard, FetchError> {
        Err(FetchError::Status(self.0))
    }
}
