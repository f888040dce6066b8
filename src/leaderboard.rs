//! Live score leaderboard
//!
//! Ranks living snakes by score, top 10. Rebuilt from a frame each time it
//! is displayed; nothing is persisted across sessions.

use serde::Serialize;

use crate::sim::{ArenaState, Snake};

/// Maximum number of leaderboard entries
pub const MAX_ENTRIES: usize = 10;

/// A single ranked entry
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// Rank, 1-indexed
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

/// Top-N living snakes by score, descending
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank the current frame's living snakes
    pub fn from_arena(state: &ArenaState) -> Self {
        Self::from_snakes(&state.snakes)
    }

    pub fn from_snakes(snakes: &[Snake]) -> Self {
        let mut ranked: Vec<&Snake> = snakes.iter().filter(|s| s.is_alive()).collect();
        // Stable sort: equal scores keep arena order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(MAX_ENTRIES);

        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(i, snake)| LeaderboardEntry {
                rank: i + 1,
                name: snake.name.clone(),
                score: snake.score,
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top entry, if anyone is alive
    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }
}
