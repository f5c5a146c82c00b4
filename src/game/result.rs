//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player emptied their hand.
    Winner(PlayerId),
    /// Several hands emptied on the same turn.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Build the outcome from the players with empty hands, if any.
    #[must_use]
    pub fn from_empty_hands(players: impl IntoIterator<Item = PlayerId>) -> Option<Self> {
        let mut players: Vec<_> = players.into_iter().collect();
        match players.len() {
            0 => None,
            1 => players.pop().map(GameResult::Winner),
            _ => Some(GameResult::Tie(players)),
        }
    }

    /// Check if a player won or shares the tie.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie(ps) => ps.contains(&player),
        }
    }

    /// All players who finished.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        }
    }
}
