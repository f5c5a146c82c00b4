//! Game state machine values.
//!
//! ## GameState
//!
//! The phase a round of play is in. Exactly one value is active at a time:
//!
//! ```text
//! NoGame -> Setup -> Normal <-> { Skip, Plus, King, PlusTwo(stake) }
//! ```
//!
//! Card effects and the orchestrator's post-turn bookkeeping are the only
//! writers.
//!
//! ## Direction
//!
//! Turn direction through the seats.

use serde::{Deserialize, Serialize};

/// Stake a fresh +2 episode starts at.
pub const BASE_STAKE: u32 = 2;

/// Stake added by each chained +2.
pub const STAKE_STEP: u32 = 2;

/// Phase of the current match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Players may join, nothing has been dealt.
    #[default]
    NoGame,
    /// Dealing and revealing the starter card.
    Setup,
    /// Ordinary turn.
    Normal,
    /// The next player's turn is skipped.
    Skip,
    /// The player who played a "+" acts again.
    Plus,
    /// The player who played a king acts again; anything matches.
    King,
    /// A +2 chain is open; the next player chains or draws `stake`.
    PlusTwo { stake: u32 },
}

impl GameState {
    /// State entered by the first +2 of an episode.
    #[must_use]
    pub const fn plus_two() -> Self {
        GameState::PlusTwo { stake: BASE_STAKE }
    }

    /// Pending draw count, if a +2 chain is open.
    #[must_use]
    pub fn stake(self) -> Option<u32> {
        match self {
            GameState::PlusTwo { stake } => Some(stake),
            _ => None,
        }
    }

    /// Check whether a +2 chain is open.
    #[must_use]
    pub fn is_plus_two(self) -> bool {
        matches!(self, GameState::PlusTwo { .. })
    }

    /// The same +2 episode with one more card chained onto it.
    ///
    /// Returns `None` outside a +2 chain.
    #[must_use]
    pub fn raised(self) -> Option<Self> {
        self.stake().map(|stake| GameState::PlusTwo {
            stake: stake + STAKE_STEP,
        })
    }

    /// Whether the win check is deferred in this state.
    ///
    /// A pending "+" or +2 means the last card hasn't settled yet.
    #[must_use]
    pub fn defers_win_check(self) -> bool {
        matches!(self, GameState::Plus | GameState::PlusTwo { .. })
    }

    /// Whether the acting player keeps the turn after this state.
    #[must_use]
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, GameState::Plus | GameState::King)
    }

    /// Short lowercase name for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameState::NoGame => "no_game",
            GameState::Setup => "setup",
            GameState::Normal => "normal",
            GameState::Skip => "skip",
            GameState::Plus => "plus",
            GameState::King => "king",
            GameState::PlusTwo { .. } => "plus_two",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::PlusTwo { stake } => write!(f, "plus_two({stake})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Turn direction through the seats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending seat order.
    #[default]
    Forward,
    /// Descending seat order.
    Reversed,
}

impl Direction {
    /// Reverse the direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reversed,
            Direction::Reversed => Direction::Forward,
        }
    }

    /// Seat index one step from `from` in this direction.
    #[must_use]
    pub fn step(self, from: usize, player_count: usize) -> usize {
        match self {
            Direction::Forward => (from + 1) % player_count,
            Direction::Reversed => (from + player_count - 1) % player_count,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => f.write_str("normal"),
            Direction::Reversed => f.write_str("reversed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_game() {
        assert_eq!(GameState::default(), GameState::NoGame);
    }

    #[test]
    fn test_plus_two_stake() {
        let state = GameState::plus_two();
        assert_eq!(state.stake(), Some(2));
        assert_eq!(state.raised().and_then(GameState::stake), Some(4));
        assert_eq!(state.raised().and_then(GameState::raised), Some(GameState::PlusTwo { stake: 6 }));

        assert!(GameState::Normal.raised().is_none());
        assert!(GameState::Normal.stake().is_none());
    }

    #[test]
    fn test_fresh_episode_resets_stake() {
        let chained = GameState::plus_two().raised().unwrap();
        assert_eq!(chained.stake(), Some(4));
        assert_eq!(GameState::plus_two().stake(), Some(BASE_STAKE));
    }

    #[test]
    fn test_turn_flags() {
        assert!(GameState::Plus.defers_win_check());
        assert!(GameState::plus_two().defers_win_check());
        assert!(!GameState::King.defers_win_check());
        assert!(!GameState::Normal.defers_win_check());

        assert!(GameState::Plus.grants_extra_turn());
        assert!(GameState::King.grants_extra_turn());
        assert!(!GameState::plus_two().grants_extra_turn());
        assert!(!GameState::Skip.grants_extra_turn());
    }

    #[test]
    fn test_display() {
        assert_eq!(GameState::Normal.to_string(), "normal");
        assert_eq!(GameState::PlusTwo { stake: 6 }.to_string(), "plus_two(6)");
    }

    #[test]
    fn test_direction_step_wraps() {
        assert_eq!(Direction::Forward.step(2, 3), 0);
        assert_eq!(Direction::Reversed.step(0, 3), 2);
        assert_eq!(Direction::Forward.flipped(), Direction::Reversed);
        assert_eq!(Direction::Forward.flipped().flipped(), Direction::Forward);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::PlusTwo { stake: 4 };
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
