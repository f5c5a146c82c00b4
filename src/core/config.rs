//! Match configuration.
//!
//! The engine models a single ruleset; configuration only covers the
//! match-level knobs: seed, starting hand size, deck size and how patient
//! the engine is with a misbehaving decision collaborator.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for deck shuffles and seating.
    /// Same seed and same decisions produce the same match.
    pub seed: u64,

    /// Cards dealt to each player during setup.
    pub cards_per_player: usize,

    /// Number of standard decks shuffled together.
    pub deck_copies: usize,

    /// Consecutive out-of-range answers tolerated for one request
    /// before the match is aborted.
    pub max_decision_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cards_per_player: 8,
            deck_copies: 1,
            max_decision_attempts: 32,
        }
    }
}

impl GameConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Set the number of standard decks.
    #[must_use]
    pub fn with_deck_copies(mut self, copies: usize) -> Self {
        self.deck_copies = copies;
        self
    }

    /// Set the answer retry budget.
    #[must_use]
    pub fn with_max_decision_attempts(mut self, attempts: u32) -> Self {
        self.max_decision_attempts = attempts.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.cards_per_player, 8);
        assert_eq!(config.deck_copies, 1);
        assert_eq!(config.max_decision_attempts, 32);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_cards_per_player(5)
            .with_deck_copies(2)
            .with_max_decision_attempts(0);

        assert_eq!(config.seed, 123);
        assert_eq!(config.cards_per_player, 5);
        assert_eq!(config.deck_copies, 2);
        assert_eq!(config.max_decision_attempts, 1);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
