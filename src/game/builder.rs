//! Fluent construction of a match.

use crate::core::{GameConfig, Result};
use crate::decision::Decider;
use crate::zones::Deck;

use super::engine::Game;

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    players: Vec<String>,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn cards_per_player(mut self, count: usize) -> Self {
        self.config = self.config.with_cards_per_player(count);
        self
    }

    pub fn deck_copies(mut self, copies: usize) -> Self {
        self.config = self.config.with_deck_copies(copies);
        self
    }

    /// Add a named player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Add `count` players named "Player 1", "Player 2" and so on.
    pub fn players(mut self, count: usize) -> Self {
        for _ in 0..count {
            let name = format!("Player {}", self.players.len() + 1);
            self.players.push(name);
        }
        self
    }

    /// Use this deck as given (top card last) instead of a shuffled standard one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game with every player seated, before setup.
    pub fn build<D: Decider>(self, decider: D) -> Result<Game<D>> {
        let mut game = match self.deck {
            Some(deck) => Game::with_deck(self.config, deck, decider),
            None => Game::new(self.config, decider),
        };
        for name in self.players {
            game.add_player(name)?;
        }
        Ok(game)
    }

    /// Build and set up the game, ready for the first turn.
    pub fn start<D: Decider>(self, decider: D) -> Result<Game<D>> {
        let cards_per_player = self.config.cards_per_player;
        let mut game = self.build(decider)?;
        game.setup(cards_per_player)?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PlayerId, TakiError};
    use crate::decision::Scripted;

    #[test]
    fn test_build_seats_players() {
        let game = GameBuilder::new().player("ann").players(2).build(Scripted::new()).unwrap();

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.player_name(PlayerId::new(0)), Some("ann"));
        assert_eq!(game.player_name(PlayerId::new(1)), Some("Player 2"));
        assert_eq!(game.player_name(PlayerId::new(2)), Some("Player 3"));
        assert_eq!(game.state(), GameState::NoGame);
        assert_eq!(game.deck().len(), 58);
    }

    #[test]
    fn test_start_deals() {
        let game = GameBuilder::new()
            .seed(7)
            .cards_per_player(5)
            .players(4)
            .start(Scripted::new())
            .unwrap();

        assert_eq!(game.state(), GameState::Normal);
        assert_eq!(game.hand(PlayerId::new(3)).map(|h| h.len()), Some(5));
    }

    #[test]
    fn test_start_needs_players() {
        let err = GameBuilder::new().players(1).start(Scripted::new()).unwrap_err();
        assert_eq!(err, TakiError::NotEnoughPlayers { min: 2, found: 1 });
    }

    #[test]
    fn test_same_seed_same_deal() {
        let deal = |seed| {
            let game = GameBuilder::new().seed(seed).players(2).start(Scripted::new()).unwrap();
            (game.hand(PlayerId::new(0)).unwrap().sorted(), game.next_player(), game.direction())
        };
        assert_eq!(deal(11), deal(11));
    }

    #[test]
    fn test_deck_copies() {
        let game = GameBuilder::new().deck_copies(2).players(2).build(Scripted::new()).unwrap();
        assert_eq!(game.deck().len(), 116);
    }
}
