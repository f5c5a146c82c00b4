//! Everything on the table except the decision collaborator.

use crate::cards::Constraint;
use crate::core::{Direction, GameConfig, GameRng, GameState, PlayerId, PlayerMap};
use crate::zones::{Deck, Hand, Pile};

use super::result::GameResult;
use super::view::GameView;

/// One player's seat.
#[derive(Clone, Debug)]
pub struct Seat {
    pub(crate) name: String,
    pub(crate) hand: Hand,
}

impl Seat {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// Cards, seats and bookkeeping of one match.
///
/// Kept apart from the decider so a [`GameView`] can borrow the table
/// while the decider is borrowed mutably.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) config: GameConfig,
    pub(crate) seats: PlayerMap<Seat>,
    pub(crate) deck: Deck,
    pub(crate) pile: Pile,
    pub(crate) state: GameState,
    pub(crate) active: Constraint,
    pub(crate) direction: Direction,
    pub(crate) next_player: PlayerId,
    pub(crate) deck_rng: GameRng,
    pub(crate) seat_rng: GameRng,
    pub(crate) result: Option<GameResult>,
}

impl Table {
    pub(crate) fn new(config: GameConfig, deck: Deck) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            deck_rng: rng.for_context("deck"),
            seat_rng: rng.for_context("seating"),
            config,
            seats: PlayerMap::empty(),
            deck,
            pile: Pile::new(),
            state: GameState::NoGame,
            active: Constraint::default(),
            direction: Direction::Forward,
            next_player: PlayerId::new(0),
            result: None,
        }
    }

    /// Seats starting at `start` in the current direction, each once.
    #[must_use]
    pub fn players_in_order(&self, start: PlayerId) -> PlayersInOrder {
        PlayersInOrder::new(start, self.seats.player_count(), self.direction)
    }

    /// The table as seen by one player.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> GameView<'_> {
        GameView::new(self, viewer)
    }
}

/// Finite walk around the table.
///
/// Yields `start` first, then every other seat in turn direction, and stops
/// before reaching `start` again. Re-invoke to restart.
#[derive(Clone, Debug)]
pub struct PlayersInOrder {
    current: usize,
    remaining: usize,
    player_count: usize,
    direction: Direction,
}

impl PlayersInOrder {
    pub(crate) fn new(start: PlayerId, player_count: usize, direction: Direction) -> Self {
        Self {
            current: start.index(),
            remaining: player_count,
            player_count,
            direction,
        }
    }
}

impl Iterator for PlayersInOrder {
    type Item = PlayerId;

    fn next(&mut self) -> Option<PlayerId> {
        if self.remaining == 0 {
            return None;
        }
        let player = PlayerId::new(self.current as u8);
        self.remaining -= 1;
        self.current = self.direction.step(self.current, self.player_count);
        Some(player)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PlayersInOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(order: PlayersInOrder) -> Vec<u8> {
        order.map(|p| p.0).collect()
    }

    #[test]
    fn test_forward_wraps_once() {
        let order = PlayersInOrder::new(PlayerId::new(2), 4, Direction::Forward);
        assert_eq!(order.len(), 4);
        assert_eq!(ids(order), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_reversed() {
        let order = PlayersInOrder::new(PlayerId::new(1), 4, Direction::Reversed);
        assert_eq!(ids(order), vec![1, 0, 3, 2]);
    }

    #[test]
    fn test_restartable() {
        let order = PlayersInOrder::new(PlayerId::new(0), 3, Direction::Forward);
        let first: Vec<_> = order.clone().collect();
        let second: Vec<_> = order.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_uses_current_direction() {
        let mut table = Table::new(GameConfig::default(), Deck::new());
        for name in ["a", "b", "c"] {
            table.seats.push(Seat::new(name.to_string()));
        }

        assert_eq!(ids(table.players_in_order(PlayerId::new(0))), vec![0, 1, 2]);
        table.direction = Direction::Reversed;
        assert_eq!(ids(table.players_in_order(PlayerId::new(0))), vec![0, 2, 1]);
    }
}
