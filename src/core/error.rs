//! Match-aborting errors.
//!
//! Every variant is an invariant violation: the match cannot continue.
//! Declining to play, chain a +2 or break a +3 are not errors, they are
//! ordinary answers from the decision collaborator.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, TakiError>;

/// Errors that abort a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TakiError {
    /// An operation was called in a state that doesn't allow it.
    #[error("can't {operation} in state {state}")]
    InvalidState {
        /// What was attempted.
        operation: &'static str,
        /// State name at the time.
        state: String,
    },

    /// Setup needs more seats.
    #[error("need at least {min} players, found {found}")]
    NotEnoughPlayers {
        /// Minimum player count.
        min: usize,
        /// Players registered.
        found: usize,
    },

    /// Every seat is taken.
    #[error("at most {max} players can join")]
    TooManyPlayers {
        /// Seat limit.
        max: usize,
    },

    /// The deck ran out before a starter with a color and a sign showed up.
    #[error("no starter cards in the deck")]
    NoStarterCard,

    /// A draw was needed but neither the deck nor the pile had cards to give.
    #[error("deck is empty and the pile has no disposable cards to recycle")]
    DeckExhausted,

    /// An effect was dispatched for a card its player doesn't hold.
    #[error("{player} doesn't hold card {card}")]
    CardNotInHand {
        /// The acting player.
        player: PlayerId,
        /// The missing card.
        card: CardId,
    },

    /// An effect that needs an acting player was reached without one.
    #[error("card {card} can't resolve without an acting player")]
    MissingActor {
        /// The card being resolved.
        card: CardId,
    },

    /// The collaborator kept answering outside the offered options.
    #[error("{player} gave {attempts} invalid answers in a row")]
    DecisionRejected {
        /// Who was asked.
        player: PlayerId,
        /// How many answers were rejected.
        attempts: u32,
    },

    /// The match already has an outcome.
    #[error("the game is over")]
    GameOver,
}

impl TakiError {
    pub(crate) fn invalid_state(operation: &'static str, state: impl std::fmt::Display) -> Self {
        TakiError::InvalidState {
            operation,
            state: state.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_messages() {
        let err = TakiError::invalid_state("set up", GameState::Normal);
        assert_eq!(err.to_string(), "can't set up in state normal");

        let err = TakiError::CardNotInHand {
            player: PlayerId::new(1),
            card: CardId::new(7),
        };
        assert_eq!(err.to_string(), "Player 1 doesn't hold card #7");

        let err = TakiError::NotEnoughPlayers { min: 2, found: 1 };
        assert_eq!(err.to_string(), "need at least 2 players, found 1");

        let err = TakiError::TooManyPlayers { max: 255 };
        assert_eq!(err.to_string(), "at most 255 players can join");
    }
}
