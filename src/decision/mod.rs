//! The decision boundary between the engine and whoever plays.
//!
//! The engine never knows whether a human at a console, a network client or
//! an AI policy is answering. It issues synchronous requests through a
//! [`Decider`] and validates the answers:
//!
//! - `choose_among`: pick one of the offered cards, or decline when allowed
//! - `choose_color`: pick a color
//! - `confirm`: answer a yes/no [`Prompt`]
//! - `notify`: one-way announcement to an [`Audience`]
//!
//! An answer outside the offered set is reported back to the player as
//! [`Notice::InvalidAnswer`] and the same request is issued again.

mod notice;
mod scripted;

pub use notice::{Audience, Named, Notice};
pub use scripted::{Answer, Scripted};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Color};
use crate::core::PlayerId;
use crate::game::GameView;

/// What a card choice is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Play a card this turn; declining means drawing.
    PlayCard,
    /// Add a card to an open TAKI of this color; declining ends the TAKI.
    PlaceOnTaki { color: Color },
}

/// A card choice offered to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub kind: RequestKind,
    /// Offered cards in hand display order.
    pub options: Vec<Card>,
    /// Whether `Selection::Decline` is an acceptable answer.
    pub can_decline: bool,
}

impl Request {
    pub fn new(kind: RequestKind, options: Vec<Card>, can_decline: bool) -> Self {
        Self {
            kind,
            options,
            can_decline,
        }
    }

    /// Check whether a card is among the options.
    #[must_use]
    pub fn offers(&self, id: CardId) -> bool {
        self.options.iter().any(|c| c.id() == id)
    }

    /// Check whether an answer is within the offered set.
    #[must_use]
    pub fn accepts(&self, selection: Selection) -> bool {
        match selection {
            Selection::Pick(id) => self.offers(id),
            Selection::Decline => self.can_decline,
        }
    }
}

/// Answer to a [`Request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Pick(CardId),
    Decline,
}

/// Yes/no questions the engine asks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Declined to play although a legal card exists: draw anyway?
    DrawInstead,
    /// Declined to place more cards although some fit: close the TAKI?
    EndTaki,
    /// A +3 is coming: play the #3 breaker?
    PlayBreaker,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::DrawInstead => f.write_str("draw a card"),
            Prompt::EndTaki => f.write_str("end taki"),
            Prompt::PlayBreaker => f.write_str("you have a +3 breaker, play it?"),
        }
    }
}

/// The capabilities the engine requires from whoever plays.
///
/// One decider answers for every seat; `player` says who is being asked.
/// `view` is that player's view of the table at the time of the request.
pub trait Decider {
    /// Pick one of `request.options`, or decline if `request.can_decline`.
    fn choose_among(&mut self, player: PlayerId, view: &GameView<'_>, request: &Request) -> Selection;

    /// Pick a color.
    fn choose_color(&mut self, player: PlayerId, view: &GameView<'_>) -> Color;

    /// Answer a yes/no question.
    fn confirm(&mut self, player: PlayerId, view: &GameView<'_>, prompt: Prompt) -> bool;

    /// Receive an announcement. Rendering and de-duplication are up to the
    /// implementation. Default implementation ignores it.
    fn notify(&mut self, _notice: &Notice, _audience: Audience) {}
}
