//! The face-up discard pile.
//!
//! Append-only, with one cursor: the index of the most recent card that
//! carried both a color and a sign when it was appended (the active card).
//! Everything below the cursor is disposable and is what the deck gets
//! refilled from. The cursor is unset only while no eligible card has been
//! appended yet.

use im::Vector;

use crate::cards::{Card, Color};

/// Discard pile with an active-card cursor.
#[derive(Clone, Debug, Default)]
pub struct Pile {
    cards: Vector<Card>,
    active: Option<usize>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card, moving the cursor onto it if it is eligible.
    ///
    /// Returns whether the card became the active card.
    pub fn push(&mut self, card: Card) -> bool {
        let eligible = card.is_active_eligible();
        self.cards.push_back(card);
        if eligible {
            self.active = Some(self.cards.len() - 1);
        }
        eligible
    }

    /// Remove and return every card strictly below the active card.
    ///
    /// The active card becomes the sole element. Returns nothing when no
    /// card is active.
    pub fn extract_disposable(&mut self) -> Vec<Card> {
        let Some(index) = self.active else {
            return Vec::new();
        };
        let kept = self.cards.split_off(index);
        let disposable = std::mem::replace(&mut self.cards, kept);
        self.active = Some(0);
        disposable.into_iter().collect()
    }

    /// Number of cards below the active card.
    #[must_use]
    pub fn disposable_count(&self) -> usize {
        self.active.unwrap_or(0)
    }

    /// Record the color a just-played card was given.
    ///
    /// Doesn't move the cursor: eligibility is decided at append time.
    pub(crate) fn assign_top_color(&mut self, color: Color) {
        if let Some(top) = self.cards.back_mut() {
            top.assign_color(color);
        }
    }

    /// The most recently appended card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// The active card.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.active.and_then(|i| self.cards.get(i))
    }

    /// Index of the active card.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }
}
