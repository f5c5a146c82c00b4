//! A player's hand.
//!
//! Set semantics keyed by card identity: two equal-looking cards are two
//! entries. Iteration order is unspecified; `sorted` gives the display order.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};

/// Cards held by one player.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: FxHashMap<CardId, Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card.
    ///
    /// Returns `false` if a card with the same identity is already held.
    pub fn insert(&mut self, card: Card) -> bool {
        match self.cards.entry(card.id()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(card);
                true
            }
        }
    }

    /// Remove a card by identity.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        self.cards.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards in display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.values().copied().collect();
        cards.sort();
        cards
    }
}
