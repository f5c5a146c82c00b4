//! The face-down draw deck.
//!
//! An ordered stack: index 0 is the bottom, the last card is the top and
//! is drawn first. The deck is refilled from the pile's disposable cards
//! when it runs dry.

use crate::cards::{Card, CardId, CardKind, Color, Sign};
use crate::core::GameRng;

/// Draw deck. Top of the deck is the end of the vec.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Create a deck from kinds, bottom first, numbering ids from 0.
    ///
    /// ```
    /// use taki_engine::cards::{CardKind, Color};
    /// use taki_engine::zones::Deck;
    ///
    /// let mut deck = Deck::from_kinds([CardKind::King, CardKind::Stop(Color::Red)]);
    /// assert_eq!(deck.draw().map(|c| c.kind()), Some(CardKind::Stop(Color::Red)));
    /// assert_eq!(deck.draw().map(|c| c.kind()), Some(CardKind::King));
    /// assert!(deck.draw().is_none());
    /// ```
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = CardKind>) -> Self {
        let cards = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Card::new(CardId::new(i as u32), kind))
            .collect();
        Self { cards }
    }

    /// The standard deck, unshuffled, `copies` times over.
    ///
    /// Each copy holds, per color, the numerals 1 and 3-9 plus one flip,
    /// stop, plus, +2 and TAKI; then one +3, #3, SUPER TAKI and king and
    /// two change color cards. 58 cards per copy.
    #[must_use]
    pub fn standard(copies: usize) -> Self {
        Self::from_kinds((0..copies).flat_map(|_| Self::standard_kinds()))
    }

    fn standard_kinds() -> impl Iterator<Item = CardKind> {
        let colored = Color::ALL.into_iter().flat_map(|color| {
            Sign::NUMERALS
                .into_iter()
                .map(move |value| CardKind::Number { color, value })
                .chain([
                    CardKind::FlipOrder(color),
                    CardKind::Stop(color),
                    CardKind::Plus(color),
                    CardKind::PlusTwo(color),
                    CardKind::Taki(color),
                ])
        });
        colored.chain([
            CardKind::PlusThree,
            CardKind::BreakThree,
            CardKind::SuperTaki,
            CardKind::King,
            CardKind::ChangeColor,
            CardKind::ChangeColor,
        ])
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put recycled cards on top, clearing any color they were assigned.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards.into_iter().map(|mut card| {
            card.reset();
            card
        }));
    }

    /// Shuffle the whole deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// The top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
