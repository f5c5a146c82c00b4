//! What one player can see of the table.
//!
//! Handed to the decider with every request. Other players' hands are
//! only visible as sizes; the deck only as a count.

use crate::cards::{Card, Constraint};
use crate::core::{Direction, GameState, PlayerId};

use super::table::Table;

/// Read-only, per-viewer snapshot of a match.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    table: &'a Table,
    viewer: PlayerId,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(table: &'a Table, viewer: PlayerId) -> Self {
        Self { table, viewer }
    }

    /// Who this view belongs to.
    #[must_use]
    pub fn viewer(&self) -> PlayerId {
        self.viewer
    }

    /// The viewer's name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.table.seats[self.viewer].name()
    }

    /// The viewer's hand in display order.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.table.seats[self.viewer].hand().sorted()
    }

    /// The other players in turn order after the viewer, with hand sizes.
    #[must_use]
    pub fn other_players(&self) -> Vec<(PlayerId, &'a str, usize)> {
        let table = self.table;
        table
            .players_in_order(self.viewer)
            .skip(1)
            .map(|p| (p, table.seats[p].name(), table.seats[p].hand().len()))
            .collect()
    }

    /// Cards played so far, newest first.
    pub fn pile(&self) -> impl DoubleEndedIterator<Item = &'a Card> + 'a {
        self.table.pile.iter().rev()
    }

    /// The most recently played card.
    #[must_use]
    pub fn top_card(&self) -> Option<&'a Card> {
        self.table.pile.top()
    }

    /// The card plays are currently measured against.
    #[must_use]
    pub fn active_card(&self) -> Option<&'a Card> {
        self.table.pile.active_card()
    }

    /// Active color and sign.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.table.active
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.table.state
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.table.direction
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.table.deck.len()
    }
}

impl std::fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("other players: ")?;
        for (i, (_, name, size)) in self.other_players().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} ({size} cards)")?;
        }
        f.write_str("\ncards played: ")?;
        for (i, card) in self.pile().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        match self.active_card() {
            Some(card) => write!(f, "\ncurrently active card: {card}")?,
            None => f.write_str("\ncurrently active card: none")?,
        }
        write!(f, "\n{} cards left in deck", self.deck_len())
    }
}
