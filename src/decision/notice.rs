//! One-way announcements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Direction, PlayerId};

/// Who an announcement is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    All,
    AllExcept(PlayerId),
    Only(PlayerId),
}

impl Audience {
    /// Check whether a player is in the audience.
    #[must_use]
    pub fn includes(self, player: PlayerId) -> bool {
        match self {
            Audience::All => true,
            Audience::AllExcept(excluded) => excluded != player,
            Audience::Only(only) => only == player,
        }
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    PlayerJoined { player: PlayerId, name: String },
    HandsDealt,
    InvalidStarter(Card),
    StarterCard(Card),
    StartingPlayer(PlayerId),
    TurnOrder(Direction),
    Played { player: PlayerId, card: Card, cards_left: usize },
    /// Private: the card a player drew.
    DrewCard { player: PlayerId, card: Card },
    /// Public: how many cards a player drew.
    Drew { player: PlayerId, count: usize },
    ColorChanged(Color),
    SuperTakiColor(Color),
    TakiDropped { player: PlayerId, cards: Vec<Card> },
    TakiClosed,
    BrokePlusThree(PlayerId),
    Skipped(PlayerId),
    ReloadingDeck,
    Winner(PlayerId),
    Tie(Vec<PlayerId>),
    /// The last answer wasn't one of the offered options.
    InvalidAnswer,
}

type WritePlayer<'w> = &'w dyn Fn(&mut fmt::Formatter<'_>, PlayerId) -> fmt::Result;

impl Notice {
    /// Render with registered names in place of seat ids.
    ///
    /// Seats the lookup doesn't know fall back to the seat id.
    ///
    /// ```
    /// use taki_engine::{Notice, PlayerId};
    ///
    /// let notice = Notice::Skipped(PlayerId::new(1));
    /// let names = ["ann", "bo"];
    /// let named = notice.named(|p| names.get(p.index()).copied());
    /// assert_eq!(named.to_string(), "bo skipped");
    /// assert_eq!(notice.to_string(), "Player 1 skipped");
    /// ```
    pub fn named<F, N>(&self, name_of: F) -> Named<'_, F>
    where
        F: Fn(PlayerId) -> Option<N>,
        N: fmt::Display,
    {
        Named { notice: self, name_of }
    }

    fn write_with(&self, f: &mut fmt::Formatter<'_>, who: WritePlayer<'_>) -> fmt::Result {
        match self {
            Notice::PlayerJoined { name, .. } => write!(f, "new player: {name}"),
            Notice::HandsDealt => f.write_str("all players have hands"),
            Notice::InvalidStarter(card) => write!(f, "invalid starter: {card}"),
            Notice::StarterCard(card) => write!(f, "starter card: {card}"),
            Notice::StartingPlayer(player) => {
                f.write_str("starting player ")?;
                who(f, *player)
            }
            Notice::TurnOrder(direction) => write!(f, "turn order: {direction}"),
            Notice::Played { player, card, cards_left } => {
                let noun = if *cards_left == 1 { "card" } else { "cards" };
                who(f, *player)?;
                write!(f, " played {card} ({cards_left} {noun} left)")
            }
            Notice::DrewCard { card, .. } => write!(f, "you drew {card}"),
            Notice::Drew { player, count: 1 } => {
                who(f, *player)?;
                f.write_str(" drew a card")
            }
            Notice::Drew { player, count } => {
                who(f, *player)?;
                write!(f, " drew {count} cards")
            }
            Notice::ColorChanged(color) => write!(f, "color changed to {color}"),
            Notice::SuperTakiColor(color) => write!(f, "SUPER TAKI is {color}"),
            Notice::TakiDropped { player, cards } => {
                who(f, *player)?;
                write!(f, " dropped {} cards: ", cards.len())?;
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
            Notice::TakiClosed => f.write_str("closed TAKI"),
            Notice::BrokePlusThree(player) => {
                who(f, *player)?;
                f.write_str(" broke the +3!")
            }
            Notice::Skipped(player) => {
                who(f, *player)?;
                f.write_str(" skipped")
            }
            Notice::ReloadingDeck => f.write_str("reloading deck"),
            Notice::Winner(player) => {
                f.write_str("Winner: ")?;
                who(f, *player)
            }
            Notice::Tie(players) => {
                f.write_str("Tie between: ")?;
                for (i, player) in players.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    who(f, *player)?;
                }
                Ok(())
            }
            Notice::InvalidAnswer => f.write_str("bad input, enter again"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|f, player| write!(f, "{player}"))
    }
}

/// A [`Notice`] displayed with player names, from [`Notice::named`].
pub struct Named<'n, F> {
    notice: &'n Notice,
    name_of: F,
}

impl<F, N> fmt::Display for Named<'_, F>
where
    F: Fn(PlayerId) -> Option<N>,
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.notice.write_with(f, &|f, player| match (self.name_of)(player) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{player}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKind};

    #[test]
    fn test_audience() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert!(Audience::All.includes(p0));
        assert!(!Audience::AllExcept(p0).includes(p0));
        assert!(Audience::AllExcept(p0).includes(p1));
        assert!(Audience::Only(p1).includes(p1));
        assert!(!Audience::Only(p1).includes(p0));
    }

    #[test]
    fn test_display() {
        let stop = Card::new(CardId::new(0), CardKind::Stop(Color::Red));
        let played = Notice::Played {
            player: PlayerId::new(1),
            card: stop,
            cards_left: 1,
        };
        assert_eq!(played.to_string(), "Player 1 played stop r (1 card left)");

        let drew = Notice::Drew { player: PlayerId::new(0), count: 3 };
        assert_eq!(drew.to_string(), "Player 0 drew 3 cards");

        let tie = Notice::Tie(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert_eq!(tie.to_string(), "Tie between: Player 0, Player 2");
    }

    #[test]
    fn test_named_uses_registered_names() {
        let names = ["ann", "bo"];
        let name_of = |p: PlayerId| names.get(p.index()).copied();

        let king = Card::new(CardId::new(3), CardKind::King);
        let played = Notice::Played {
            player: PlayerId::new(0),
            card: king,
            cards_left: 2,
        };
        assert_eq!(played.named(name_of).to_string(), format!("ann played {king} (2 cards left)"));

        let winner = Notice::Winner(PlayerId::new(1));
        assert_eq!(winner.named(name_of).to_string(), "Winner: bo");

        // Unknown seats keep their id.
        let tie = Notice::Tie(vec![PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(tie.named(name_of).to_string(), "Tie between: bo, Player 2");
    }
}
