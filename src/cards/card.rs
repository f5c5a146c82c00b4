//! Card identity, variants and display ordering.
//!
//! A [`Card`] is a `CardKind` stamped with a unique [`CardId`]. Two cards of
//! the same kind (the two "change color" cards, or the same card from two
//! deck copies) stay distinguishable through their ids. Equality, hashing
//! and the tie-break of the ordering all go through the id.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::color::{Color, Sign};

/// Unique identity of one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of card variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number { color: Color, value: u8 },
    Stop(Color),
    PlusTwo(Color),
    FlipOrder(Color),
    Plus(Color),
    Taki(Color),
    /// Takes its color when played.
    SuperTaki,
    /// Lets the player pick the next color.
    ChangeColor,
    King,
    PlusThree,
    BreakThree,
}

impl CardKind {
    /// Printed color, if the variant has one.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            CardKind::Number { color, .. }
            | CardKind::Stop(color)
            | CardKind::PlusTwo(color)
            | CardKind::FlipOrder(color)
            | CardKind::Plus(color)
            | CardKind::Taki(color) => Some(color),
            _ => None,
        }
    }

    /// Printed sign, if the variant has one.
    #[must_use]
    pub fn sign(self) -> Option<Sign> {
        match self {
            CardKind::Number { value, .. } => Some(Sign::Number(value)),
            CardKind::Stop(_) => Some(Sign::Stop),
            CardKind::PlusTwo(_) => Some(Sign::PlusTwo),
            CardKind::FlipOrder(_) => Some(Sign::FlipOrder),
            CardKind::Plus(_) => Some(Sign::Plus),
            CardKind::Taki(_) | CardKind::SuperTaki => Some(Sign::Taki),
            _ => None,
        }
    }

    /// Whether the variant carries a late-bound color.
    #[must_use]
    pub fn takes_assigned_color(self) -> bool {
        matches!(self, CardKind::SuperTaki | CardKind::ChangeColor)
    }

    /// Hand-ordering token: (color rank, sign rank).
    ///
    /// Colored cards come first by color letter; colorless cards share the
    /// last color rank. Within a color: numerals, stop, flip, plus, +2, TAKI.
    /// Among colorless: #3, change color, king, +3, SUPER TAKI.
    #[must_use]
    pub fn sort_token(self) -> (u8, u8) {
        const COLORLESS: u8 = 4;
        let sign_rank = match self {
            CardKind::Number { value, .. } => value,
            CardKind::Stop(_) => 10,
            CardKind::FlipOrder(_) => 11,
            CardKind::Plus(_) => 12,
            CardKind::PlusTwo(_) => 13,
            CardKind::Taki(_) => 14,
            CardKind::BreakThree => 20,
            CardKind::ChangeColor => 30,
            CardKind::King => 31,
            CardKind::PlusThree => 32,
            CardKind::SuperTaki => 33,
        };
        let color_rank = self.color().map_or(COLORLESS, Color::sort_rank);
        (color_rank, sign_rank)
    }
}

/// One physical card.
///
/// Immutable apart from `assigned_color`, which SUPER TAKI and change color
/// cards receive while being played.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    kind: CardKind,
    assigned_color: Option<Color>,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            assigned_color: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// The printed color, or the assigned one for SUPER TAKI.
    ///
    /// A change color card never reports a color: it doesn't constrain
    /// TAKI placement and never becomes the active card.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            CardKind::SuperTaki => self.assigned_color,
            kind => kind.color(),
        }
    }

    /// The printed sign.
    #[must_use]
    pub fn sign(&self) -> Option<Sign> {
        self.kind.sign()
    }

    /// Color picked while this card was played, if any.
    #[must_use]
    pub fn assigned_color(&self) -> Option<Color> {
        self.assigned_color
    }

    /// Color and sign, if the card carries both right now.
    #[must_use]
    pub fn color_and_sign(&self) -> Option<(Color, Sign)> {
        Some((self.color()?, self.sign()?))
    }

    /// Whether the card can become the pile's active card.
    #[must_use]
    pub fn is_active_eligible(&self) -> bool {
        self.color_and_sign().is_some()
    }

    pub(crate) fn assign_color(&mut self, color: Color) {
        debug_assert!(self.kind.takes_assigned_color());
        self.assigned_color = Some(color);
    }

    /// Forget the assigned color (the card is going back into the deck).
    pub(crate) fn reset(&mut self) {
        self.assigned_color = None;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.kind.sort_token(), self.id).cmp(&(other.kind.sort_token(), other.id))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::SuperTaki => match self.assigned_color {
                Some(color) => write!(f, "SUPER TAKI ({color})"),
                None => f.write_str("SUPER TAKI"),
            },
            CardKind::ChangeColor => match self.assigned_color {
                Some(color) => write!(f, "change color (to {color})"),
                None => f.write_str("change color"),
            },
            CardKind::King => f.write_str("king"),
            CardKind::PlusThree => f.write_str("+3"),
            CardKind::BreakThree => f.write_str("#3"),
            kind => match (kind.sign(), kind.color()) {
                (Some(sign), Some(color)) if sign.is_short() => {
                    write!(f, "{sign}{}", color.letter())
                }
                (Some(sign), Some(color)) => write!(f, "{sign} {}", color.letter()),
                _ => unreachable!("colored variants carry a sign and a color"),
            },
        }
    }
}
