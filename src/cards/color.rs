//! Colors, signs and the active play constraint.
//!
//! A played card must match the active color or the active sign. Both are
//! tracked as a [`Target`], which besides a concrete value can be wild
//! (after a king), cleared (the sign after a color change) or unset
//! (before the starter card is revealed).

use serde::{Deserialize, Serialize};

/// The four card colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// All colors, in deck-building order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// One-letter code printed on cards.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
        }
    }

    /// Rank used for hand ordering (alphabetical by letter).
    pub(crate) const fn sort_rank(self) -> u8 {
        match self {
            Color::Blue => 0,
            Color::Green => 1,
            Color::Red => 2,
            Color::Yellow => 3,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// The label a card matches on besides its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// A plain number card.
    Number(u8),
    Stop,
    Plus,
    PlusTwo,
    FlipOrder,
    Taki,
}

impl Sign {
    /// Numbers printed on the standard deck (there is no 2).
    pub const NUMERALS: [u8; 8] = [1, 3, 4, 5, 6, 7, 8, 9];

    /// Whether the label is a single character when printed.
    pub(crate) fn is_short(self) -> bool {
        matches!(self, Sign::Number(n) if n < 10) || self == Sign::Plus
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Number(n) => write!(f, "{n}"),
            Sign::Stop => f.write_str("stop"),
            Sign::Plus => f.write_str("+"),
            Sign::PlusTwo => f.write_str("+2"),
            Sign::FlipOrder => f.write_str("<=>"),
            Sign::Taki => f.write_str("TAKI"),
        }
    }
}

/// An active color or sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target<T> {
    /// No card has been revealed yet.
    #[default]
    Unset,
    /// Deliberately empty: nothing matches.
    Cleared,
    /// Everything matches.
    Wild,
    /// Only this value matches.
    Exact(T),
}

impl<T: PartialEq + Copy> Target<T> {
    /// Check whether a card attribute satisfies this target.
    #[must_use]
    pub fn matches(&self, value: T) -> bool {
        match self {
            Target::Wild => true,
            Target::Exact(v) => *v == value,
            Target::Unset | Target::Cleared => false,
        }
    }

    /// Check whether this target matches an optional attribute.
    ///
    /// A card without the attribute only matches a wild target.
    #[must_use]
    pub fn matches_opt(&self, value: Option<T>) -> bool {
        match value {
            Some(v) => self.matches(v),
            None => self.is_wild(),
        }
    }

    /// Check for the king's wildcard.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        matches!(self, Target::Wild)
    }

    /// The concrete value, if any.
    #[must_use]
    pub fn exact(&self) -> Option<T> {
        match self {
            Target::Exact(v) => Some(*v),
            _ => None,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Target<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Unset => f.write_str("unset"),
            Target::Cleared => f.write_str("none"),
            Target::Wild => f.write_str("anything"),
            Target::Exact(v) => write!(f, "{v}"),
        }
    }
}

/// The active color and sign together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    pub color: Target<Color>,
    pub sign: Target<Sign>,
}

impl Constraint {
    /// Constraint set by a card carrying both a color and a sign.
    #[must_use]
    pub fn exact(color: Color, sign: Sign) -> Self {
        Self {
            color: Target::Exact(color),
            sign: Target::Exact(sign),
        }
    }

    /// Constraint set by a king.
    #[must_use]
    pub fn wild() -> Self {
        Self {
            color: Target::Wild,
            sign: Target::Wild,
        }
    }

    /// Whether both halves have been assigned.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.color != Target::Unset && self.sign != Target::Unset
    }

    /// Whether a card with these attributes matches on color or sign.
    #[must_use]
    pub fn admits(&self, color: Option<Color>, sign: Option<Sign>) -> bool {
        self.color.matches_opt(color) || self.sign.matches_opt(sign)
    }
}
