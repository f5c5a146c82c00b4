//! Card model: identities, variants, colors/signs and legality.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card
//! - `CardKind`: The closed set of card variants
//! - `Card`: A kind plus identity plus late-bound color
//! - `Color`, `Sign`: Printed attributes
//! - `Target`, `Constraint`: The active color/sign a play must match
//!
//! Effects live in [`crate::effects`]; this module only answers
//! "what is this card" and "may it be played now".

pub mod card;
pub mod color;
mod legality;

pub use card::{Card, CardId, CardKind};
pub use color::{Color, Constraint, Sign, Target};
